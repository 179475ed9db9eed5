//! Action server configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! network = "solana-devnet"
//! rpc_url = "$SOLANA_RPC_URL"
//! base_url = "https://actions.example.com"
//! default_destination = "5jZ8KE9B2i1svQ7jRK6geRTMEWLKT22cAyd7T33ohVWq"
//! default_amount = 1
//!
//! [action]
//! title = "Transfer SOL to Dexola! 😘"
//! presets = [1, 5, 10]
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` — Path to configuration file (default: `config.toml`)
//! - `HOST` — Override server bind address
//! - `PORT` — Override server port

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use solblink::amount::Amount;
use solblink::params::TransferDefaults;
use solblink_svm::transfer::DEFAULT_DESTINATION;
use solblink_svm::{Address, SolanaCluster, TransferSolAction};
use url::Url;

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (default: `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Server port (default: `8080`).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Solana cluster transactions are built for (default: `solana-devnet`).
    #[serde(default)]
    pub network: SolanaCluster,

    /// JSON-RPC endpoint. Defaults to the public endpoint of `network`.
    #[serde(default)]
    pub rpc_url: Option<Url>,

    /// Public origin used in action links. When unset the origin is derived
    /// from the request's `Host` header.
    #[serde(default)]
    pub base_url: Option<Url>,

    /// Directory served for paths no route matches (default: `public`).
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Destination used when a request carries no `to` parameter.
    #[serde(default = "default_destination")]
    pub default_destination: Address,

    /// Amount in SOL used when a request carries no `amount` parameter.
    #[serde(default = "default_amount")]
    pub default_amount: Amount,

    /// Branding and preset amounts of the `transfer-sol` action.
    #[serde(default)]
    pub action: TransferSolAction,
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
}

const fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

const fn default_destination() -> Address {
    DEFAULT_DESTINATION
}

const fn default_amount() -> Amount {
    Amount::ONE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            network: SolanaCluster::default(),
            rpc_url: None,
            base_url: None,
            static_dir: default_static_dir(),
            default_destination: default_destination(),
            default_amount: default_amount(),
            action: TransferSolAction::default(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the path given by the `CONFIG` environment
    /// variable, falling back to `config.toml` in the current directory.
    ///
    /// After loading, all string values with `$VAR` / `${VAR}` references
    /// are expanded from the process environment. `HOST` and `PORT` env vars
    /// override the file values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| "config.toml".to_owned());
        Self::load_from(&path)
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path)?
        } else {
            tracing::debug!(path, "No configuration file, using defaults");
            String::new()
        };

        let mut config = Self::parse(&content)?;

        if let Ok(host) = std::env::var("HOST") {
            if let Ok(addr) = host.parse() {
                config.host = addr;
            }
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(p) = port.parse() {
                config.port = p;
            }
        }

        Ok(config)
    }

    /// Parses configuration from TOML text, expanding environment variables
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(&expand_env_vars(content))
    }

    /// Returns the JSON-RPC endpoint to connect to.
    #[must_use]
    pub fn rpc_url(&self) -> String {
        self.rpc_url.as_ref().map_or_else(
            || self.network.default_rpc_url().to_owned(),
            ToString::to_string,
        )
    }

    /// Returns the configured public origin without a trailing slash.
    #[must_use]
    pub fn public_origin(&self) -> Option<String> {
        self.base_url
            .as_ref()
            .map(|url| url.as_str().trim_end_matches('/').to_owned())
    }

    /// Returns the fallbacks for absent query parameters.
    #[must_use]
    pub const fn transfer_defaults(&self) -> TransferDefaults<Address> {
        TransferDefaults {
            destination: self.default_destination,
            amount: self.default_amount,
        }
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string from environment variables.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut closed = false;
        let mut var_name = String::new();
        while let Some(&c) = chars.peek() {
            if braced {
                if c == '}' {
                    chars.next();
                    closed = true;
                    break;
                }
            } else if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            var_name.push(c);
            chars.next();
        }

        match std::env::var(&var_name) {
            Ok(val) if !var_name.is_empty() && closed == braced => result.push_str(&val),
            _ if braced => {
                result.push_str("${");
                result.push_str(&var_name);
                if closed {
                    result.push('}');
                }
            }
            _ => {
                result.push('$');
                result.push_str(&var_name);
            }
        }
    }

    result
}
