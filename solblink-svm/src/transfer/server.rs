//! Metadata served on `GET` for the `transfer-sol` action.

use serde::{Deserialize, Serialize};
use solana_pubkey::pubkey;
use solblink::action::{ActionGetResponse, ActionLinks, ActionParameter, ActionType, LinkedAction};
use solblink::amount::Amount;

use crate::chain::Address;

/// Path the action is mounted at.
pub const TRANSFER_SOL_PATH: &str = "/api/actions/transfer-sol";

/// Destination used when a request names none.
pub const DEFAULT_DESTINATION: Address =
    Address::new(pubkey!("5jZ8KE9B2i1svQ7jRK6geRTMEWLKT22cAyd7T33ohVWq"));

/// Name of the amount placeholder in the templated link.
const AMOUNT_PARAMETER: &str = "amount";

/// Branding and preset amounts of the `transfer-sol` action.
///
/// Deserializable so it can be embedded in the server configuration; every
/// field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSolAction {
    /// Title shown by the wallet.
    #[serde(default = "defaults::title")]
    pub title: String,
    /// Absolute icon URL.
    #[serde(default = "defaults::icon")]
    pub icon: String,
    /// Description shown under the title.
    #[serde(default = "defaults::description")]
    pub description: String,
    /// Label of the templated link.
    #[serde(default = "defaults::label")]
    pub label: String,
    /// Placeholder of the templated link's amount input.
    #[serde(default = "defaults::amount_label")]
    pub amount_label: String,
    /// Amounts offered as one-click links, in order.
    #[serde(default = "defaults::presets")]
    pub presets: Vec<Amount>,
}

mod defaults {
    use solblink::amount::Amount;

    pub fn title() -> String {
        "Transfer SOL to Dexola! 😘".into()
    }

    pub fn icon() -> String {
        "https://solana-actions.vercel.app/solana_devs.jpg".into()
    }

    pub fn description() -> String {
        "Dexola need more SOL for build better project".into()
    }

    pub fn label() -> String {
        "Send SOL".into()
    }

    pub fn amount_label() -> String {
        "Enter the amount of SOL to send".into()
    }

    pub fn presets() -> Vec<Amount> {
        [1, 5, 10]
            .into_iter()
            .filter_map(|coins| Amount::from_whole(coins).ok())
            .collect()
    }
}

impl Default for TransferSolAction {
    fn default() -> Self {
        Self {
            title: defaults::title(),
            icon: defaults::icon(),
            description: defaults::description(),
            label: defaults::label(),
            amount_label: defaults::amount_label(),
            presets: defaults::presets(),
        }
    }
}

impl TransferSolAction {
    /// Returns the href every link of the action starts with.
    ///
    /// `origin` is the scheme and authority the client reached the server at,
    /// e.g. `https://example.com`.
    #[must_use]
    pub fn base_href(origin: &str, destination: &Address) -> String {
        format!(
            "{}{TRANSFER_SOL_PATH}?to={destination}",
            origin.trim_end_matches('/')
        )
    }

    /// Renders the action metadata for `destination`.
    ///
    /// Links are one per preset amount followed by a templated link taking the
    /// amount from user input.
    #[must_use]
    pub fn metadata(&self, origin: &str, destination: &Address) -> ActionGetResponse {
        let base_href = Self::base_href(origin, destination);
        let mut actions: Vec<LinkedAction> = self
            .presets
            .iter()
            .map(|amount| LinkedAction {
                label: format!("Send {amount} SOL"),
                href: format!("{base_href}&{AMOUNT_PARAMETER}={amount}"),
                parameters: None,
            })
            .collect();
        actions.push(LinkedAction {
            label: self.label.clone(),
            href: format!("{base_href}&{AMOUNT_PARAMETER}={{{AMOUNT_PARAMETER}}}"),
            parameters: Some(vec![ActionParameter {
                name: AMOUNT_PARAMETER.to_owned(),
                label: Some(self.amount_label.clone()),
                required: true,
            }]),
        });
        ActionGetResponse {
            kind: ActionType::Action,
            icon: self.icon.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            label: self.label.clone(),
            links: Some(ActionLinks { actions }),
        }
    }
}
