use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use solana_pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;

/// A Solana account address.
///
/// Wraps a [`Pubkey`] and serializes as its base58 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(Pubkey);

impl Address {
    /// Wraps a public key.
    #[must_use]
    pub const fn new(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }

    /// Returns the wrapped public key.
    #[must_use]
    pub const fn pubkey(&self) -> &Pubkey {
        &self.0
    }
}

/// Error returned when a string is not a base58-encoded 32-byte public key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Solana address {input}: {reason}")]
pub struct AddressParseError {
    input: String,
    reason: String,
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pubkey::from_str(s.trim())
            .map(Self)
            .map_err(|e| AddressParseError {
                input: s.to_owned(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Pubkey> for Address {
    fn from(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }
}

impl From<Address> for Pubkey {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "5jZ8KE9B2i1svQ7jRK6geRTMEWLKT22cAyd7T33ohVWq";

    #[test]
    fn test_address_roundtrips_through_base58() {
        let address: Address = ADDRESS.parse().unwrap();
        assert_eq!(address.to_string(), ADDRESS);
    }

    #[test]
    fn test_address_rejects_invalid_input() {
        assert!("not-an-address".parse::<Address>().is_err());
        assert!("1111".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn test_address_serializes_as_string() {
        let address: Address = ADDRESS.parse().unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{ADDRESS}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }
}
