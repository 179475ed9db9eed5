//! Query-parameter validation for transfer actions.
//!
//! Both the GET (metadata) and POST (transaction) sides of a transfer action
//! accept the same two optional query parameters, `to` and `amount`.
//! [`TransferQuery::validate`] resolves them against [`TransferDefaults`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::amount::Amount;

/// A query parameter failed validation.
///
/// Carries the name of the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid input query parameter: {0}")]
pub struct InvalidParameterError(pub &'static str);

/// Raw transfer query parameters as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferQuery {
    /// Destination address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Amount in whole coins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Values used when a query parameter is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDefaults<A> {
    /// Destination used when `to` is absent.
    pub destination: A,
    /// Amount used when `amount` is absent.
    pub amount: Amount,
}

/// Validated transfer parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams<A> {
    /// Destination address.
    pub to: A,
    /// Amount in whole coins, always positive.
    pub amount: Amount,
}

impl TransferQuery {
    /// Validates the query, falling back to `defaults` for absent parameters.
    ///
    /// Empty values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameterError`] naming `to` if the destination does
    /// not parse as an address, or `amount` if the amount is not a positive
    /// decimal number.
    pub fn validate<A>(
        &self,
        defaults: &TransferDefaults<A>,
    ) -> Result<TransferParams<A>, InvalidParameterError>
    where
        A: FromStr + Clone,
    {
        let to = match non_empty(self.to.as_deref()) {
            Some(raw) => raw.parse::<A>().map_err(|_| {
                #[cfg(feature = "telemetry")]
                tracing::debug!(to = raw, "Rejected destination parameter");
                InvalidParameterError("to")
            })?,
            None => defaults.destination.clone(),
        };
        let amount = match non_empty(self.amount.as_deref()) {
            Some(raw) => raw.parse::<Amount>().map_err(|_| {
                #[cfg(feature = "telemetry")]
                tracing::debug!(amount = raw, "Rejected amount parameter");
                InvalidParameterError("amount")
            })?,
            None => defaults.amount,
        };
        Ok(TransferParams { to, amount })
    }
}

/// Collects decoded `key=value` pairs, keeping the first occurrence of a
/// repeated key. Unknown keys are ignored.
impl<K, V> FromIterator<(K, V)> for TransferQuery
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "to" => &mut query.to,
                "amount" => &mut query.amount,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
