//! Wire format types for Solana Actions.
//!
//! An action is served in two steps:
//!
//! 1. `GET <action url>` returns an [`ActionGetResponse`] describing the action
//!    and the links a wallet may render.
//! 2. `POST <link href>` with an [`ActionPostRequest`] returns an
//!    [`ActionPostResponse`] carrying a serialized transaction for the wallet
//!    to sign.
//!
//! Failures are reported as an [`ActionErrorBody`].
//!
//! All types serialize to JSON using camelCase field names.

use serde::{Deserialize, Serialize};

/// Discriminator of an [`ActionGetResponse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// An executable action.
    #[default]
    Action,
}

/// Discriminator of an [`ActionPostResponse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostResponseType {
    /// The response carries a transaction.
    #[default]
    Transaction,
}

/// Metadata describing an action, returned by `GET`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGetResponse {
    /// Response discriminator.
    #[serde(rename = "type", default)]
    pub kind: ActionType,
    /// Absolute URL of the icon to render.
    pub icon: String,
    /// Title of the action.
    pub title: String,
    /// Longer description of the action.
    pub description: String,
    /// Default button label.
    pub label: String,
    /// Related actions the wallet may offer instead of the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

/// Container for [`LinkedAction`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLinks {
    /// Linked actions, rendered in order.
    pub actions: Vec<LinkedAction>,
}

/// A single button or form offered by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAction {
    /// Button label.
    pub label: String,
    /// URL to `POST` to. May contain `{name}` placeholders for parameters.
    pub href: String,
    /// Parameters the user must fill in before posting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

/// An input field substituted into a [`LinkedAction::href`] template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionParameter {
    /// Placeholder name in the href template.
    pub name: String,
    /// Input placeholder text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the field must be filled in.
    #[serde(default)]
    pub required: bool,
}

impl LinkedAction {
    /// Substitutes `{name}` placeholders in the href with the given values.
    #[must_use]
    pub fn resolve_href<'a, I>(&self, values: I) -> String
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        values
            .into_iter()
            .fold(self.href.clone(), |href, (name, value)| {
                href.replace(&format!("{{{name}}}"), value)
            })
    }
}

/// Request body of an action `POST`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPostRequest {
    /// Base58 address of the wallet that will sign and pay.
    #[serde(default)]
    pub account: Option<String>,
}

/// Response body of an action `POST`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPostResponse {
    /// Response discriminator.
    #[serde(rename = "type", default)]
    pub kind: PostResponseType,
    /// Base64-encoded serialized transaction.
    pub transaction: String,
    /// Human-readable summary shown by the wallet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionErrorBody {
    /// Error message.
    pub error: String,
}
