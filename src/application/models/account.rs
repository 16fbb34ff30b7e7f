use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's trading account.
///
/// Singleton per session: the backend keys it on a fixed user identifier
/// and owns the balance entirely. The client never derives it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Identifier the account is keyed on
    #[serde(rename = "userIdentifier")]
    pub user_identifier: String,
    /// Available cash balance
    pub balance: f64,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}
