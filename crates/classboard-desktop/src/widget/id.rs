//! Widget identifiers

use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Opaque widget identifier.
///
/// Generated identifiers have the form `widget-<n>`; identifiers read from
/// older saves are kept verbatim even when they do not follow that form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    const PREFIX: &'static str = "widget-";

    /// Identifier for counter value `seq`
    pub fn from_seq(seq: u64) -> Self {
        Self(format!("{}{}", Self::PREFIX, seq))
    }

    /// Counter value encoded in the identifier, if it is a generated one
    pub fn seq(&self) -> Option<u64> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Smallest counter value not in `used`. Used once the counter can no
/// longer move past every identifier on the board.
pub(crate) fn first_free_seq(used: &HashSet<u64>) -> u64 {
    (1..=u64::MAX).find(|seq| !used.contains(seq)).unwrap_or(0)
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
