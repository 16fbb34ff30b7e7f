use crate::constants::DEFAULT_QUOTE_CURRENCY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Latest quoted price for every subscribed trading pair.
///
/// The backend sends a flat JSON object keyed by "BASE/QUOTE" symbols. Each
/// fetch replaces the previous snapshot wholesale; there are no merge
/// semantics. Pairs iterate in sorted symbol order, which keeps row order
/// stable across polls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct PriceQuotes(pub BTreeMap<String, f64>);

impl PriceQuotes {
    /// Whether any pair is currently quoted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of quoted pairs
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The quoted price for a pair symbol, if present
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.0.get(symbol).copied()
    }

    /// Iterates over (symbol, price) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    /// All quoted pair symbols, in display order
    pub fn symbols(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for PriceQuotes {
    fn from(pairs: [(&str, f64); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(s, p)| (s.to_string(), p))
                .collect(),
        )
    }
}

impl fmt::Display for PriceQuotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

/// Splits a trading pair symbol into its base asset and quote currency.
///
/// A symbol without a "/QUOTE" part keeps the whole string as the base and
/// falls back to the default quote currency.
pub fn split_pair(symbol: &str) -> (&str, &str) {
    match symbol.split_once('/') {
        Some((base, quote)) => (base, quote),
        None => (symbol, DEFAULT_QUOTE_CURRENCY),
    }
}
