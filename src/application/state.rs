/// Client-side session state, threaded explicitly through the controller.
///
/// This is the only mutable state the client keeps between fetches. It is
/// owned by the controller and passed to whoever needs it, never shared
/// through globals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Pair symbols currently available for trading, in display order.
    /// Rebuilt wholesale from every successful price fetch.
    pub available_symbols: Vec<String>,
    /// Whether the price table is currently showing live rows.
    ///
    /// False while it shows a loading or placeholder message. The polling
    /// tick uses this to decide between a full redraw and an in-place
    /// price-cell update.
    pub price_table_live: bool,
}

impl SessionState {
    /// Creates an empty session state
    pub fn new() -> Self {
        Self::default()
    }
}
