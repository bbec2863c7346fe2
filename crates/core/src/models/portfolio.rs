use serde::{Deserialize, Serialize};

/// One monitored holding, in the shape the backend stores and serves.
///
/// Exactly one value source is expected to be active: a tradable instrument
/// `code` (non-empty, `net_value` absent), or a manually supplied `net_value`
/// for funds without a live quote (`code` empty). A freshly created entry may
/// carry neither until the operator fills one in; the backend accepts that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// Instrument code understood by the quote source (e.g., "sh600519").
    /// Empty when the entry is valued by `net_value`.
    pub code: String,

    /// Display name of the holding.
    pub name: String,

    /// Number of shares/units held.
    pub held_shares: u64,

    /// Lower rebalance threshold, percent of total portfolio value, in [0, 100].
    pub min_percentage: f64,

    /// Upper rebalance threshold, in [0, 100]. Kept ≥ `min_percentage` by
    /// convention only.
    pub max_percentage: f64,

    /// Manually supplied per-unit net value. `None` whenever `code` is set.
    /// Serialized as `null` so the stored document keeps a stable shape.
    #[serde(default)]
    pub net_value: Option<f64>,
}
