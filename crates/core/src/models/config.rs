use serde::{Deserialize, Serialize};

use super::portfolio::PortfolioEntry;
use super::settings::Settings;

/// The full configuration document exchanged with the backend.
///
/// Every save transmits the whole document; there is no partial update.
/// Entry order is display/edit order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub settings: Settings,
    pub portfolio: Vec<PortfolioEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            portfolio: Vec::new(),
        }
    }
}
