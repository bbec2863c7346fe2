use crate::models::config::Config;
use crate::models::form::{ConfigForm, EntryForm, InputKind};
use crate::models::portfolio::PortfolioEntry;

/// Converts between the stored configuration shape and its editable form.
///
/// Pure business logic — no I/O, no API calls. Easy to test.
/// Expanding then collapsing a valid stored entry reproduces it exactly.
pub struct FormService;

impl FormService {
    pub fn new() -> Self {
        Self
    }

    /// Expand a stored entry into an editable row.
    ///
    /// The tag is derived from which value source is active: a non-empty
    /// `code` edits as an instrument row, anything else as a manual net
    /// value. Both candidate fields are carried over untouched so the row
    /// can switch sources without losing either value.
    pub fn expand_entry(&self, stored: &PortfolioEntry) -> EntryForm {
        let input_kind = if stored.code.is_empty() {
            InputKind::ManualNetValue
        } else {
            InputKind::InstrumentCode
        };
        EntryForm {
            input_kind,
            code: stored.code.clone(),
            name: stored.name.clone(),
            held_shares: stored.held_shares,
            min_percentage: stored.min_percentage,
            max_percentage: stored.max_percentage,
            net_value: stored.net_value,
        }
    }

    /// Collapse an editable row back to the stored shape.
    ///
    /// Exactly one value source survives, chosen by the row's tag; the
    /// inactive candidate is dropped. The code is taken verbatim — an empty
    /// code on an instrument row is accepted here, field presence is a
    /// form-level concern. The tag itself never reaches the stored form.
    pub fn collapse_entry(&self, row: &EntryForm) -> PortfolioEntry {
        let (code, net_value) = match row.input_kind {
            InputKind::InstrumentCode => (row.code.clone(), None),
            InputKind::ManualNetValue => (String::new(), row.net_value),
        };
        PortfolioEntry {
            code,
            name: row.name.clone(),
            held_shares: row.held_shares,
            min_percentage: row.min_percentage,
            max_percentage: row.max_percentage,
            net_value,
        }
    }

    /// Expand a whole stored configuration into its editable form.
    pub fn expand_config(&self, stored: &Config) -> ConfigForm {
        ConfigForm {
            settings: stored.settings.clone(),
            portfolio: stored
                .portfolio
                .iter()
                .map(|e| self.expand_entry(e))
                .collect(),
        }
    }

    /// Collapse a whole editable form into the stored shape for submission.
    pub fn collapse_config(&self, form: &ConfigForm) -> Config {
        Config {
            settings: form.settings.clone(),
            portfolio: form
                .portfolio
                .iter()
                .map(|e| self.collapse_entry(e))
                .collect(),
        }
    }
}

impl Default for FormService {
    fn default() -> Self {
        Self::new()
    }
}
