use super::settings::Settings;

/// Which of the two mutually exclusive value sources a portfolio row edits.
///
/// Pure form state: it selects the visible input control and tells the
/// collapse step which stored field to keep. It is never persisted — the
/// form types deliberately carry no serde derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// The row is valued by a live quote for `code`.
    #[default]
    InstrumentCode,
    /// The row is valued by the manually supplied `net_value`.
    ManualNetValue,
}

/// An editable portfolio row: the stored fields plus the transient
/// `input_kind` tag.
///
/// Both candidate fields stay present whatever the tag says, so the operator
/// can switch the tag back and forth without losing a previously typed value
/// in the inactive field.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub input_kind: InputKind,
    pub code: String,
    pub name: String,
    pub held_shares: u64,
    pub min_percentage: f64,
    pub max_percentage: f64,
    pub net_value: Option<f64>,
}

impl EntryForm {
    /// A blank row, as produced by the "add entry" action: instrument-code
    /// input, empty code and name, zero shares and thresholds, no net value.
    pub fn new() -> Self {
        Self {
            input_kind: InputKind::InstrumentCode,
            code: String::new(),
            name: String::new(),
            held_shares: 0,
            min_percentage: 0.0,
            max_percentage: 0.0,
            net_value: None,
        }
    }

    /// Change the active value source. The inactive field keeps its value.
    pub fn set_input_kind(&mut self, kind: InputKind) {
        self.input_kind = kind;
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-session editable shape of the whole configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigForm {
    pub settings: Settings,
    pub portfolio: Vec<EntryForm>,
}
