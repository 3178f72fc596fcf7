use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DEFAULT_CLOSE_DELAY_MS, DEFAULT_DISPLAY_SEPARATOR, DEFAULT_END_PLACEHOLDER,
    DEFAULT_START_PLACEHOLDER, DateBounds, DateFormat, PresetCatalog,
};

/// Settings for a [`DateRangePicker`](crate::DateRangePicker).
///
/// Every field is optional when deserializing; missing fields take their
/// default values.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Initial start date
    pub start:             Option<CalendarDate>,
    /// Initial end date
    pub end:               Option<CalendarDate>,
    /// Earliest selectable date, inclusive
    pub min_date:          Option<CalendarDate>,
    /// Latest selectable date, inclusive
    pub max_date:          Option<CalendarDate>,
    /// Replaces the built-in presets entirely when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets:           Option<PresetCatalog>,
    pub show_presets:      bool,
    pub disabled:          bool,
    pub clearable:         bool,
    pub format:            DateFormat,
    pub start_placeholder: String,
    pub end_placeholder:   String,
    /// Placed between the two dates in the input field
    pub separator:         String,
    /// How long the popup stays open after a completed selection
    pub close_delay_ms:    u64,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            start:             None,
            end:               None,
            min_date:          None,
            max_date:          None,
            presets:           None,
            show_presets:      true,
            disabled:          false,
            clearable:         true,
            format:            DateFormat::default(),
            start_placeholder: DEFAULT_START_PLACEHOLDER.to_owned(),
            end_placeholder:   DEFAULT_END_PLACEHOLDER.to_owned(),
            separator:         DEFAULT_DISPLAY_SEPARATOR.to_owned(),
            close_delay_ms:    DEFAULT_CLOSE_DELAY_MS,
        }
    }
}

impl PickerOptions {
    /// The selectable window formed by `min_date` and `max_date`
    pub const fn bounds(&self) -> DateBounds {
        DateBounds::new(self.min_date, self.max_date)
    }
}
