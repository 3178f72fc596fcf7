use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateRange, current_financial_year, previous_financial_year};

/// Key of the "last 7 days" default preset
pub const LAST_7_DAYS: &str = "last7Days";
/// Key of the "last 30 days" default preset
pub const LAST_30_DAYS: &str = "last30Days";
/// Key of the previous financial year default preset
pub const PREV_FY: &str = "prevFY";
/// Key of the current financial year default preset
pub const CURRENT_FY: &str = "currentFY";

/// A named range offered for one-click selection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preset {
    label: String,
    start: CalendarDate,
    end:   CalendarDate,
}

impl Preset {
    /// Creates a preset. The endpoints are taken as given and are not
    /// required to be in order.
    pub fn new(label: impl Into<String>, start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Creates a preset covering `range`
    pub fn from_range(label: impl Into<String>, range: DateRange) -> Self {
        Self::new(label, range.start(), range.end())
    }

    /// Text shown on the preset button
    pub fn label(&self) -> &str {
        &self.label
    }

    /// First endpoint, as given
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Second endpoint, as given
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// The span this preset selects, with the endpoints put in order
    pub fn range(&self) -> DateRange {
        DateRange::ordered(self.start, self.end)
    }
}

/// Serialized shape of one catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetEntry {
    key:    String,
    #[serde(flatten)]
    preset: Preset,
}

/// Presets keyed by name, kept in display order.
///
/// Serializes as a list of `{key, label, start, end}` objects so the order
/// survives formats whose maps are unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PresetEntry>", into = "Vec<PresetEntry>")]
pub struct PresetCatalog {
    entries: Vec<(String, Preset)>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a preset at the end, or replaces the preset already stored under
    /// `key` while keeping its position
    pub fn insert(&mut self, key: impl Into<String>, preset: Preset) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = preset,
            None => self.entries.push((key, preset)),
        }
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, preset: Preset) -> Self {
        self.insert(key, preset);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Preset> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Preset)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Preset)> for PresetCatalog {
    fn from_iter<I: IntoIterator<Item = (K, Preset)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, preset) in iter {
            catalog.insert(key, preset);
        }
        catalog
    }
}

impl From<Vec<PresetEntry>> for PresetCatalog {
    fn from(entries: Vec<PresetEntry>) -> Self {
        entries.into_iter().map(|e| (e.key, e.preset)).collect()
    }
}

impl From<PresetCatalog> for Vec<PresetEntry> {
    fn from(catalog: PresetCatalog) -> Self {
        catalog
            .entries
            .into_iter()
            .map(|(key, preset)| PresetEntry { key, preset })
            .collect()
    }
}

/// The default catalog relative to `today`: last 7 days, last 30 days,
/// previous financial year and current financial year, in that order
pub fn build_presets(today: CalendarDate) -> PresetCatalog {
    PresetCatalog::new()
        .with(LAST_7_DAYS, Preset::new("last 7 days", today.add_days(-6), today))
        .with(LAST_30_DAYS, Preset::new("last 30 days", today.add_days(-29), today))
        .with(PREV_FY, Preset::from_range("prev. FY", previous_financial_year(today)))
        .with(CURRENT_FY, Preset::from_range("current FY", current_financial_year(today)))
}
