use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarDate, DateRange, DayCell, Preset, PresetCatalog, in_range, same_day};

/// Receives the committed range after a completed selection or a preset
/// pick, and `None` after a clear
pub type ChangeCallback = Box<dyn FnMut(Option<DateRange>)>;

/// Inclusive limits on the dates a user may pick. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub const fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min.is_none_or(|min| min <= date) && self.max.is_none_or(|max| date <= max)
    }
}

/// Progress of a two-click range selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Idle,
    /// First date chosen, waiting for the second; `hover` is the date under
    /// the pointer, if any
    PickingEnd {
        start: CalendarDate,
        hover: Option<CalendarDate>,
    },
    /// Both ends chosen
    Complete(DateRange),
}

impl SelectionState {
    pub const fn start(&self) -> Option<CalendarDate> {
        match self {
            Self::Idle => None,
            Self::PickingEnd { start, .. } => Some(*start),
            Self::Complete(range) => Some(range.start()),
        }
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        match self {
            Self::Complete(range) => Some(range.end()),
            Self::Idle | Self::PickingEnd { .. } => None,
        }
    }

    pub const fn hover(&self) -> Option<CalendarDate> {
        match self {
            Self::PickingEnd { hover, .. } => *hover,
            Self::Idle | Self::Complete(_) => None,
        }
    }

    pub const fn is_selecting(&self) -> bool {
        matches!(self, Self::PickingEnd { .. })
    }

    pub const fn range(&self) -> Option<DateRange> {
        match self {
            Self::Complete(range) => Some(*range),
            Self::Idle | Self::PickingEnd { .. } => None,
        }
    }
}

/// Flat view of a selection, as consumed by renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeSelection {
    pub start:     Option<CalendarDate>,
    pub end:       Option<CalendarDate>,
    pub selecting: bool,
    pub hover:     Option<CalendarDate>,
}

impl From<SelectionState> for RangeSelection {
    fn from(state: SelectionState) -> Self {
        Self {
            start:     state.start(),
            end:       state.end(),
            selecting: state.is_selecting(),
            hover:     state.hover(),
        }
    }
}

/// How a grid cell should be drawn given the current selection
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CellFlags {
    /// The cell is one of the chosen endpoints
    pub selected:       bool,
    pub range_start:    bool,
    pub range_end:      bool,
    /// Inside a complete range, endpoints included
    pub in_range:       bool,
    /// Inside the live preview between the first click and the pointer
    pub in_hover_range: bool,
    /// Outside the selectable bounds
    pub disabled:       bool,
    pub today:          bool,
    /// Spill-over day from a neighbouring month
    pub other_month:    bool,
}

/// The two-click range selection state machine.
///
/// The first click picks a start date, the second completes the range with
/// the two dates put in order. Presets complete a range in one step and a
/// clear returns to idle. Completions, presets and clears are reported
/// through the change callback; a half-made selection never is.
pub struct RangeSelector {
    state:     SelectionState,
    bounds:    DateBounds,
    presets:   PresetCatalog,
    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelector")
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .field("presets", &self.presets)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl RangeSelector {
    pub fn new(presets: PresetCatalog) -> Self {
        Self {
            state: SelectionState::Idle,
            bounds: DateBounds::unbounded(),
            presets,
            on_change: None,
        }
    }

    #[must_use]
    pub const fn with_bounds(mut self, bounds: DateBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub fn with_value(mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) -> Self {
        self.set_value(start, end);
        self
    }

    #[must_use]
    pub fn with_on_change(mut self, callback: impl FnMut(Option<DateRange>) + 'static) -> Self {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change(&mut self, callback: impl FnMut(Option<DateRange>) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Replaces the selection with an externally supplied value without
    /// notifying the callback. Anything short of both endpoints resets to
    /// idle.
    pub fn set_value(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.state = match (start, end) {
            (Some(start), Some(end)) => SelectionState::Complete(DateRange::ordered(start, end)),
            _ => SelectionState::Idle,
        };
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub fn snapshot(&self) -> RangeSelection {
        RangeSelection::from(self.state)
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        self.state.start()
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        self.state.end()
    }

    pub const fn hover(&self) -> Option<CalendarDate> {
        self.state.hover()
    }

    pub const fn is_selecting(&self) -> bool {
        self.state.is_selecting()
    }

    /// The committed range, if both ends are chosen
    pub const fn range(&self) -> Option<DateRange> {
        self.state.range()
    }

    pub const fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub const fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    /// Checks `date` against the configured bounds
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        self.bounds.contains(date)
    }

    /// Checks a grid cell: it must belong to the displayed month and be
    /// within bounds
    pub fn is_cell_selectable(&self, cell: &DayCell) -> bool {
        cell.is_current_month() && self.is_selectable(cell.date)
    }

    /// First click starts a selection, second click completes it.
    /// A click on a complete range discards it and starts over.
    pub fn on_date_click(&mut self, date: CalendarDate) {
        if !self.is_selectable(date) {
            trace!(%date, "ignoring click outside bounds");
            return;
        }

        match self.state {
            SelectionState::PickingEnd { start, .. } => {
                let range = DateRange::ordered(start, date);
                self.state = SelectionState::Complete(range);
                debug!(%range, "range selection complete");
                self.emit(Some(range));
            },
            SelectionState::Idle | SelectionState::Complete(_) => {
                self.state = SelectionState::PickingEnd { start: date, hover: None };
                debug!(%date, "range selection started");
            },
        }
    }

    /// Tracks the date under the pointer while the end date is being
    /// picked. `None` clears it.
    pub fn on_date_hover(&mut self, date: Option<CalendarDate>) {
        if let Some(d) = date.filter(|d| !self.bounds.contains(*d)) {
            trace!(date = %d, "ignoring hover outside bounds");
            return;
        }

        if let SelectionState::PickingEnd { hover, .. } = &mut self.state {
            *hover = date;
        }
    }

    /// Applies the preset stored under `key` and returns its range.
    /// Unknown keys are ignored.
    pub fn on_preset_select(&mut self, key: &str) -> Option<DateRange> {
        let Some(range) = self.presets.get(key).map(Preset::range) else {
            trace!(key, "ignoring unknown preset");
            return None;
        };

        self.state = SelectionState::Complete(range);
        debug!(key, %range, "preset applied");
        self.emit(Some(range));
        Some(range)
    }

    pub fn on_clear(&mut self) {
        self.state = SelectionState::Idle;
        debug!("selection cleared");
        self.emit(None);
    }

    /// Drops a half-made selection without notifying the callback.
    /// Complete ranges are kept.
    pub fn reset_selection(&mut self) {
        if let SelectionState::PickingEnd { start, .. } = self.state {
            self.state = SelectionState::Idle;
            debug!(%start, "selection abandoned");
        }
    }

    /// Span between the first click and the hovered date, while picking
    pub fn hover_range_preview(&self) -> Option<DateRange> {
        match self.state {
            SelectionState::PickingEnd { start, hover: Some(hover) } => Some(DateRange::ordered(start, hover)),
            _ => None,
        }
    }

    pub fn cell_flags(&self, cell: &DayCell, today: CalendarDate) -> CellFlags {
        let date = Some(cell.date);
        let start = self.start();
        let end = self.end();
        let preview = self.hover_range_preview();

        CellFlags {
            selected:       same_day(date, start) || same_day(date, end),
            range_start:    same_day(date, start),
            range_end:      same_day(date, end),
            in_range:       in_range(date, start, end),
            in_hover_range: preview.is_some_and(|p| p.contains(cell.date)),
            disabled:       !self.is_selectable(cell.date),
            today:          cell.date == today,
            other_month:    !cell.is_current_month(),
        }
    }

    fn emit(&mut self, value: Option<DateRange>) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new(PresetCatalog::new())
    }
}
