use std::time::Duration;

use tracing::trace;

use crate::{
    CalendarDate, CellFlags, DateRange, DayCell, Grid, NavAction, PickerOptions, PresetCatalog, RangeSelection,
    RangeSelector, SelectionState, ViewPair, build_presets,
};

/// A headless dual-calendar range picker.
///
/// Ties a [`RangeSelector`] to a [`ViewPair`] and the display settings in
/// [`PickerOptions`]. A presentation layer forwards user input to the
/// methods here and renders from [`grids`](Self::grids),
/// [`cell_flags`](Self::cell_flags) and
/// [`display_value`](Self::display_value).
#[derive(Debug)]
pub struct DateRangePicker {
    options:  PickerOptions,
    today:    CalendarDate,
    selector: RangeSelector,
    views:    ViewPair,
}

impl DateRangePicker {
    pub fn new(options: PickerOptions) -> Self {
        Self::with_today(options, CalendarDate::today())
    }

    /// Builds a picker that treats `today` as the current date
    pub fn with_today(options: PickerOptions, today: CalendarDate) -> Self {
        let presets = options.presets.clone().unwrap_or_else(|| build_presets(today));
        let selector = RangeSelector::new(presets)
            .with_bounds(options.bounds())
            .with_value(options.start, options.end);
        let views = ViewPair::anchored(options.start.unwrap_or(today));

        Self {
            options,
            today,
            selector,
            views,
        }
    }

    /// Registers the callback told about completed selections, presets and
    /// clears
    pub fn on_change(&mut self, callback: impl FnMut(Option<DateRange>) + 'static) {
        self.selector.set_on_change(callback);
    }

    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    pub const fn views(&self) -> ViewPair {
        self.views
    }

    pub const fn state(&self) -> SelectionState {
        self.selector.state()
    }

    pub const fn range(&self) -> Option<DateRange> {
        self.selector.range()
    }

    pub fn snapshot(&self) -> RangeSelection {
        self.selector.snapshot()
    }

    pub const fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    pub const fn close_delay(&self) -> Duration {
        Duration::from_millis(self.options.close_delay_ms)
    }

    /// Syncs the selection with a value owned by the caller. The callback
    /// is not invoked and the views stay where they are.
    pub fn set_value(&mut self, start: Option<CalendarDate>, end: Option<CalendarDate>) {
        self.selector.set_value(start, end);
    }

    pub fn click(&mut self, date: CalendarDate) {
        if self.ignore("click") {
            return;
        }
        self.selector.on_date_click(date);
    }

    /// Clicks a grid cell. Spill-over days from neighbouring months are
    /// not clickable.
    pub fn click_cell(&mut self, cell: &DayCell) {
        if !self.selector.is_cell_selectable(cell) {
            trace!(date = %cell.date, "ignoring click on unselectable cell");
            return;
        }
        self.click(cell.date);
    }

    pub fn hover(&mut self, date: Option<CalendarDate>) {
        if self.ignore("hover") {
            return;
        }
        self.selector.on_date_hover(date);
    }

    /// Hovers a grid cell. Pointing at a spill-over day or a date outside
    /// the bounds clears the hover instead.
    pub fn hover_cell(&mut self, cell: &DayCell) {
        if self.selector.is_cell_selectable(cell) {
            self.hover(Some(cell.date));
        } else {
            trace!(date = %cell.date, "clearing hover over unselectable cell");
            self.hover(None);
        }
    }

    /// Applies a preset and brings its first month into the left view.
    /// Returns `false` if nothing was applied.
    pub fn select_preset(&mut self, key: &str) -> bool {
        if self.ignore("preset") {
            return false;
        }
        let Some(range) = self.selector.on_preset_select(key) else {
            return false;
        };
        self.views.show(range.start().year_month());
        true
    }

    pub fn clear(&mut self) {
        if self.ignore("clear") {
            return;
        }
        if !self.options.clearable {
            trace!("ignoring clear on non-clearable picker");
            return;
        }
        self.selector.on_clear();
    }

    /// A click outside the picker: drops a half-made selection
    pub fn dismiss(&mut self) {
        if self.ignore("dismiss") {
            return;
        }
        self.selector.reset_selection();
    }

    /// Returns `false` if the move was refused or the picker is disabled
    pub fn navigate(&mut self, action: NavAction) -> bool {
        if self.ignore("navigate") {
            return false;
        }
        self.views.apply(action)
    }

    /// Grids for the left and right months
    pub fn grids(&self) -> (Grid, Grid) {
        (Grid::for_month(self.views.left()), Grid::for_month(self.views.right()))
    }

    pub fn cell_flags(&self, cell: &DayCell) -> CellFlags {
        self.selector.cell_flags(cell, self.today)
    }

    /// Text for the input field: both dates when complete, the start date
    /// and the end placeholder while picking, empty otherwise
    pub fn display_value(&self) -> String {
        let format = &self.options.format;
        let separator = &self.options.separator;
        match self.selector.state() {
            SelectionState::Complete(range) => format!(
                "{}{separator}{}",
                format.format(Some(range.start())),
                format.format(Some(range.end()))
            ),
            SelectionState::PickingEnd { start, .. } => {
                format!("{}{separator}{}", format.format(Some(start)), self.options.end_placeholder)
            },
            SelectionState::Idle => String::new(),
        }
    }

    pub fn placeholder(&self) -> String {
        format!(
            "{}{}{}",
            self.options.start_placeholder, self.options.separator, self.options.end_placeholder
        )
    }

    pub const fn shows_clear_button(&self) -> bool {
        self.options.clearable && self.selector.start().is_some()
    }

    /// The preset catalog, or `None` when presets are hidden
    pub fn presets(&self) -> Option<&PresetCatalog> {
        self.options.show_presets.then_some(self.selector.presets())
    }

    fn ignore(&self, input: &str) -> bool {
        if self.options.disabled {
            trace!(input, "ignoring input on disabled picker");
        }
        self.options.disabled
    }
}
