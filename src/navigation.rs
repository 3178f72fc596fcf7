use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{CalendarDate, YearMonth};

/// A navigation button press on one of the two calendar views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    LeftPrevYear,
    LeftPrevMonth,
    LeftNextMonth,
    LeftNextYear,
    RightPrevYear,
    RightPrevMonth,
    RightNextMonth,
    RightNextYear,
}

impl NavAction {
    pub const ALL: [Self; 8] = [
        Self::LeftPrevYear,
        Self::LeftPrevMonth,
        Self::LeftNextMonth,
        Self::LeftNextYear,
        Self::RightPrevYear,
        Self::RightPrevMonth,
        Self::RightNextMonth,
        Self::RightNextYear,
    ];
}

/// The two side-by-side months of the picker.
///
/// Only the left month is stored; the right view is always the month after
/// it, so the two can never overlap or drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewPair {
    left: YearMonth,
}

impl ViewPair {
    /// Shows `left` and the month after it
    pub const fn new(left: YearMonth) -> Self {
        Self { left }
    }

    /// Shows the month containing `date` on the left
    pub fn anchored(date: CalendarDate) -> Self {
        Self::new(date.year_month())
    }

    pub const fn left(&self) -> YearMonth {
        self.left
    }

    pub fn right(&self) -> YearMonth {
        self.left.next()
    }

    pub const fn left_year(&self) -> i32 {
        self.left.year()
    }

    pub const fn left_month(&self) -> u32 {
        self.left.month()
    }

    pub fn right_year(&self) -> i32 {
        self.right().year()
    }

    pub fn right_month(&self) -> u32 {
        self.right().month()
    }

    /// Puts `month` in the left view
    pub fn show(&mut self, month: YearMonth) {
        if self.left != month {
            debug!(%month, "showing month");
            self.left = month;
        }
    }

    pub fn left_prev_year(&mut self) {
        self.move_left(self.left.shifted_years(-1));
    }

    pub fn left_next_year(&mut self) {
        self.move_left(self.left.shifted_years(1));
    }

    pub fn left_prev_month(&mut self) {
        self.move_left(self.left.prev());
    }

    pub fn left_next_month(&mut self) {
        self.move_left(self.left.next());
    }

    /// Steps the right view back a month. Refused unless the result stays
    /// after the left view, which is never the case while the views are
    /// adjacent.
    pub fn right_prev_month(&mut self) -> bool {
        self.move_right(self.right().prev())
    }

    /// Steps the right view back a year, under the same guard as
    /// [`right_prev_month`](Self::right_prev_month)
    pub fn right_prev_year(&mut self) -> bool {
        self.move_right(self.right().shifted_years(-1))
    }

    pub fn right_next_month(&mut self) {
        self.move_right(self.right().next());
    }

    pub fn right_next_year(&mut self) {
        self.move_right(self.right().shifted_years(1));
    }

    /// Runs `action`, returning `false` if it was refused
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::LeftPrevYear => self.left_prev_year(),
            NavAction::LeftPrevMonth => self.left_prev_month(),
            NavAction::LeftNextMonth => self.left_next_month(),
            NavAction::LeftNextYear => self.left_next_year(),
            NavAction::RightPrevYear => return self.right_prev_year(),
            NavAction::RightPrevMonth => return self.right_prev_month(),
            NavAction::RightNextMonth => self.right_next_month(),
            NavAction::RightNextYear => self.right_next_year(),
        }
        true
    }

    fn move_left(&mut self, left: YearMonth) {
        self.left = left;
        debug!(%left, right = %self.right(), "views moved");
    }

    fn move_right(&mut self, right: YearMonth) -> bool {
        if right <= self.left {
            trace!(%right, left = %self.left, "refusing to move right view onto left");
            return false;
        }
        self.move_left(right.prev());
        true
    }
}
