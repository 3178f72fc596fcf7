//! Shared constructors for unit tests.

use std::{cell::RefCell, rc::Rc};

use crate::{CalendarDate, ChangeCallback, DateRange};

pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("invalid date in test fixture")
}

pub fn range(start: CalendarDate, end: CalendarDate) -> DateRange {
    DateRange::new(start, end).expect("invalid range in test fixture")
}

/// Every value passed to an `on_change` callback, in order
pub type ChangeLog = Rc<RefCell<Vec<Option<DateRange>>>>;

/// A callback that appends each emitted value to the returned log
pub fn recording_callback() -> (ChangeCallback, ChangeLog) {
    let log: ChangeLog = Rc::default();
    let sink = Rc::clone(&log);
    let callback: ChangeCallback = Box::new(move |value| sink.borrow_mut().push(value));
    (callback, log)
}
