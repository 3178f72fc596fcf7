use serde::Serialize;

use crate::{CalendarDate, DAYS_PER_WEEK, GRID_CELLS, YearMonth};

/// Which month a grid cell belongs to, relative to the month on display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellMonth {
    Previous,
    Current,
    Next,
}

/// One day of a month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayCell {
    pub date:  CalendarDate,
    pub month: CellMonth,
}

impl DayCell {
    pub fn is_current_month(&self) -> bool {
        self.month == CellMonth::Current
    }
}

/// The 6×7 day matrix shown for one month, Sunday first.
///
/// The first cell is the Sunday on or before the 1st; each following cell
/// is one day later. Days before the 1st and after the last day of the
/// month are filled from the neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

/// Builds the grid for `month` (1 = January) of `year`.
///
/// Grids are exact for every month whose six-week window lies inside
/// chrono's supported dates (about years -262 000 to 262 000). Past that
/// window the dates saturate at the first or last supported day, so the
/// grid still has 42 cells but repeats that day.
pub fn build_grid(year: i32, month: i32) -> Grid {
    Grid::for_month(YearMonth::new(year, month))
}

impl Grid {
    /// See [`build_grid`] for the supported years
    pub fn for_month(month: YearMonth) -> Self {
        let leading = i64::from(month.first_weekday());
        let first = month.first_day().add_days(-leading);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut day = first;
        for _ in 0..GRID_CELLS {
            let position = match YearMonth::of(day).cmp(&month) {
                std::cmp::Ordering::Less => CellMonth::Previous,
                std::cmp::Ordering::Equal => CellMonth::Current,
                std::cmp::Ordering::Greater => CellMonth::Next,
            };
            cells.push(DayCell { date: day, month: position });
            day = day.add_days(1);
        }

        Self { month, cells }
    }

    /// The month this grid was built for
    pub const fn month(&self) -> YearMonth {
        self.month
    }

    /// Header text such as "Jan 2026"
    pub fn title(&self) -> String {
        format!("{} {}", self.month.short_name(), self.month.year())
    }

    /// All 42 cells, row by row
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The six weeks of the grid, each seven cells long
    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// Iterates over the cells in date order
    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.cells.iter()
    }

    /// Number of cells, always [`GRID_CELLS`]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Finds the cell showing `date`, if it is on this grid
    pub fn cell(&self, date: CalendarDate) -> Option<&DayCell> {
        let first = self.cells.first()?;
        let offset = usize::try_from(first.date.days_until(date)).ok()?;
        self.cells.get(offset)
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GRID_ROWS, days_in_month, test_utils::date};

    #[test]
    fn test_grid_completeness_across_years() {
        for year in [1900, 1999, 2000, 2024, 2025, 2026, 2100] {
            for month in 1..=12 {
                let grid = build_grid(year, month);
                assert_eq!(grid.len(), GRID_CELLS, "{year}-{month}: cell count");

                let current = grid.iter().filter(|c| c.is_current_month()).count();
                assert_eq!(
                    current,
                    days_in_month(year, month) as usize,
                    "{year}-{month}: current-month cells"
                );

                for pair in grid.cells().windows(2) {
                    assert_eq!(pair[0].date.add_days(1), pair[1].date, "{year}-{month}: gap in grid");
                }

                assert_eq!(grid.cells()[0].date.weekday(), 0, "{year}-{month}: first cell not Sunday");
            }
        }
    }

    #[test]
    fn test_current_month_run_is_contiguous() {
        let grid = build_grid(2026, 1);
        let kinds: Vec<CellMonth> = grid.iter().map(|c| c.month).collect();
        let first_current = kinds
            .iter()
            .position(|k| *k == CellMonth::Current)
            .expect("grid has current-month cells");
        assert!(kinds[..first_current].iter().all(|k| *k == CellMonth::Previous));
        assert!(kinds[first_current..first_current + 31].iter().all(|k| *k == CellMonth::Current));
        assert!(kinds[first_current + 31..].iter().all(|k| *k == CellMonth::Next));
    }

    #[test]
    fn test_january_2026_layout() {
        // Thursday the 1st: four days of December lead the grid
        let grid = build_grid(2026, 1);
        let cells = grid.cells();
        assert_eq!(cells[0].date, date(2025, 12, 28));
        assert_eq!(cells[0].month, CellMonth::Previous);
        assert_eq!(cells[3].date, date(2025, 12, 31));
        assert_eq!(cells[4].date, date(2026, 1, 1));
        assert!(cells[4].is_current_month());
        assert_eq!(cells[34].date, date(2026, 1, 31));
        assert_eq!(cells[35].date, date(2026, 2, 1));
        assert_eq!(cells[35].month, CellMonth::Next);
        assert_eq!(cells[41].date, date(2026, 2, 7));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // February 2026 starts on a Sunday and has exactly 28 days
        let grid = build_grid(2026, 2);
        assert_eq!(grid.cells()[0].date, date(2026, 2, 1));
        assert!(grid.cells()[0].is_current_month());
        assert_eq!(grid.cells()[28].date, date(2026, 3, 1));
        assert_eq!(grid.iter().filter(|c| c.month == CellMonth::Next).count(), 14);
    }

    #[test]
    fn test_far_years_inside_supported_range() {
        for (year, month) in [(-200_000, 1), (9_999, 12), (10_000, 1), (200_000, 2)] {
            let grid = build_grid(year, month);
            assert_eq!(grid.len(), GRID_CELLS);
            let current = grid.iter().filter(|c| c.is_current_month()).count();
            assert_eq!(current, days_in_month(year, month) as usize, "{year}-{month}");
        }
    }

    #[test]
    fn test_beyond_supported_range_still_has_full_grid() {
        let grid = build_grid(300_000, 1);
        assert_eq!(grid.len(), GRID_CELLS);
    }

    #[test]
    fn test_month_rollover_in_request() {
        assert_eq!(build_grid(2025, 13), build_grid(2026, 1));
        assert_eq!(build_grid(2026, 0).month(), YearMonth::new(2025, 12));
    }

    #[test]
    fn test_title() {
        assert_eq!(build_grid(2026, 1).title(), "Jan 2026");
        assert_eq!(build_grid(2025, 13).title(), "Jan 2026");
    }

    #[test]
    fn test_rows() {
        let grid = build_grid(2026, 1);
        let rows: Vec<&[DayCell]> = grid.rows().collect();
        assert_eq!(rows.len(), GRID_ROWS);
        assert!(rows.iter().all(|r| r.len() == DAYS_PER_WEEK));
        assert!(rows.iter().all(|r| r[0].date.weekday() == 0));
    }

    #[test]
    fn test_cell_lookup() {
        let grid = build_grid(2026, 1);
        let cell = grid.cell(date(2026, 1, 15)).expect("mid-month cell is present");
        assert_eq!(cell.date, date(2026, 1, 15));
        assert!(cell.is_current_month());

        let spill = grid.cell(date(2025, 12, 28)).expect("leading cell is present");
        assert_eq!(spill.month, CellMonth::Previous);

        assert!(grid.cell(date(2025, 12, 27)).is_none());
        assert!(grid.cell(date(2026, 2, 8)).is_none());
    }

    #[test]
    fn test_into_iterator() {
        let grid = build_grid(2026, 1);
        let mut count = 0;
        for cell in &grid {
            assert!(grid.cell(cell.date).is_some());
            count += 1;
        }
        assert_eq!(count, GRID_CELLS);
    }
}
