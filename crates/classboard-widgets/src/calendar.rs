//! Calendar view

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarViewMode {
    #[default]
    Month,
    Week,
}

/// Calendar layout. Only the view mode is persisted; the date being shown
/// belongs to the host and always starts at today.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarView {
    pub view: CalendarViewMode,
}

impl ContentModel for CalendarView {
    const KIND: WidgetKind = WidgetKind::Calendar;
}

impl CalendarView {
    pub fn toggle_view(&mut self) -> Payload {
        self.view = match self.view {
            CalendarViewMode::Month => CalendarViewMode::Week,
            CalendarViewMode::Week => CalendarViewMode::Month,
        };
        self.patch(&["view"])
    }

    /// Date shown after moving `steps` pages from `date` (a month or a
    /// week per page, negative goes back). Month steps clamp the day to
    /// the target month's length.
    pub fn navigate(&self, date: NaiveDate, steps: i32) -> NaiveDate {
        let moved = match self.view {
            CalendarViewMode::Month => {
                let months = Months::new(steps.unsigned_abs());
                if steps >= 0 {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                }
            }
            CalendarViewMode::Week => {
                let days = Days::new(u64::from(steps.unsigned_abs()) * 7);
                if steps >= 0 {
                    date.checked_add_days(days)
                } else {
                    date.checked_sub_days(days)
                }
            }
        };
        moved.unwrap_or(date)
    }

    /// Heading for the page showing `date`, e.g. "March 2025"
    pub fn title(date: NaiveDate) -> String {
        date.format("%B %Y").to_string()
    }
}

/// Month laid out on a Sunday-first grid: one `None` per leading blank,
/// then every day of the month. Empty for an invalid month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let blanks = first.weekday().num_days_from_sunday() as usize;
    let mut grid = vec![None; blanks];
    grid.extend(first.iter_days().take_while(|d| d.month() == month).map(Some));
    grid
}

/// The Sunday-to-Saturday week containing `date`
pub fn week_of(date: NaiveDate) -> Vec<NaiveDate> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    start.iter_days().take(7).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_leading_blanks() {
        // March 2025 starts on a Saturday
        let grid = month_grid(2025, 3);
        assert_eq!(grid.iter().take_while(|d| d.is_none()).count(), 6);
        assert_eq!(grid.iter().flatten().count(), 31);
        assert_eq!(grid[6], Some(ymd(2025, 3, 1)));
    }

    #[test]
    fn test_month_grid_leap_february() {
        let grid = month_grid(2024, 2);
        assert_eq!(grid.iter().flatten().count(), 29);
        assert!(month_grid(2024, 13).is_empty());
    }

    #[test]
    fn test_week_starts_sunday() {
        let week = week_of(ymd(2025, 3, 5));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], ymd(2025, 3, 2));
        assert_eq!(week[0].weekday(), Weekday::Sun);
        assert_eq!(week[6], ymd(2025, 3, 8));

        let sunday = week_of(ymd(2025, 3, 2));
        assert_eq!(sunday[0], ymd(2025, 3, 2));
    }

    #[test]
    fn test_navigate() {
        let mut calendar = CalendarView::default();
        assert_eq!(calendar.navigate(ymd(2025, 1, 31), 1), ymd(2025, 2, 28));
        assert_eq!(calendar.navigate(ymd(2025, 1, 15), -1), ymd(2024, 12, 15));

        let patch = calendar.toggle_view();
        assert_eq!(patch.get("view").unwrap(), "week");
        assert_eq!(calendar.navigate(ymd(2025, 1, 15), 2), ymd(2025, 1, 29));
        assert_eq!(calendar.navigate(ymd(2025, 1, 15), -1), ymd(2025, 1, 8));
    }

    #[test]
    fn test_title() {
        assert_eq!(CalendarView::title(ymd(2025, 3, 9)), "March 2025");
    }
}
