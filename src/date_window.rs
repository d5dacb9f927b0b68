use chrono::{Duration, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Half-open day range `[start, end)` as understood by Cost Explorer.
#[derive(Debug, PartialEq, Clone)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<NaiveDate> for DateWindow {
    /// The full day before `today`.
    fn from(today: NaiveDate) -> Self {
        DateWindow {
            start: today - Duration::days(1),
            end: today,
        }
    }
}

impl DateWindow {
    pub fn start_string(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_string(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::date_window::DateWindow;
    use chrono::NaiveDate;

    #[test]
    fn test_from_today() {
        let window = DateWindow::from(NaiveDate::from_ymd(2020, 12, 15));
        assert_eq!(
            window,
            DateWindow {
                start: NaiveDate::from_ymd(2020, 12, 14),
                end: NaiveDate::from_ymd(2020, 12, 15),
            }
        );
    }

    #[test]
    fn test_from_first_day_of_year() {
        let window = DateWindow::from(NaiveDate::from_ymd(2021, 1, 1));
        assert_eq!(window.start_string(), "2020-12-31");
        assert_eq!(window.end_string(), "2021-01-01");
    }

    #[test]
    fn test_from_leap_day() {
        let window = DateWindow::from(NaiveDate::from_ymd(2020, 3, 1));
        assert_eq!(window.start_string(), "2020-02-29");
    }
}
