//! Holiday lookup for calendar views.
//!
//! Views ask a [`HolidayLookup`] for names instead of reading a global table,
//! so the dataset is configuration and not tied to one calendar year.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::date_grid::days_in_month;
use crate::error::{DayplanError, DayplanResult};

pub trait HolidayLookup {
    fn holiday_name(&self, date: NaiveDate) -> Option<&str>;
}

/// A fixed date -> name table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidayTable {
    holidays: BTreeMap<NaiveDate, String>,
}

/// On-disk layout: `[holidays]` with `"YYYY-MM-DD" = "name"` entries.
#[derive(Deserialize)]
struct HolidayFile {
    #[serde(default)]
    holidays: BTreeMap<String, String>,
}

impl HolidayTable {
    pub fn new(holidays: BTreeMap<NaiveDate, String>) -> Self {
        HolidayTable { holidays }
    }

    /// Korean public holidays for 2024.
    pub fn korean_2024() -> Self {
        let entries = [
            ((1, 1), "신정"),
            ((2, 9), "설날"),
            ((2, 10), "설날"),
            ((2, 11), "설날"),
            ((3, 1), "삼일절"),
            ((5, 5), "어린이날"),
            ((6, 6), "현충일"),
            ((8, 15), "광복절"),
            ((9, 16), "추석"),
            ((9, 17), "추석"),
            ((9, 18), "추석"),
            ((10, 3), "개천절"),
            ((10, 9), "한글날"),
            ((12, 25), "크리스마스"),
        ];

        let holidays = entries
            .into_iter()
            .filter_map(|((month, day), name)| {
                NaiveDate::from_ymd_opt(2024, month, day).map(|d| (d, name.to_string()))
            })
            .collect();

        HolidayTable { holidays }
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> DayplanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> DayplanResult<Self> {
        let file: HolidayFile =
            toml::from_str(content).map_err(|e| DayplanError::Config(e.to_string()))?;

        let holidays = file
            .holidays
            .into_iter()
            .map(|(key, name)| {
                NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                    .map(|date| (date, name))
                    .map_err(|_| DayplanError::Config(format!("Invalid holiday date '{}'", key)))
            })
            .collect::<DayplanResult<_>>()?;

        Ok(HolidayTable { holidays })
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl HolidayLookup for HolidayTable {
    fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }
}

/// Every holiday in the month containing `date`.
pub fn holidays_in_month<L>(lookup: &L, date: NaiveDate) -> BTreeMap<NaiveDate, String>
where
    L: HolidayLookup + ?Sized,
{
    (1..=days_in_month(date.year(), date.month()))
        .filter_map(|day| date.with_day(day))
        .filter_map(|day| lookup.holiday_name(day).map(|name| (day, name.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_korean_2024_lookup() {
        let table = HolidayTable::korean_2024();
        assert_eq!(table.len(), 14);
        assert_eq!(table.holiday_name(ymd(2024, 8, 15)), Some("광복절"));
        assert_eq!(table.holiday_name(ymd(2024, 8, 16)), None);
        // The table only covers 2024
        assert_eq!(table.holiday_name(ymd(2025, 8, 15)), None);
    }

    #[test]
    fn test_holidays_in_month() {
        let table = HolidayTable::korean_2024();

        let february = holidays_in_month(&table, ymd(2024, 2, 20));
        assert_eq!(february.len(), 3);
        assert!(february.values().all(|name| name == "설날"));
        assert_eq!(february.keys().next(), Some(&ymd(2024, 2, 9)));

        assert!(holidays_in_month(&table, ymd(2024, 4, 1)).is_empty());
        assert!(holidays_in_month(&table, ymd(2025, 2, 1)).is_empty());
    }

    #[test]
    fn test_custom_lookup() {
        struct EveryMonday;

        impl HolidayLookup for EveryMonday {
            fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
                (date.weekday() == chrono::Weekday::Mon).then_some("월요일")
            }
        }

        // July 2024 has five Mondays: 1, 8, 15, 22, 29
        let july = holidays_in_month(&EveryMonday, ymd(2024, 7, 31));
        assert_eq!(july.len(), 5);
    }

    #[test]
    fn test_from_toml() {
        let table = HolidayTable::from_toml(
            r#"
[holidays]
"2025-01-01" = "신정"
"2025-03-01" = "삼일절"
"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.holiday_name(ymd(2025, 3, 1)), Some("삼일절"));
    }

    #[test]
    fn test_from_toml_rejects_bad_dates() {
        let result = HolidayTable::from_toml("[holidays]\n\"2025-02-30\" = \"없는 날\"\n");
        assert!(matches!(result, Err(DayplanError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.toml");
        std::fs::write(&path, "[holidays]\n\"2025-12-25\" = \"크리스마스\"\n").unwrap();

        let table = HolidayTable::load(&path).unwrap();
        assert_eq!(table.holiday_name(ymd(2025, 12, 25)), Some("크리스마스"));
    }
}
