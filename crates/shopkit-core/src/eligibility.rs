//! # Eligibility Module
//!
//! Rules that decide whether something is allowed for a person, a moment,
//! or a calendar day.
//!
//! ## Time Is a Parameter
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Nothing here reads the system clock.                                   │
//! │                                                                         │
//! │  host:   let now = chrono::Local::now();                               │
//! │          is_online(&now)        ← any chrono Timelike                  │
//! │          get_discount(&now)     ← any chrono Datelike                  │
//! │                                                                         │
//! │  tests:  NaiveTime::from_hms_opt(20, 1, 0)                             │
//! │          NaiveDate::from_ymd_opt(2024, 12, 25)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::error::EligibilityError;

// =============================================================================
// Driving Age
// =============================================================================

/// Minimum legal driving age per country code.
///
/// Codes are stored upper-case, whether built in code or read from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct DrivingAgeTable(BTreeMap<String, u32>);

impl DrivingAgeTable {
    /// Creates a table from `(country_code, minimum_age)` pairs.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        DrivingAgeTable(
            entries
                .into_iter()
                .map(|(code, age)| (code.into().to_ascii_uppercase(), age))
                .collect(),
        )
    }

    /// Minimum driving age for `country_code` (case-insensitive).
    pub fn minimum_age(&self, country_code: &str) -> Option<u32> {
        self.0
            .get(&country_code.trim().to_ascii_uppercase())
            .copied()
    }

    /// Checks whether someone aged `age` may drive in `country_code`.
    ///
    /// Unknown codes are an error, never a silent `false`.
    pub fn can_drive(&self, age: u32, country_code: &str) -> Result<bool, EligibilityError> {
        self.can_drive_at(f64::from(age), country_code)
    }

    /// Same check for a fractional age, e.g. `16.5` years.
    ///
    /// NaN, infinite and negative ages are rejected before the lookup.
    pub fn can_drive_at(&self, age: f64, country_code: &str) -> Result<bool, EligibilityError> {
        if !age.is_finite() || age < 0.0 {
            return Err(EligibilityError::InvalidAge {
                reason: format!("must be a non-negative number, got {age}"),
            });
        }

        let minimum = self
            .minimum_age(country_code)
            .ok_or_else(|| EligibilityError::InvalidCountryCode(country_code.to_string()))?;

        Ok(age >= f64::from(minimum))
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table has no countries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, u32>> for DrivingAgeTable {
    fn from(entries: BTreeMap<String, u32>) -> Self {
        DrivingAgeTable::new(entries)
    }
}

impl From<DrivingAgeTable> for BTreeMap<String, u32> {
    fn from(table: DrivingAgeTable) -> Self {
        table.0
    }
}

/// US drives at 16, UK at 17.
impl Default for DrivingAgeTable {
    fn default() -> Self {
        DrivingAgeTable::new([("US", 16), ("UK", 17)])
    }
}

/// Checks driving eligibility against the default table.
///
/// ## Example
/// ```rust
/// use shopkit_core::eligibility::can_drive;
///
/// assert_eq!(can_drive(16, "US"), Ok(true));
/// assert_eq!(can_drive(16, "UK"), Ok(false));
/// assert!(can_drive(18, "NG").is_err());
/// ```
pub fn can_drive(age: u32, country_code: &str) -> Result<bool, EligibilityError> {
    DrivingAgeTable::default().can_drive(age, country_code)
}

// =============================================================================
// Opening Hours
// =============================================================================

/// Daily opening window, both ends inclusive, in whole minutes.
///
/// Seconds are ignored: 20:00:45 still counts as 20:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BusinessHours {
    #[ts(as = "String")]
    pub open: NaiveTime,
    #[ts(as = "String")]
    pub close: NaiveTime,
}

impl BusinessHours {
    /// Creates a window from `open` to `close`.
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        BusinessHours { open, close }
    }

    /// Checks whether `now` falls inside the window.
    pub fn is_open<T: Timelike>(&self, now: &T) -> bool {
        let minute = minute_of_day(now);
        minute_of_day(&self.open) <= minute && minute <= minute_of_day(&self.close)
    }
}

/// 08:00 to 20:00.
impl Default for BusinessHours {
    fn default() -> Self {
        BusinessHours {
            open: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            close: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
        }
    }
}

fn minute_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Checks whether the store is online at `now` (08:00 to 20:00 inclusive).
///
/// ## Example
/// ```rust
/// use chrono::NaiveTime;
/// use shopkit_core::eligibility::is_online;
///
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert!(!is_online(&at(7, 59)));
/// assert!(is_online(&at(8, 0)));
/// assert!(is_online(&at(20, 0)));
/// assert!(!is_online(&at(20, 1)));
/// ```
pub fn is_online<T: Timelike>(now: &T) -> bool {
    BusinessHours::default().is_open(now)
}

// =============================================================================
// Seasonal Discount
// =============================================================================

/// A discount rate that applies on one calendar day every year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeasonalDiscount {
    /// Month, 1 to 12.
    pub month: u32,
    /// Day of month, 1 to 31.
    pub day: u32,
    /// Fraction taken off on that day.
    pub rate: f64,
}

impl SeasonalDiscount {
    /// Discount rate for `today`: the configured rate on the day, else 0.
    pub fn rate_on<D: Datelike>(&self, today: &D) -> f64 {
        if today.month() == self.month && today.day() == self.day {
            self.rate
        } else {
            0.0
        }
    }
}

/// Christmas Day, 20% off.
impl Default for SeasonalDiscount {
    fn default() -> Self {
        SeasonalDiscount {
            month: 12,
            day: 25,
            rate: 0.2,
        }
    }
}

/// Seasonal discount for `today`: 0.2 on Dec 25, otherwise 0.
pub fn get_discount<D: Datelike>(today: &D) -> f64 {
    SeasonalDiscount::default().rate_on(today)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn on(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_can_drive_table() {
        let cases = [
            (16, "US", true),
            (17, "US", true),
            (15, "US", false),
            (17, "UK", true),
            (18, "UK", true),
            (16, "UK", false),
        ];
        for (age, country, expected) in cases {
            assert_eq!(can_drive(age, country), Ok(expected), "{age} in {country}");
        }
    }

    #[test]
    fn test_can_drive_unknown_country() {
        let err = can_drive(18, "NG").unwrap_err();
        assert_eq!(err, EligibilityError::InvalidCountryCode("NG".into()));
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_country_code_case_insensitive() {
        assert_eq!(can_drive(16, "us"), Ok(true));
        assert_eq!(can_drive(16, " uk "), Ok(false));
    }

    #[test]
    fn test_custom_driving_table() {
        let table = DrivingAgeTable::new([("ng", 18)]);
        assert_eq!(table.can_drive(18, "NG"), Ok(true));
        assert!(table.can_drive(18, "US").is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_can_drive_fractional_age() {
        let table = DrivingAgeTable::default();
        assert_eq!(table.can_drive_at(16.0, "US"), Ok(true));
        assert_eq!(table.can_drive_at(15.5, "US"), Ok(false));
        assert_eq!(table.can_drive_at(16.5, "UK"), Ok(false));
    }

    #[test]
    fn test_can_drive_rejects_impossible_age() {
        let table = DrivingAgeTable::default();
        for age in [-1.0, f64::NAN, f64::INFINITY] {
            let err = table.can_drive_at(age, "US").unwrap_err();
            assert!(matches!(err, EligibilityError::InvalidAge { .. }), "{age}");
        }
    }

    #[test]
    fn test_driving_table_from_json_normalizes_codes() {
        let table: DrivingAgeTable = serde_json::from_str(r#"{"ng": 18, "US": 16}"#).unwrap();
        assert_eq!(table.minimum_age("NG"), Some(18));
        assert_eq!(table.minimum_age("us"), Some(16));
    }

    #[test]
    fn test_is_online_opening_boundary() {
        assert!(!is_online(&at(7, 59)));
        assert!(is_online(&at(8, 0)));
    }

    #[test]
    fn test_is_online_closing_boundary() {
        assert!(is_online(&at(20, 0)));
        assert!(!is_online(&at(20, 1)));
    }

    #[test]
    fn test_is_online_ignores_seconds() {
        let late = NaiveTime::from_hms_opt(20, 0, 59).unwrap();
        assert!(is_online(&late));
    }

    #[test]
    fn test_is_online_accepts_datetimes() {
        assert!(is_online(&on(6, 1, 12, 30)));
        let utc = Utc.with_ymd_and_hms(2024, 6, 1, 23, 0, 0).unwrap();
        assert!(!is_online(&utc));
    }

    #[test]
    fn test_custom_business_hours() {
        let hours = BusinessHours::new(at(9, 30), at(17, 0));
        assert!(!hours.is_open(&at(9, 29)));
        assert!(hours.is_open(&at(9, 30)));
        assert!(hours.is_open(&at(17, 0)));
        assert!(!hours.is_open(&at(17, 1)));
    }

    #[test]
    fn test_get_discount_on_christmas() {
        assert_eq!(get_discount(&on(12, 25, 0, 0)), 0.2);
        assert_eq!(get_discount(&on(12, 25, 10, 0)), 0.2);
        assert_eq!(get_discount(&on(12, 25, 23, 59)), 0.2);
    }

    #[test]
    fn test_get_discount_boundaries() {
        assert_eq!(get_discount(&on(12, 24, 23, 59)), 0.0);
        assert_eq!(get_discount(&on(12, 26, 0, 1)), 0.0);
    }

    #[test]
    fn test_custom_seasonal_discount() {
        let sale = SeasonalDiscount {
            month: 7,
            day: 4,
            rate: 0.15,
        };
        assert_eq!(sale.rate_on(&NaiveDate::from_ymd_opt(2030, 7, 4).unwrap()), 0.15);
        assert_eq!(sale.rate_on(&NaiveDate::from_ymd_opt(2030, 12, 25).unwrap()), 0.0);
    }
}
