use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dates::parse_date;
use crate::errors::{BillingError, Result};

/// rental unit sharing the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Beneficiary {
    Upper,
    Lower,
}

impl Beneficiary {
    /// statement order: lower unit is listed first
    pub const ALL: [Beneficiary; 2] = [Beneficiary::Lower, Beneficiary::Upper];

    pub fn label(&self) -> &'static str {
        match self {
            Beneficiary::Upper => "Upper Unit",
            Beneficiary::Lower => "Lower Unit",
        }
    }
}

impl fmt::Display for Beneficiary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// inclusive billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    from: NaiveDate,
    to: NaiveDate,
}

impl BillingPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self> {
        if from > to {
            return Err(BillingError::InvalidPeriod { from, to });
        }
        Ok(Self { from, to })
    }

    /// parse from two raw bound strings
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Self::new(parse_date(from)?, parse_date(to)?)
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// days covered, both bounds included
    pub fn day_count(&self) -> u32 {
        days_inclusive(self.from, self.to)
    }
}

/// inclusive day count, zero when the range is empty
pub(crate) fn days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

/// dates a beneficiary occupies its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyWindow {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl OccupancyWindow {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Result<Self> {
        if let Some(end) = end {
            if start > end {
                return Err(BillingError::InvalidOccupancyWindow { start, end });
            }
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: Option<&str>) -> Result<Self> {
        let end = end.map(parse_date).transpose()?;
        Self::new(parse_date(start)?, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }
}

/// which occupancy bounds the caller wants taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConsiderBounds {
    pub start: bool,
    pub end: bool,
}

impl ConsiderBounds {
    pub const NONE: ConsiderBounds = ConsiderBounds { start: false, end: false };
    pub const START_ONLY: ConsiderBounds = ConsiderBounds { start: true, end: false };
    pub const END_ONLY: ConsiderBounds = ConsiderBounds { start: false, end: true };
    pub const BOTH: ConsiderBounds = ConsiderBounds { start: true, end: true };

    pub fn any(&self) -> bool {
        self.start || self.end
    }
}

/// billed utility service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Service {
    Hydro,
    Gas,
    /// combined water/sewer and solid waste bill, eligible for early-payment discount
    WaterAndWaste,
    Other(String),
}

impl Service {
    /// look up a service by menu number (1-3) or name
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "hydro" => Service::Hydro,
            "2" | "gas" => Service::Gas,
            "3" | "water" | "water-waste" | "water_waste" => Service::WaterAndWaste,
            _ => Service::Other(input.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Service::Hydro => "Toronto Hydro",
            Service::Gas => "Enbridge GAS",
            Service::WaterAndWaste => "Water & Solid Waste",
            Service::Other(label) => label,
        }
    }

    /// whether the bill is made of water and waste components
    pub fn is_combined(&self) -> bool {
        matches!(self, Service::WaterAndWaste)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_period_day_count_is_inclusive() {
        let january = BillingPeriod::parse("01/01/2024", "31/01/2024").unwrap();
        assert_eq!(january.day_count(), 31);

        let single = BillingPeriod::new(ymd(2024, 3, 5), ymd(2024, 3, 5)).unwrap();
        assert_eq!(single.day_count(), 1);

        // leap february
        let feb = BillingPeriod::parse("01/02/2024", "29/02/2024").unwrap();
        assert_eq!(feb.day_count(), 29);
    }

    #[test]
    fn test_inverted_period_rejected() {
        let err = BillingPeriod::parse("31/01/2024", "01/01/2024").unwrap_err();
        assert!(matches!(err, BillingError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_occupancy_window_invariant() {
        assert!(OccupancyWindow::parse("10/01/2024", Some("20/01/2024")).is_ok());
        assert!(OccupancyWindow::parse("10/01/2024", None).unwrap().end().is_none());

        let err = OccupancyWindow::parse("20/01/2024", Some("10/01/2024")).unwrap_err();
        assert!(matches!(err, BillingError::InvalidOccupancyWindow { .. }));
    }

    #[test]
    fn test_days_inclusive_never_negative() {
        assert_eq!(days_inclusive(ymd(2024, 2, 1), ymd(2024, 1, 31)), 0);
        assert_eq!(days_inclusive(ymd(2024, 1, 31), ymd(2024, 2, 1)), 2);
    }

    #[test]
    fn test_service_lookup() {
        assert_eq!(Service::parse("1"), Service::Hydro);
        assert_eq!(Service::parse("Gas"), Service::Gas);
        assert!(Service::parse("3").is_combined());
        assert_eq!(Service::parse(" Internet ").label(), "Internet");
    }
}
