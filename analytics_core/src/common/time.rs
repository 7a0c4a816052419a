use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::common::error::{AnalysisError, ErrCode};

/// Trading-day date. Identity of one price bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, AnalysisError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                AnalysisError::new(
                    format!("invalid calendar date {:04}-{:02}-{:02}", year, month, day),
                    ErrCode::DataInvalid,
                )
            })
    }

    /// Parses "YYYY-MM-DD" or "YYYYMMDD".
    pub fn parse(s: &str) -> Result<Self, AnalysisError> {
        let s = s.trim();
        let parsed = if s.contains('-') {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
        } else {
            NaiveDate::parse_from_str(s, "%Y%m%d")
        };
        parsed.map(Self).map_err(|e| {
            AnalysisError::new(format!("cannot parse date '{}': {}", s, e), ErrCode::DataInvalid)
        })
    }

    pub fn inner(&self) -> NaiveDate {
        self.0
    }

    pub fn to_date_str(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl From<NaiveDate> for TradeDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for TradeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for TradeDate {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TradeDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dash_format() {
        let d = TradeDate::parse("2024-03-05").unwrap();
        assert_eq!(d.to_string(), "2024-03-05");
    }

    #[test]
    fn test_parse_compact_format() {
        let d = TradeDate::parse("20240305").unwrap();
        assert_eq!(d.to_date_str(), "20240305");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TradeDate::parse("not a date").is_err());
        assert!(TradeDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn test_ordering() {
        let a = TradeDate::new(2024, 1, 2).unwrap();
        let b = TradeDate::new(2024, 1, 3).unwrap();
        assert!(a < b);
        assert_eq!(a, TradeDate::parse("20240102").unwrap());
    }

    #[test]
    fn test_serde_as_string() {
        let d = TradeDate::new(2024, 1, 2).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-01-02\"");
        let back: TradeDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
