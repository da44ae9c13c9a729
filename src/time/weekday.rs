//! School-week days and catalog day codes.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use super::error::TimeError;

/// A teaching day. Weekends are not part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Weekday {
    #[serde(alias = "M", alias = "Monday")]
    Mon,
    #[serde(alias = "Tu", alias = "Tuesday")]
    Tue,
    #[serde(alias = "W", alias = "Wednesday")]
    Wed,
    #[serde(alias = "Th", alias = "Thursday")]
    Thu,
    #[serde(alias = "F", alias = "Friday")]
    Fri,
}

impl Weekday {
    /// All teaching days in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Three-letter display label (`Mon`, `Tue`, ...).
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }

    /// Token used in catalog day codes (`M`, `Tu`, `W`, `Th`, `F`).
    pub const fn code(self) -> &'static str {
        match self {
            Weekday::Mon => "M",
            Weekday::Tue => "Tu",
            Weekday::Wed => "W",
            Weekday::Thu => "Th",
            Weekday::Fri => "F",
        }
    }

    /// The weekday whose code `rest` starts with.
    fn leading(rest: &str) -> Option<Weekday> {
        // `T` alone is ambiguous, so two-letter codes are tried first.
        Weekday::ALL
            .iter()
            .copied()
            .filter(|d| d.code().len() == 2)
            .chain(Weekday::ALL.iter().copied().filter(|d| d.code().len() == 1))
            .find(|d| rest.starts_with(d.code()))
    }

    /// Splits a catalog day code such as `"MWF"` or `"TuTh"` into weekdays.
    ///
    /// The result is in week order with duplicates removed. Characters that
    /// are not part of a teaching-day code (`Sa`, `Su`) are skipped. An empty
    /// code yields an empty list; a non-empty code without any teaching day,
    /// such as `"TBA"`, is an error.
    pub fn parse_day_code(code: &str) -> Result<Vec<Weekday>, TimeError> {
        let trimmed = code.trim();
        let mut days = Vec::new();
        let mut skipped = String::new();
        let mut rest = trimmed;

        while let Some(first) = rest.chars().next() {
            match Self::leading(rest) {
                Some(day) => {
                    rest = &rest[day.code().len()..];
                    if !days.contains(&day) {
                        days.push(day);
                    }
                }
                None => {
                    skipped.push(first);
                    rest = &rest[first.len_utf8()..];
                }
            }
        }

        if days.is_empty() && !trimmed.is_empty() {
            return Err(TimeError::InvalidDayCode {
                code: code.to_string(),
                token: skipped,
            });
        }
        if !skipped.is_empty() {
            debug!(code, skipped = %skipped, "ignoring non-teaching days in day code");
        }

        days.sort();
        Ok(days)
    }
}

impl FromStr for Weekday {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weekday::ALL
            .iter()
            .copied()
            .find(|d| {
                d.label().eq_ignore_ascii_case(trimmed) || d.code().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| TimeError::InvalidWeekday(s.to_string()))
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_letter_codes() {
        assert_eq!(
            Weekday::parse_day_code("MWF").unwrap(),
            vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
        );
    }

    #[test]
    fn parses_two_letter_codes() {
        assert_eq!(
            Weekday::parse_day_code("TuTh").unwrap(),
            vec![Weekday::Tue, Weekday::Thu]
        );
        assert_eq!(
            Weekday::parse_day_code("MTuWThF").unwrap(),
            Weekday::ALL.to_vec()
        );
    }

    #[test]
    fn empty_code_is_no_days() {
        assert!(Weekday::parse_day_code("").unwrap().is_empty());
    }

    #[test]
    fn duplicates_collapse_and_sort() {
        assert_eq!(
            Weekday::parse_day_code("FM").unwrap(),
            vec![Weekday::Mon, Weekday::Fri]
        );
        assert_eq!(Weekday::parse_day_code("MM").unwrap(), vec![Weekday::Mon]);
    }

    #[test]
    fn weekend_tokens_are_skipped() {
        assert_eq!(
            Weekday::parse_day_code("TuThSa").unwrap(),
            vec![Weekday::Tue, Weekday::Thu]
        );
        assert_eq!(Weekday::parse_day_code("MSaSu").unwrap(), vec![Weekday::Mon]);
    }

    #[test]
    fn code_without_teaching_days_is_an_error() {
        assert!(matches!(
            Weekday::parse_day_code("TBA"),
            Err(TimeError::InvalidDayCode { ref token, .. }) if token == "TBA"
        ));
        assert!(Weekday::parse_day_code("T").is_err());
        assert!(Weekday::parse_day_code("SaSu").is_err());
    }

    #[test]
    fn from_str_accepts_labels_and_codes() {
        assert_eq!("thu".parse::<Weekday>().unwrap(), Weekday::Thu);
        assert_eq!("Th".parse::<Weekday>().unwrap(), Weekday::Thu);
        assert!("Sun".parse::<Weekday>().is_err());
    }

    #[test]
    fn deserializes_codes_and_labels() {
        let days: Vec<Weekday> = serde_json::from_str(r#"["M", "Tue", "Thursday"]"#).unwrap();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Tue, Weekday::Thu]);
    }
}
