use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

/**
A duration as used by `Edm.Duration` properties, in
[ISO 8601](https://en.wikipedia.org/wiki/ISO_8601#Durations) notation,
e.g. `P1DT2H30M` or `-PT0.5S`.

Components are kept as written rather than normalized, so `PT90M` and `PT1H30M`
are different values.
*/
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseDurationError {
    #[error("'{0}' is not an ISO 8601 duration")]
    Malformed(String),
    #[error("duration component in '{0}' is out of range")]
    OutOfRange(String),
}

const ISO_DURATION_STR: &str = r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?)?$";

lazy_static! {
    static ref ISO_DURATION: Regex = Regex::new(ISO_DURATION_STR).unwrap();
}

impl IsoDuration {
    pub fn from_hms(hours: u32, minutes: u32, seconds: f64) -> Self {
        IsoDuration {
            hours,
            minutes,
            seconds,
            ..Default::default()
        }
    }

    pub fn from_days(days: u32) -> Self {
        IsoDuration {
            days,
            ..Default::default()
        }
    }

    pub fn negated(mut self) -> Self {
        self.negative = !self.negative;
        self
    }

    fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0.0
    }

    fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0 && !self.has_time_part()
    }
}

impl FromStr for IsoDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = ISO_DURATION
            .captures(s)
            .ok_or_else(|| ParseDurationError::Malformed(s.to_string()))?;

        // 'P' alone and a dangling 'T' both pass the pattern
        let date_given = (2..=5).any(|i| captures.get(i).is_some());
        let time_given = (7..=9).any(|i| captures.get(i).is_some());
        if captures.get(6).is_some() && !time_given || !date_given && !time_given {
            return Err(ParseDurationError::Malformed(s.to_string()));
        }

        let component = |i: usize| -> Result<u32, ParseDurationError> {
            match captures.get(i) {
                Some(m) => m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| ParseDurationError::OutOfRange(s.to_string())),
                None => Ok(0),
            }
        };

        let seconds = match captures.get(9) {
            Some(m) => m
                .as_str()
                .parse::<f64>()
                .map_err(|_| ParseDurationError::OutOfRange(s.to_string()))?,
            None => 0.0,
        };

        Ok(IsoDuration {
            negative: captures.get(1).is_some(),
            years: component(2)?,
            months: component(3)?,
            weeks: component(4)?,
            days: component(5)?,
            hours: component(7)?,
            minutes: component(8)?,
            seconds,
        })
    }
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        f.write_str("P")?;
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{value}{designator}")?;
            }
        }
        if self.has_time_part() {
            f.write_str("T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}
