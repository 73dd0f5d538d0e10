//! Observation data points.

use serde::{Deserialize, Serialize};

use super::CalendarDate;
use crate::errors::DecodeError;

/// Literal the API sends in place of a value when the data point is missing.
pub const MISSING_VALUE: &str = ".";

/// One (date, value) data point of a series.
///
/// A missing value is not an error: it decodes to the zero record with
/// `valid == false`. Filter those out or surface them as gaps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawObservation", into = "RawObservation")]
pub struct Observation {
    pub date: CalendarDate,
    pub value: f64,
    pub valid: bool,
}

impl Observation {
    /// The value, or `None` for a missing data point.
    pub fn value(&self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

/// Both fields arrive as strings in either format. Realtime bounds on each
/// observation are ignored.
#[derive(Serialize, Deserialize)]
struct RawObservation {
    #[serde(rename = "date", alias = "@date")]
    date: String,
    #[serde(rename = "value", alias = "@value")]
    value: String,
}

impl From<Observation> for RawObservation {
    fn from(obs: Observation) -> Self {
        match obs.value() {
            Some(value) => RawObservation {
                date: obs.date.to_string(),
                value: value.to_string(),
            },
            None => RawObservation {
                date: obs.date.to_string(),
                value: MISSING_VALUE.to_string(),
            },
        }
    }
}

impl TryFrom<RawObservation> for Observation {
    type Error = DecodeError;

    fn try_from(raw: RawObservation) -> Result<Self, Self::Error> {
        if raw.value == MISSING_VALUE {
            return Ok(Observation::default());
        }
        let date = raw.date.parse()?;
        let value = raw.value.parse::<f64>().map_err(|e| {
            DecodeError::bad_value(format!("could not parse '{}': {}", raw.value, e))
        })?;
        Ok(Observation {
            date,
            value,
            valid: true,
        })
    }
}
