use std::cmp::Ordering;
use std::str::FromStr;

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::errors::{DatasetError, DatasetResult};

/// `Sample` is a single numeric observation held by a
/// [`DataProcessor`](crate::DataProcessor).
///
/// The representation the caller supplied is kept, so integer input reports
/// back as integers from [`Statistics`](crate::Statistics) while arithmetic
/// always happens in `f64`.
#[derive(From, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sample {
    Int(i64),
    Float(f64),
}

impl Sample {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }

    /// Accepted samples are finite and not below zero. `-0.0` passes since
    /// it compares equal to zero.
    #[must_use]
    pub fn is_within_domain(&self) -> bool {
        match self {
            Self::Int(value) => *value >= 0,
            Self::Float(value) => value.is_finite() && *value >= 0.0,
        }
    }

    /// Numeric ordering across both representations. Integer and float pairs
    /// compare exactly, so equality stays transitive for integers beyond
    /// 2^53. `NaN` falls back to `f64::total_cmp`.
    #[must_use]
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.exact_cmp(other)
            .unwrap_or_else(|| self.as_f64().total_cmp(&other.as_f64()))
    }

    fn exact_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(right)),
            (Self::Float(left), Self::Float(right)) => left.partial_cmp(right),
            (Self::Int(left), Self::Float(right)) => cmp_int_float(*left, *right),
            (Self::Float(left), Self::Int(right)) => {
                cmp_int_float(*right, *left).map(Ordering::reverse)
            }
        }
    }
}

/// 2^63, the first float above every `i64`.
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_UPPER_BOUND {
        return Some(Ordering::Less);
    }
    if float < -I64_UPPER_BOUND {
        return Some(Ordering::Greater);
    }

    // in range, so the truncated value converts to i64 exactly
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl PartialEq for Sample {
    fn eq(&self, other: &Self) -> bool {
        self.exact_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Sample {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.exact_cmp(other)
    }
}

impl core::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

impl FromStr for Sample {
    type Err = DatasetError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Int(value));
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Ok(Self::Float(value)),
            Err(_) => Err(DatasetError::NotNumeric(raw.to_string())),
        }
    }
}

/// `IntoSample` is the single conversion seam for
/// [`DataProcessor::add_value`](crate::DataProcessor::add_value).
///
/// Rust numbers convert as they are, except integers wider than `i64` whose
/// value does not fit, which fail with
/// [`ErrorKind::Range`](crate::ErrorKind::Range). Text is never a number here,
/// even when it spells one: parse it with `str::parse::<Sample>` first. JSON
/// values fail with [`ErrorKind::Type`](crate::ErrorKind::Type) unless they
/// hold a number.
pub trait IntoSample {
    fn into_sample(self) -> DatasetResult<Sample>;
}

impl IntoSample for Sample {
    fn into_sample(self) -> DatasetResult<Sample> {
        Ok(self)
    }
}

macro_rules! into_sample_int {
    ($($t:ty),*) => {
        $(
            impl IntoSample for $t {
                fn into_sample(self) -> DatasetResult<Sample> {
                    Ok(Sample::Int(i64::from(self)))
                }
            }
        )*
    };
}

into_sample_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! into_sample_wide_int {
    ($($t:ty),*) => {
        $(
            impl IntoSample for $t {
                #[allow(clippy::cast_precision_loss)]
                fn into_sample(self) -> DatasetResult<Sample> {
                    i64::try_from(self)
                        .map(Sample::Int)
                        .map_err(|_| DatasetError::OutOfRange(Sample::Float(self as f64)))
                }
            }
        )*
    };
}

into_sample_wide_int!(u64, usize, isize);

impl IntoSample for f32 {
    fn into_sample(self) -> DatasetResult<Sample> {
        Ok(Sample::Float(f64::from(self)))
    }
}

impl IntoSample for f64 {
    fn into_sample(self) -> DatasetResult<Sample> {
        Ok(Sample::Float(self))
    }
}

impl IntoSample for &str {
    fn into_sample(self) -> DatasetResult<Sample> {
        Err(DatasetError::NotNumeric(self.to_string()))
    }
}

impl IntoSample for String {
    fn into_sample(self) -> DatasetResult<Sample> {
        Err(DatasetError::NotNumeric(self))
    }
}

impl IntoSample for &serde_json::Value {
    fn into_sample(self) -> DatasetResult<Sample> {
        let serde_json::Value::Number(number) = self else {
            return Err(DatasetError::NotNumeric(self.to_string()));
        };

        if let Some(value) = number.as_i64() {
            return Ok(Sample::Int(value));
        }

        // u64 beyond i64::MAX, or a real number
        number
            .as_f64()
            .map(Sample::Float)
            .ok_or_else(|| DatasetError::NotNumeric(number.to_string()))
    }
}

impl IntoSample for serde_json::Value {
    fn into_sample(self) -> DatasetResult<Sample> {
        (&self).into_sample()
    }
}
