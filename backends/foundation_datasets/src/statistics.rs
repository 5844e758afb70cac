use serde::{Deserialize, Serialize};

use crate::errors::{DatasetError, DatasetResult};
use crate::samples::Sample;

/// Aggregate view over a dataset.
///
/// Every field other than `count` is `None` for an empty dataset, so a
/// legitimate zero minimum is never confused with "no data".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub min: Option<Sample>,
    pub max: Option<Sample>,
    pub avg: Option<f64>,
}

impl Statistics {
    /// Computes the record in a single pass over `samples`.
    #[must_use]
    pub fn from_samples(samples: &[Sample]) -> Self {
        let Ok(avg) = mean(samples) else {
            return Self::default();
        };

        let mut min = samples[0];
        let mut max = samples[0];
        for sample in &samples[1..] {
            if sample.numeric_cmp(&min).is_lt() {
                min = *sample;
            }
            if sample.numeric_cmp(&max).is_gt() {
                max = *sample;
            }
        }

        Self {
            count: samples.len(),
            min: Some(min),
            max: Some(max),
            avg: Some(avg),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl core::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn field(value: Option<String>) -> String {
            value.unwrap_or_else(|| String::from("-"))
        }

        write!(
            f,
            "count={} min={} max={} avg={}",
            self.count,
            field(self.min.map(|v| v.to_string())),
            field(self.max.map(|v| v.to_string())),
            field(self.avg.map(|v| format!("{v:?}"))),
        )
    }
}

/// Arithmetic mean using Neumaier's compensated summation.
///
/// Plain sequential summation drifts in the low-order bits as the dataset
/// grows; the compensation term keeps the error independent of length for
/// typical inputs. Results should still be compared with a tolerance.
///
/// When the running sum overflows `f64` the mean is recomputed from values
/// pre-divided by the sample count, so finite samples always give a finite
/// mean.
///
/// ```
/// use foundation_datasets::{mean, Sample};
///
/// let samples = [Sample::Int(10), Sample::Int(20), Sample::Int(30)];
/// assert_eq!(mean(&samples).unwrap(), 20.0);
/// assert!(mean(&[]).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn mean(samples: &[Sample]) -> DatasetResult<f64> {
    if samples.is_empty() {
        return Err(DatasetError::NoValues);
    }

    let count = samples.len() as f64;
    let total = compensated_sum(samples.iter().map(Sample::as_f64));
    if total.is_finite() {
        return Ok(total / count);
    }

    Ok(compensated_sum(
        samples.iter().map(|sample| sample.as_f64() / count),
    ))
}

fn compensated_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for value in values {
        let total = sum + value;
        if !total.is_finite() {
            return total;
        }
        if sum.abs() >= value.abs() {
            compensation += (sum - total) + value;
        } else {
            compensation += (value - total) + sum;
        }
        sum = total;
    }

    sum + compensation
}
