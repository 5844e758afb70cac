use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::errors::{DatasetError, DatasetResult};
use crate::names::validate_dataset_name;
use crate::samples::{IntoSample, Sample};
use crate::statistics::{mean, Statistics};

/// `DataProcessor` accumulates validated, non-negative numeric samples for a
/// named dataset and derives statistics from them on every query.
///
/// Samples only enter through [`DataProcessor::add_value`], which rejects
/// non-numeric input and values outside the domain without touching the
/// stored sequence. Nothing is cached: [`DataProcessor::average`] and
/// [`DataProcessor::statistics`] walk the samples each time.
///
/// The dataset name is stored as given and checked only when
/// [`DataProcessor::validate_dataset_name`] is asked to.
///
/// There is no internal synchronisation. Share a processor across threads
/// behind a single `Mutex` covering both mutation and queries.
///
/// ```
/// use foundation_datasets::{DataProcessor, ErrorKind};
///
/// let mut processor = DataProcessor::new("dataset1");
/// assert_eq!(processor.add_value(10.5), Ok(true));
///
/// let err = processor.add_value("not_number").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
///
/// let err = processor.add_value(-5).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Range);
///
/// assert_eq!(processor.samples().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct DataProcessor {
    dataset_name: String,
    values: Vec<Sample>,
    created_at: DateTime<Utc>,
}

impl DataProcessor {
    pub fn new(dataset_name: impl Into<String>) -> Self {
        Self::with_clock(dataset_name, SystemClock)
    }

    /// Creates a processor whose creation time is read from `clock`.
    pub fn with_clock(dataset_name: impl Into<String>, clock: impl Clock) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            values: Vec::new(),
            created_at: clock.now(),
        }
    }

    #[must_use]
    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// Read only view of the accepted samples in insertion order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Validates and appends `value`, returning `Ok(true)` on success.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Type`](crate::ErrorKind::Type) when `value` is not a
    /// number, text included even when it spells one,
    /// [`ErrorKind::Range`](crate::ErrorKind::Range) when it is negative or not
    /// finite. The stored samples are unchanged on failure.
    pub fn add_value<V: IntoSample>(&mut self, value: V) -> DatasetResult<bool> {
        let sample = match value.into_sample() {
            Ok(sample) => sample,
            Err(err) => {
                tracing::warn!(dataset = %self.dataset_name, error = %err, "rejected non numeric value");
                return Err(err);
            }
        };

        if !sample.is_within_domain() {
            tracing::warn!(dataset = %self.dataset_name, %sample, "rejected out of range value");
            return Err(DatasetError::OutOfRange(sample));
        }

        self.values.push(sample);
        tracing::debug!(dataset = %self.dataset_name, %sample, count = self.values.len(), "added value");
        Ok(true)
    }

    /// Arithmetic mean of the stored samples.
    ///
    /// Uses compensated summation; compare results with a tolerance rather
    /// than exact equality when the inputs are not integers.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::EmptyState`](crate::ErrorKind::EmptyState) when no
    /// samples are stored.
    pub fn average(&self) -> DatasetResult<f64> {
        mean(&self.values)
    }

    /// Count, extrema and mean of the stored samples. Unlike
    /// [`DataProcessor::average`], an empty dataset is not an error: the
    /// record comes back with `count == 0` and every other field `None`.
    ///
    /// ```
    /// use foundation_datasets::{DataProcessor, Sample};
    ///
    /// let mut processor = DataProcessor::new("test");
    /// assert_eq!(processor.statistics().min, None);
    ///
    /// for value in [5, 10, 15] {
    ///     processor.add_value(value).unwrap();
    /// }
    /// let stats = processor.statistics();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.min, Some(Sample::Int(5)));
    /// assert_eq!(stats.max, Some(Sample::Int(15)));
    /// assert_eq!(stats.avg, Some(10.0));
    /// ```
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_samples(&self.values)
    }

    /// # Errors
    ///
    /// [`ErrorKind::Format`](crate::ErrorKind::Format) when the dataset name
    /// is empty or holds characters outside `[A-Za-z0-9_]`.
    pub fn validate_dataset_name(&self) -> DatasetResult<bool> {
        validate_dataset_name(&self.dataset_name)
    }

    #[must_use]
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation time as fractional seconds since the Unix epoch.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn creation_timestamp(&self) -> f64 {
        self.created_at.timestamp_micros() as f64 / 1_000_000.0
    }

    /// Drops every sample. Name and creation time are kept.
    pub fn reset(&mut self) -> bool {
        tracing::debug!(dataset = %self.dataset_name, dropped = self.values.len(), "reset");
        self.values.clear();
        true
    }

    /// Overwrites the stored samples WITHOUT validation.
    ///
    /// This exists so test setup can seed arbitrary datasets in one step,
    /// including values `add_value` would refuse. Production paths must go
    /// through [`DataProcessor::add_value`]; nothing re-validates samples
    /// placed here.
    pub fn replace_samples_unchecked(&mut self, values: Vec<Sample>) {
        self.values = values;
    }
}
