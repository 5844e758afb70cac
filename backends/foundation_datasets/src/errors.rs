use crate::samples::Sample;

pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// `ErrorKind` is the category of a [`DatasetError`], callers branch on this
/// rather than on the concrete variant when mapping failures to exit codes or
/// user facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be interpreted as a number.
    Type,
    /// Input was numeric but outside the accepted domain.
    Range,
    /// The operation requires at least one sample.
    EmptyState,
    /// The dataset name contains characters outside `[A-Za-z0-9_]`.
    Format,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The raw input that failed to parse as a number.
    NotNumeric(String),

    /// A numeric sample that is negative or not finite.
    OutOfRange(Sample),

    /// Requested sample bounds where `low > high` or `low < 0`.
    InvalidBounds { low: i64, high: i64 },

    NoValues,

    InvalidName(String),
}

impl DatasetError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotNumeric(_) => ErrorKind::Type,
            Self::OutOfRange(_) | Self::InvalidBounds { .. } => ErrorKind::Range,
            Self::NoValues => ErrorKind::EmptyState,
            Self::InvalidName(_) => ErrorKind::Format,
        }
    }
}

impl std::error::Error for DatasetError {}

impl core::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric(raw) => write!(f, "Value must be a number: {raw:?}"),
            Self::OutOfRange(sample) => write!(f, "Value must be positive: {sample}"),
            Self::InvalidBounds { low, high } => {
                write!(f, "Sample bounds must satisfy 0 <= low <= high: {low}..={high}")
            }
            Self::NoValues => write!(f, "No values to calculate"),
            Self::InvalidName(name) => write!(f, "Invalid dataset name: {name:?}"),
        }
    }
}

#[cfg(test)]
mod test_dataset_errors {
    use super::*;

    #[test]
    fn each_variant_reports_its_kind() {
        assert_eq!(
            DatasetError::NotNumeric("abc".into()).kind(),
            ErrorKind::Type
        );
        assert_eq!(
            DatasetError::OutOfRange(Sample::Int(-5)).kind(),
            ErrorKind::Range
        );
        assert_eq!(
            DatasetError::InvalidBounds { low: 4, high: 1 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(DatasetError::NoValues.kind(), ErrorKind::EmptyState);
        assert_eq!(
            DatasetError::InvalidName("data@set!".into()).kind(),
            ErrorKind::Format
        );
    }

    #[test]
    fn messages_lead_with_the_condition() {
        assert!(DatasetError::NotNumeric("not_number".into())
            .to_string()
            .starts_with("Value must be a number"));
        assert!(DatasetError::OutOfRange(Sample::Int(-5))
            .to_string()
            .starts_with("Value must be positive"));
        assert_eq!(DatasetError::NoValues.to_string(), "No values to calculate");
        assert!(DatasetError::InvalidName("data@set!".into())
            .to_string()
            .starts_with("Invalid dataset name"));
    }
}
