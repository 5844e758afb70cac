use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{DatasetError, DatasetResult};

static DATASET_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("dataset name pattern compiles"));

/// Checks `name` is non-empty and only uses ASCII letters, digits and `_`.
pub fn validate_dataset_name(name: &str) -> DatasetResult<bool> {
    if DATASET_NAME.is_match(name) {
        Ok(true)
    } else {
        Err(DatasetError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod test_dataset_names {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn accepts_word_characters() {
        for name in ["dataset_123", "A", "_", "0", "UPPER_lower_99"] {
            assert_eq!(validate_dataset_name(name), Ok(true), "{name}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for name in ["", "data@set!", "data set", "dataset\n", "zażółć", "a-b", "a.b"] {
            let err = validate_dataset_name(name).expect_err(name);
            assert_eq!(err.kind(), ErrorKind::Format, "{name:?}");
        }
    }
}
