//! Validated numeric datasets with statistics derived on demand.
//!
//! A [`DataProcessor`] owns a named, ordered sequence of non-negative
//! [`Sample`]s. Values are checked as they are added; the average and the
//! [`Statistics`] record are recomputed from the stored samples each time they
//! are asked for.
//!
//! Fixture data for tests comes from [`generate_sample`], which draws from a
//! [`RandomSource`] the caller owns and seeds.
//!
//! ```
//! use foundation_datasets::{generate_sample, DataProcessor, SeededSource};
//!
//! let mut source = SeededSource::new(42);
//! let mut processor = DataProcessor::new("fixtures");
//! for value in generate_sample(5, &mut source) {
//!     processor.add_value(value).unwrap();
//! }
//!
//! assert_eq!(processor.statistics().count, 5);
//! ```

mod clock;
mod errors;
mod names;
mod processor;
mod samples;
mod sampling;
mod statistics;

pub use clock::*;
pub use errors::*;
pub use names::*;
pub use processor::*;
pub use samples::*;
pub use sampling::*;
pub use statistics::*;
