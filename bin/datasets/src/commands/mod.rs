pub mod average;
pub mod sample;
pub mod stats;
pub mod validate;

use foundation_datasets::{DataProcessor, Sample};

use crate::config::OutputFormat;
use crate::errors::CliResult;

pub(crate) fn name_arg() -> clap::Arg {
    clap::Arg::new("name")
        .short('n')
        .long("name")
        .help("the dataset name")
        .action(clap::ArgAction::Set)
        .default_value("dataset")
}

pub(crate) fn values_arg() -> clap::Arg {
    clap::Arg::new("values")
        .help("numeric values to add to the dataset, in order")
        .action(clap::ArgAction::Append)
        .num_args(0..)
        .allow_negative_numbers(true)
}

pub(crate) fn format_arg() -> clap::Arg {
    clap::Arg::new("format")
        .short('f')
        .long("format")
        .help("output format, overrides the configuration file")
        .action(clap::ArgAction::Set)
        .value_parser(clap::builder::EnumValueParser::<OutputFormat>::new())
}

/// Builds a processor from the `name` and `values` arguments, stopping at the
/// first value that fails to parse or validate. Command line values are text,
/// so they are parsed into samples here before reaching the processor.
pub(crate) fn load_processor(args: &clap::ArgMatches) -> CliResult<DataProcessor> {
    let name = args
        .get_one::<String>("name")
        .map_or("dataset", String::as_str);

    let mut processor = DataProcessor::new(name);
    if let Some(values) = args.get_many::<String>("values") {
        for value in values {
            processor.add_value(value.parse::<Sample>()?)?;
        }
    }

    Ok(processor)
}
