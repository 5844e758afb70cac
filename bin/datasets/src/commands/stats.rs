use crate::config::{DatasetsConfig, OutputFormat};
use crate::errors::CliResult;

use super::{format_arg, load_processor, name_arg, values_arg};

pub fn register(command: clap::Command) -> clap::Command {
    command.subcommand(
        clap::Command::new("stats")
            .about("Prints count, min, max and average of the given values")
            .arg(name_arg())
            .arg(format_arg())
            .arg(values_arg()),
    )
}

pub fn execute(args: &clap::ArgMatches, config: &DatasetsConfig) -> CliResult<String> {
    let processor = load_processor(args)?;
    let statistics = processor.statistics();

    let format = args
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(config.output.format);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&statistics)?),
        OutputFormat::Text => Ok(format!("{}: {statistics}", processor.dataset_name())),
    }
}

pub fn run(args: &clap::ArgMatches, config: &DatasetsConfig) -> CliResult<()> {
    println!("{}", execute(args, config)?);
    Ok(())
}
