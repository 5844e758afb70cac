use crate::config::DatasetsConfig;
use crate::errors::CliResult;

use super::{load_processor, name_arg, values_arg};

pub fn register(command: clap::Command) -> clap::Command {
    command.subcommand(
        clap::Command::new("average")
            .about("Prints the arithmetic mean of the given values")
            .arg(name_arg())
            .arg(values_arg()),
    )
}

pub fn execute(args: &clap::ArgMatches) -> CliResult<String> {
    let processor = load_processor(args)?;
    Ok(format!("{:?}", processor.average()?))
}

pub fn run(args: &clap::ArgMatches, _config: &DatasetsConfig) -> CliResult<()> {
    println!("{}", execute(args)?);
    Ok(())
}
