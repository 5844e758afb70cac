use foundation_datasets::DataProcessor;

use crate::config::DatasetsConfig;
use crate::errors::CliResult;

pub fn register(command: clap::Command) -> clap::Command {
    command.subcommand(
        clap::Command::new("validate")
            .about("Checks a dataset name only uses letters, digits and underscores")
            .arg(
                clap::Arg::new("name")
                    .short('n')
                    .long("name")
                    .help("the dataset name to check")
                    .action(clap::ArgAction::Set)
                    .required(true),
            )
            .arg_required_else_help(true),
    )
}

pub fn execute(args: &clap::ArgMatches) -> CliResult<String> {
    let name = args
        .get_one::<String>("name")
        .map_or("", String::as_str);

    DataProcessor::new(name).validate_dataset_name()?;
    Ok(format!("{name}: valid"))
}

pub fn run(args: &clap::ArgMatches, _config: &DatasetsConfig) -> CliResult<()> {
    println!("{}", execute(args)?);
    Ok(())
}
