use foundation_datasets::{generate_sample_in, SeededSource};

use crate::config::{DatasetsConfig, OutputFormat};
use crate::errors::CliResult;

use super::format_arg;

pub fn register(command: clap::Command) -> clap::Command {
    command.subcommand(
        clap::Command::new("sample")
            .about("Generates reproducible fixture values from a seed")
            .arg(
                clap::Arg::new("size")
                    .short('s')
                    .long("size")
                    .help("how many values to generate")
                    .action(clap::ArgAction::Set)
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                clap::Arg::new("seed")
                    .long("seed")
                    .help("seed for the random source, the same seed replays the same values")
                    .action(clap::ArgAction::Set)
                    .value_parser(clap::value_parser!(u64)),
            )
            .arg(
                clap::Arg::new("low")
                    .long("low")
                    .help("inclusive lower bound")
                    .action(clap::ArgAction::Set)
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            )
            .arg(
                clap::Arg::new("high")
                    .long("high")
                    .help("inclusive upper bound")
                    .action(clap::ArgAction::Set)
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            )
            .arg(format_arg()),
    )
}

pub fn execute(args: &clap::ArgMatches, config: &DatasetsConfig) -> CliResult<String> {
    let sampling = &config.sampling;
    let size = args.get_one::<usize>("size").copied().unwrap_or(sampling.size);
    let low = args.get_one::<i64>("low").copied().unwrap_or(sampling.low);
    let high = args.get_one::<i64>("high").copied().unwrap_or(sampling.high);

    let mut source = match args.get_one::<u64>("seed").copied().or(sampling.seed) {
        Some(seed) => SeededSource::new(seed),
        None => SeededSource::from_entropy(),
    };

    let values = generate_sample_in(size, low, high, &mut source)?;
    tracing::debug!(size, low, high, "generated sample");

    let format = args
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(config.output.format);

    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&values)?),
        OutputFormat::Text => Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")),
    }
}

pub fn run(args: &clap::ArgMatches, config: &DatasetsConfig) -> CliResult<()> {
    println!("{}", execute(args, config)?);
    Ok(())
}
