mod commands;
mod config;
mod errors;

use std::process::ExitCode;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::DatasetsConfig;
use crate::errors::{CliError, CliResult};

fn commander() -> clap::Command {
    commands::sample::register(commands::validate::register(commands::average::register(
        commands::stats::register(
            clap::Command::new("datasets")
                .about("Validate numeric datasets and summarise them")
                .arg_required_else_help(true)
                .arg(
                    clap::Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("path to a datasets.toml configuration file")
                        .global(true)
                        .action(clap::ArgAction::Set)
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    clap::Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("log at debug level regardless of configuration")
                        .global(true)
                        .action(clap::ArgAction::SetTrue),
                ),
        ),
    )))
}

fn install_logging(config: &DatasetsConfig, verbose: bool) -> CliResult<()> {
    let level = if verbose {
        Level::DEBUG
    } else {
        config.tracing_level()?
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| CliError::Logging(err.to_string()))
}

fn run(matches: &clap::ArgMatches) -> CliResult<()> {
    let config = DatasetsConfig::load(
        matches
            .get_one::<std::path::PathBuf>("config")
            .map(std::path::PathBuf::as_path),
    )?;
    install_logging(&config, matches.get_flag("verbose"))?;

    match matches.subcommand() {
        Some(("stats", arguments)) => commands::stats::run(arguments, &config),
        Some(("average", arguments)) => commands::average::run(arguments, &config),
        Some(("validate", arguments)) => commands::validate::run(arguments, &config),
        Some(("sample", arguments)) => commands::sample::run(arguments, &config),
        _ => Ok(()),
    }
}

fn main() -> ExitCode {
    let matches = commander().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("datasets: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod test_commands {
    use super::*;
    use crate::config::{OutputFormat, SamplingConfig};
    use crate::errors::{EXIT_EMPTY_STATE, EXIT_FAILURE, EXIT_FORMAT, EXIT_RANGE, EXIT_TYPE};

    fn invoke(argv: &[&str]) -> CliResult<String> {
        invoke_with(argv, &DatasetsConfig::default())
    }

    fn invoke_with(argv: &[&str], config: &DatasetsConfig) -> CliResult<String> {
        let matches = commander()
            .try_get_matches_from(argv)
            .expect("arguments should parse");

        match matches.subcommand() {
            Some(("stats", arguments)) => commands::stats::execute(arguments, config),
            Some(("average", arguments)) => commands::average::execute(arguments),
            Some(("validate", arguments)) => commands::validate::execute(arguments),
            Some(("sample", arguments)) => commands::sample::execute(arguments, config),
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn stats_renders_json_by_default() {
        let output = invoke(&["datasets", "stats", "5", "10", "15"]).expect("should succeed");
        assert_eq!(output, r#"{"count":3,"min":5,"max":15,"avg":10.0}"#);
    }

    #[test]
    fn stats_of_nothing_reports_absent_fields() {
        let output = invoke(&["datasets", "stats"]).expect("should succeed");
        assert_eq!(output, r#"{"count":0,"min":null,"max":null,"avg":null}"#);
    }

    #[test]
    fn stats_renders_text_on_request() {
        let output = invoke(&["datasets", "stats", "-n", "scores", "-f", "text", "1", "2.5"])
            .expect("should succeed");
        assert_eq!(output, "scores: count=2 min=1 max=2.5 avg=1.75");
    }

    #[test]
    fn average_of_integers() {
        let output = invoke(&["datasets", "average", "10", "20", "30"]).expect("should succeed");
        assert_eq!(output, "20.0");
    }

    #[test]
    fn each_failure_kind_has_its_own_exit_code() {
        let cases: [(&[&str], u8); 4] = [
            (&["datasets", "stats", "4", "not_number"], EXIT_TYPE),
            (&["datasets", "stats", "4", "-5"], EXIT_RANGE),
            (&["datasets", "average"], EXIT_EMPTY_STATE),
            (&["datasets", "validate", "--name", "data@set!"], EXIT_FORMAT),
        ];

        for (argv, expected) in cases {
            let err = invoke(argv).expect_err("should fail");
            assert_eq!(err.exit_code(), expected, "{argv:?}");
        }
    }

    #[test]
    fn validate_accepts_word_names() {
        let output =
            invoke(&["datasets", "validate", "--name", "dataset_123"]).expect("should succeed");
        assert_eq!(output, "dataset_123: valid");
    }

    #[test]
    fn sample_replays_for_a_fixed_seed() {
        let first = invoke(&["datasets", "sample", "--seed", "42", "--size", "5"])
            .expect("should succeed");
        let second = invoke(&["datasets", "sample", "--seed", "42", "--size", "5"])
            .expect("should succeed");
        assert_eq!(first, second);

        let values: Vec<i64> = serde_json::from_str(&first).expect("json array");
        assert_eq!(values.len(), 5);
        assert!(values.iter().all(|value| (0..=10).contains(value)));
    }

    #[test]
    fn sample_rejects_inverted_bounds() {
        let err = invoke(&["datasets", "sample", "--low", "8", "--high", "2"])
            .expect_err("should fail");
        assert_eq!(err.exit_code(), EXIT_RANGE);
    }

    fn text_output_config() -> DatasetsConfig {
        let mut config = DatasetsConfig::default();
        config.output.format = OutputFormat::Text;
        config
    }

    #[test]
    fn configured_output_format_applies_to_stats() {
        let output = invoke_with(
            &["datasets", "stats", "-n", "scores", "5", "15"],
            &text_output_config(),
        )
        .expect("should succeed");
        assert_eq!(output, "scores: count=2 min=5 max=15 avg=10.0");
    }

    #[test]
    fn format_flag_overrides_configured_format() {
        let output = invoke_with(&["datasets", "stats", "-f", "json", "5"], &text_output_config())
            .expect("should succeed");
        assert_eq!(output, r#"{"count":1,"min":5,"max":5,"avg":5.0}"#);
    }

    #[test]
    fn configured_seed_makes_sample_reproducible() {
        let config = DatasetsConfig {
            sampling: SamplingConfig {
                size: 6,
                seed: Some(42),
                low: 2,
                high: 4,
            },
            ..DatasetsConfig::default()
        };

        let first = invoke_with(&["datasets", "sample"], &config).expect("should succeed");
        let second = invoke_with(&["datasets", "sample"], &config).expect("should succeed");
        assert_eq!(first, second);

        let values: Vec<i64> = serde_json::from_str(&first).expect("json array");
        assert_eq!(values.len(), 6);
        assert!(values.iter().all(|value| (2..=4).contains(value)));
    }

    #[test]
    fn configured_bounds_are_validated() {
        let mut config = DatasetsConfig::default();
        config.sampling.low = 9;
        config.sampling.high = 1;

        let err = invoke_with(&["datasets", "sample"], &config).expect_err("should fail");
        assert_eq!(err.exit_code(), EXIT_RANGE);
    }

    #[test]
    fn numeric_text_arguments_are_parsed_before_validation() {
        let output = invoke(&["datasets", "stats", " 7", "1e1"]).expect("should succeed");
        assert_eq!(output, r#"{"count":2,"min":7,"max":10.0,"avg":8.5}"#);
    }

    #[test]
    fn unknown_log_level_in_config_file_is_a_generic_failure() {
        let target = std::env::temp_dir().join(format!(
            "ewe_datasets_bad_level_{}.toml",
            std::process::id()
        ));
        std::fs::write(&target, "log_level = \"chatty\"\n").expect("should write");

        let matches = commander()
            .try_get_matches_from([
                std::ffi::OsString::from("datasets"),
                "--config".into(),
                target.clone().into_os_string(),
                "stats".into(),
                "5".into(),
            ])
            .expect("arguments should parse");
        let result = run(&matches);
        std::fs::remove_file(&target).expect("should clean up");

        let err = result.expect_err("log level is unknown");
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn missing_config_file_is_a_generic_failure() {
        let target = std::env::temp_dir().join("ewe_datasets_absent_config.toml");
        let matches = commander()
            .try_get_matches_from([
                std::ffi::OsString::from("datasets"),
                "stats".into(),
                "--config".into(),
                target.into_os_string(),
            ])
            .expect("arguments should parse");

        let err = run(&matches).expect_err("config file is missing");
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn config_flag_is_accepted_after_the_subcommand() {
        let matches = commander()
            .try_get_matches_from(["datasets", "stats", "--config", "datasets.toml", "-v"])
            .expect("arguments should parse");
        assert_eq!(
            matches.get_one::<std::path::PathBuf>("config"),
            Some(&std::path::PathBuf::from("datasets.toml"))
        );
        assert!(matches.get_flag("verbose"));
    }
}
