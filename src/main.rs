use log::LevelFilter;
use pokedex_reports::{cli::Cli, commands::run, config::Config, ReportError};
use std::process::ExitCode;

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = Config::resolve(cli.database.clone(), cli.verbose).and_then(|config| {
        init_logging(config.log_level());
        run(&config, &cli.command)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ReportError>() {
                Some(report_err) if report_err.is_validation() => eprintln!("{}", report_err),
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
