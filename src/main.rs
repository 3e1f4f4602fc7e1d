use clap::{CommandFactory, Parser};
use clap_complete::generate;
use coverage_srcmap::cli::{Cli, Commands, Verbosity};
use coverage_srcmap::config::Config;
use coverage_srcmap::ui::formatter::Formatter;
use miette::Diagnostic;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

fn initialize_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("coverage_srcmap={}", verbosity.to_log_level()))
    });

    // SRCMAP_LOG_JSON switches stderr logs to one JSON object per event.
    let output = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true);
    let output: Box<dyn Layer<Registry> + Send + Sync> =
        if std::env::var_os("SRCMAP_LOG_JSON").is_some() {
            output.json().boxed()
        } else {
            output.boxed()
        };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> miette::Result<Config> {
    match &cli.config {
        Some(path) => Ok(Config::load_file(path)?),
        None => Ok(Config::load_or_default()),
    }
}

fn run(cli: Cli) -> miette::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Derive(mut args) => {
            args.merge_config(&config);
            coverage_srcmap::cli::commands::derive(args)
        }
        Commands::Lookup(args) => coverage_srcmap::cli::commands::lookup(args, &config),
        Commands::Dump(mut args) => {
            args.merge_config(&config);
            coverage_srcmap::cli::commands::dump(args, &config)
        }
        Commands::Check(args) => coverage_srcmap::cli::commands::check(args, &config),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "srcmap", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    Formatter::configure_colors_from_env();

    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    Formatter::set_verbosity(verbosity.as_u8());

    initialize_tracing(verbosity);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", Formatter::error(format!("Error: {err}")));
            if let Some(help) = err.help() {
                eprintln!("{}", Formatter::info(format!("help: {help}")));
            }
            ExitCode::FAILURE
        }
    }
}
