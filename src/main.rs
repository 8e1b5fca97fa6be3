use std::{env, process};

use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use frprep::cli::parser::{parse, ParseOutcome};
use frprep::exitcode;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    // Logging must be up before parsing, so the verbosity flags are counted
    // here and validated with everything else afterwards.
    let verbosity = args
        .iter()
        .filter(|a| a.as_str() == "-d" || a.as_str() == "--debug")
        .count() as u8;
    setup_logging(verbosity);

    let code = match parse(args) {
        Ok(ParseOutcome::Help(text)) => {
            println!("{}", text.trim_end());
            exitcode::OK
        }
        Ok(ParseOutcome::Version(text)) => {
            println!("{}", text);
            exitcode::OK
        }
        Ok(ParseOutcome::Config(config)) => {
            tracing::info!("configuration ready: {:?}", config);
            println!("Experiment file: {}", config.exp_file.display());
            exitcode::OK
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            e.exit_code()
        }
    };
    process::exit(code);
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Formatted output goes to stderr; stdout stays reserved for the
    // usage/version/acknowledgement contract.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
