use std::io::{self, Read};

use anyhow::{anyhow, Context};
use chrono::Utc;
use clap::Parser;
use log::{info, LevelFilter};

use notamplace::{Keywords, NotamDecoder};

mod app;
mod cli;
mod report;

use cli::{Args, CliError};

fn main() {
    match notamdec() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn notamdec() -> Result<(), CliError> {
    // Parse options and start logging
    let args = Args::try_parse()?;
    log_setup(&args);

    // the keyword table lives for the whole run
    let keywords = keywords_setup(&args)?;
    let decoder = NotamDecoder::new(&keywords);

    let feed = feed_setup(&args)?;

    let config = app::Config {
        quiet: args.quiet,
        active_only: args.active_only,
        width: report::output_width(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = app::run(&config, &decoder, &feed, &Utc::now(), &mut out)
        .context("Unable to write decoded NOTAMs")?;

    if args.strict && summary.failed > 0 {
        return Err(CliError::new(
            anyhow!(
                "{} of {} messages could not be decoded",
                summary.failed,
                summary.total()
            ),
            2,
        ));
    }

    Ok(())
}

fn log_setup(args: &Args) {
    if args.quiet {
        // no logging
        return;
    } else if std::env::var_os("RUST_LOG").is_none() {
        // parameter controls
        let log_filter = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        pretty_env_logger::formatted_builder()
            .filter_module("notamplace", log_filter)
            .filter_module("notamdec", log_filter)
            .init();
    } else {
        // environment controls
        pretty_env_logger::init();
    }
}

fn keywords_setup(args: &Args) -> Result<Keywords, anyhow::Error> {
    let keywords = if args.no_builtin_keywords {
        Keywords::empty()
    } else {
        Keywords::builtin()
    };

    let path = match &args.keywords {
        Some(path) => path,
        None => return Ok(keywords),
    };

    info!("loading keyword table: \"{}\"", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Unable to read --keywords \"{}\"", path))?;
    let keywords = keywords
        .extend_from_table(&text)
        .with_context(|| format!("Unable to load --keywords \"{}\"", path))?;

    info!("loaded {} keywords", keywords.custom_len());
    Ok(keywords)
}

fn feed_setup(args: &Args) -> Result<String, anyhow::Error> {
    let mut raw = Vec::new();
    if args.input_is_stdin() {
        info!("NOTAM decoder reading standard input");
        io::stdin()
            .lock()
            .read_to_end(&mut raw)
            .context("Unable to read standard input")?;
    } else {
        info!("NOTAM decoder reading file: \"{}\"", &args.file);
        std::fs::File::open(&args.file)
            .and_then(|mut f| f.read_to_end(&mut raw))
            .with_context(|| format!("Unable to read --file \"{}\"", args.file))?;
    }

    Ok(String::from_utf8_lossy(&raw).into_owned())
}
