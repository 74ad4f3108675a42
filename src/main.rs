//! gmtree CLI - render `go mod graph` output as a tree
//!
//! Usage: go mod graph | gmtree [OPTIONS] [FILE]

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use is_terminal::IsTerminal;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gmtree::config::Config;
use gmtree::domain::ports::LineSource;
use gmtree::infrastructure::{FileSource, ReadMode, StdinSource};
use gmtree::presentation::{create_writer, Cli};
use gmtree::{TreeError, TreePipeline};

mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            if ui::error::wants_help(&err) && !cli.json {
                let _ = Cli::command().write_help(&mut io::stderr());
            }
            ExitCode::from(ui::error::exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_tracing(config.log.debug);
    for warning in &warnings {
        warn!("{}", warning);
    }
    debug!(?config, "effective configuration");

    let mut source: Box<dyn LineSource> = match cli.input_file() {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let mode = ReadMode::from_env(config.grace_period());
            if let ReadMode::Deferred { grace } = mode {
                eprintln!(
                    "Detected MinGW; waiting up to {} ms to receive stdin from the pipe.\n",
                    grace.as_millis()
                );
            }
            Box::new(StdinSource::new(mode))
        }
    };

    let report = TreePipeline::from_config(&config).run_source(source.as_mut())?;

    let writer = create_writer(cli.output_format(), config.render_options());
    let mut out = BufWriter::new(io::stdout().lock());
    match writer.write(&report, &mut out).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(|e| TreeError::Io(e).into()),
    }
}

/// Diagnostics go to stderr so stdout carries only the tree
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}
