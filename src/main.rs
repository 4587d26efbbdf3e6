use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use riskthreshold::config::SessionConfig;
use riskthreshold::error::AppError;
use riskthreshold::interactive::run_interactive;
use riskthreshold::logging::init_logging;
use riskthreshold::pipeline::stage3_report::{build_sweep, build_view, sweep_thresholds};
use riskthreshold::report::json::{render_report_json, render_sweep_json};
use riskthreshold::report::text::{render_report_text, render_sweep_text};
use riskthreshold::session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "riskthreshold",
    version,
    about = "Explore how a classification threshold trades false positives against false negatives"
)]
struct Cli {
    /// Seed for the random source (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON session config (distribution defaults, reset ranges, slider)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render both distributions and the metrics at one threshold
    Show {
        /// Decision threshold (default: the slider's initial value)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
        threshold: Option<f64>,

        /// Regenerate distributions with random parameters first
        #[arg(long)]
        reset: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Tabulate metrics across a range of thresholds
    Sweep {
        /// First threshold (default: slider minimum)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
        from: Option<f64>,

        /// Last threshold (default: slider maximum)
        #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
        to: Option<f64>,

        #[arg(long, default_value_t = 5.0, value_parser = parse_finite)]
        step: f64,

        #[arg(long)]
        reset: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Read thresholds and commands from stdin
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let slider = config.slider;
    let mut session = Session::with_config(rng, config)?;
    info!(seed = ?cli.seed, "session created");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Show {
            threshold,
            reset,
            format,
        } => {
            if reset {
                session.reset_samples()?;
            }
            let view = build_view(&mut session, threshold.unwrap_or(slider.initial_value()))?;
            let rendered = match format {
                Format::Text => render_report_text(&view),
                Format::Json => render_report_json(&view)? + "\n",
            };
            out.write_all(rendered.as_bytes())?;
        }
        Command::Sweep {
            from,
            to,
            step,
            reset,
            format,
        } => {
            if reset {
                session.reset_samples()?;
            }
            let thresholds =
                sweep_thresholds(from.unwrap_or(slider.min), to.unwrap_or(slider.max), step)?;
            let rows = build_sweep(&mut session, &thresholds)?;
            let rendered = match format {
                Format::Text => render_sweep_text(&rows),
                Format::Json => render_sweep_json(&rows)? + "\n",
            };
            out.write_all(rendered.as_bytes())?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            run_interactive(&mut session, stdin.lock(), &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
