use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::AppError;
use crate::model::SampleClass;
use crate::pipeline::stage1_generate::RandomSource;
use crate::pipeline::stage3_report::build_view;
use crate::report::text::{render_report_text, render_samples_text};
use crate::report::{SampleSummary, format_score};
use crate::session::Session;

const HELP: &str = "\
Commands:
  <number>   move the threshold (snapped to the slider range)
  reset      regenerate both distributions with random parameters
  samples    show sample statistics
  help       show this message
  quit       exit
";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Threshold(f64),
    Reset,
    Samples,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let cmd = match line.to_ascii_lowercase().as_str() {
        "r" | "reset" => Command::Reset,
        "s" | "samples" => Command::Samples,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => match other.parse::<f64>() {
            Ok(v) if v.is_finite() => Command::Threshold(v),
            _ => return Err(format!("unrecognized input: {line}")),
        },
    };
    Ok(Some(cmd))
}

/// Runs the read-eval-render loop until `quit` or end of input. Every
/// accepted command triggers one full recomputation pass over the session.
pub fn run_interactive<S, R, W>(
    session: &mut Session<S>,
    input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    let slider = session.config().slider;
    let mut threshold = slider.initial_value();
    render(session, threshold, out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => out.write_all(HELP.as_bytes())?,
            Ok(Some(Command::Samples)) => {
                let (neg, pos) = session.current_samples()?;
                let text = render_samples_text(
                    &SampleSummary::from_sample(SampleClass::NotAtRisk, neg),
                    &SampleSummary::from_sample(SampleClass::AtRisk, pos),
                );
                out.write_all(text.as_bytes())?;
            }
            Ok(Some(Command::Reset)) => {
                session.reset_samples()?;
                render(session, threshold, out)?;
            }
            Ok(Some(Command::Threshold(v))) => {
                let snapped = slider.snap(v);
                if snapped != v {
                    writeln!(
                        out,
                        "threshold {} adjusted to {}",
                        format_score(v),
                        format_score(snapped)
                    )?;
                }
                threshold = snapped;
                render(session, threshold, out)?;
            }
            Err(msg) => {
                warn!("{msg}");
                writeln!(out, "{msg} (type 'help')")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn render<S: RandomSource, W: Write>(
    session: &mut Session<S>,
    threshold: f64,
    out: &mut W,
) -> Result<(), AppError> {
    let view = build_view(session, threshold)?;
    out.write_all(render_report_text(&view).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/interactive.rs"]
mod tests;
