// src/presentation.rs
use std::io::Write;

use readability_domain::TextCounts;
use readability_shared_kernel::Result;
use readability_usecase::{MeasuredText, ReadabilityReport};
use serde::Serialize;

use crate::config::{Config, OutputFormat};

/// Structured document emitted by the JSON/YAML formats.
#[derive(Serialize)]
struct StructuredOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(flatten)]
    report: &'a ReadabilityReport,
}

/// Prints the text and its counts ahead of the score prompt.
///
/// Structured formats print everything at once in [`print_report`].
pub fn print_measurement<W: Write>(out: &mut W, measured: &MeasuredText, config: &Config) -> Result<()> {
    if config.format != OutputFormat::Text {
        return Ok(());
    }
    if config.echo_text {
        writeln!(out, "The text is:")?;
        writeln!(out, "{}", measured.text)?;
        writeln!(out)?;
    }
    write_counts(out, &measured.counts)?;
    out.flush()?;
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &TextCounts) -> Result<()> {
    writeln!(out, "Words: {}", counts.words)?;
    writeln!(out, "Sentences: {}", counts.sentences)?;
    writeln!(out, "Characters: {}", counts.characters)?;
    writeln!(out, "Syllables: {}", counts.syllables)?;
    writeln!(out, "Polysyllables: {}", counts.polysyllables)?;
    Ok(())
}

pub fn print_report<W: Write>(
    out: &mut W,
    measured: &MeasuredText,
    report: &ReadabilityReport,
    config: &Config,
) -> Result<()> {
    let structured = StructuredOutput { text: config.echo_text.then_some(measured.text.as_str()), report };
    match config.format {
        OutputFormat::Text => print_text(out, report)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &structured)?;
            writeln!(out)?;
        }
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &structured)?,
    }
    out.flush()?;
    Ok(())
}

fn print_text<W: Write>(out: &mut W, report: &ReadabilityReport) -> Result<()> {
    writeln!(out)?;
    let mut lines: Vec<_> = report
        .scores
        .iter()
        .map(|score| (score.formula, format!("{}: {:.2} ({}).", score.name, score.score, score.age)))
        .chain(report.failures.iter().map(|failure| {
            (failure.formula, format!("{}: not computable ({}).", failure.name, failure.reason))
        }))
        .collect();
    lines.sort_by_key(|(formula, _)| *formula);
    for (_, line) in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    match report.average_age {
        Some(average) => writeln!(out, "This text should be understood in average by {average:.2} year olds.")?,
        None if report.failures.is_empty() => writeln!(out, "No score selected.")?,
        None => writeln!(out, "No score could be computed.")?,
    }
    Ok(())
}
