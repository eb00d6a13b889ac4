// src/app.rs
use std::io::{self, Write};

use readability_infra::{FileTextSource, FixedSelector, PromptSelector};
use readability_ports::selection::FormulaSelector;
use readability_shared_kernel::Result;
use readability_usecase::AssessReadability;

use crate::{
    config::{Config, OutputFormat},
    presentation,
};

/// Runs one readability assessment against the console.
pub fn run(config: &Config) -> Result<()> {
    let source = FileTextSource::new();
    let selector = build_selector(config);
    let usecase = AssessReadability::new(&source, selector.as_ref()).with_policy(config.average);

    let mut out = io::stdout();
    let measured = usecase.measure(&config.plan)?;
    presentation::print_measurement(&mut out, &measured, config)?;

    let report = usecase.assess(&measured)?;
    log::info!("computed {} score(s), {} not computable", report.scores.len(), report.failures.len());
    presentation::print_report(&mut out, &measured, &report, config)?;

    match report.failures.first() {
        Some(failure) => Err(failure.error.clone().into()),
        None => Ok(()),
    }
}

fn build_selector(config: &Config) -> Box<dyn FormulaSelector> {
    if let Some(selection) = &config.selection {
        return Box::new(FixedSelector::new(selection.clone()));
    }
    // Keep structured stdout parseable.
    let prompt_out: Box<dyn Write> = match config.format {
        OutputFormat::Text => Box::new(io::stdout()),
        _ => Box::new(io::stderr()),
    };
    Box::new(PromptSelector::new(io::stdin().lock(), prompt_out))
}
