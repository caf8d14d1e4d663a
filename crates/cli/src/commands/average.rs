//! Moving average command.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::formatters::{OutputFormat, render_structured};

#[derive(Debug, Serialize)]
struct AverageOutput<'a> {
    window: usize,
    values: &'a [f64],
    averages: Vec<f64>,
}

pub fn run(values: &[f64], window: usize, format: OutputFormat) -> Result<()> {
    let averages = devkit_utils::timed("moving average", || {
        devkit_utils::moving_average(values, window)
    })
    .with_context(|| format!("Cannot compute moving average with window {}", window))?;

    let output = match format {
        OutputFormat::Table => format!("{:?}", averages),
        _ => render_structured(
            &AverageOutput {
                window,
                values,
                averages,
            },
            format,
        )?,
    };
    println!("{}", output);
    Ok(())
}
