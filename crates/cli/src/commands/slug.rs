//! Slug command.

use anyhow::Result;
use serde::Serialize;

use crate::formatters::{OutputFormat, render_structured};

#[derive(Debug, Serialize)]
struct SlugOutput {
    input: String,
    slug: String,
}

pub fn run(words: &[String], format: OutputFormat) -> Result<()> {
    let input = words.join(" ");
    let slug = devkit_utils::timed("slugify", || devkit_utils::slugify(&input));
    tracing::debug!(%slug, "Slug computed");

    let output = match format {
        OutputFormat::Table => slug,
        _ => render_structured(&SlugOutput { input, slug }, format)?,
    };
    println!("{}", output);
    Ok(())
}
