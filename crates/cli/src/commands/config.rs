//! Configuration inspection commands.

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use devkit_config::{ConfigLoader, SourceKind, SourceOutcome};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::CliError;
use crate::formatters::{OutputFormat, render_structured, render_table};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show every merged key and value
    Show {
        /// Also show which source supplied each value
        #[arg(long)]
        origins: bool,
    },

    /// Print a single value
    Get {
        /// Key to look up (exact match)
        key: String,

        /// Type to coerce the value to
        #[arg(short = 't', long = "type", value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// List configured sources and whether they were loaded
    Sources,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Bool,
    Float,
}

#[derive(Debug, Serialize)]
struct EntryOutput {
    key: String,
    value: String,
    source: String,
}

#[derive(Debug, Serialize)]
struct SourceOutput {
    source: String,
    option: Option<&'static str>,
    path: Option<String>,
    status: &'static str,
    keys: Option<usize>,
}

pub fn run(config: &ConfigLoader, command: &ConfigCommand, format: OutputFormat) -> Result<()> {
    let output = match command {
        ConfigCommand::Show { origins } => show(config, *origins, format)?,
        ConfigCommand::Get { key, kind } => get(config, key, *kind, format)?,
        ConfigCommand::Sources => sources(config, format)?,
    };
    println!("{}", output);
    Ok(())
}

fn show(config: &ConfigLoader, origins: bool, format: OutputFormat) -> Result<String> {
    if !origins {
        let dict = config.as_dict();
        return match format {
            OutputFormat::Table => Ok(render_table(
                &["KEY", "VALUE"],
                &dict.into_iter().map(|(k, v)| vec![k, v]).collect::<Vec<_>>(),
            )),
            _ => render_structured(&dict, format),
        };
    }

    let entries: Vec<EntryOutput> = config
        .as_dict()
        .into_iter()
        .map(|(key, value)| EntryOutput {
            source: config
                .origin(&key)
                .map(|kind| kind.to_string())
                .unwrap_or_default(),
            key,
            value,
        })
        .collect();

    match format {
        OutputFormat::Table => Ok(render_table(
            &["KEY", "VALUE", "SOURCE"],
            &entries
                .into_iter()
                .map(|e| vec![e.key, e.value, e.source])
                .collect::<Vec<_>>(),
        )),
        _ => render_structured(&entries, format),
    }
}

fn get(config: &ConfigLoader, key: &str, kind: ValueKind, format: OutputFormat) -> Result<String> {
    let value = match kind {
        ValueKind::String => config.get(key).map(serde_json::Value::from),
        ValueKind::Int => config.get_int(key)?.map(serde_json::Value::from),
        ValueKind::Bool => config.get_bool(key)?.map(serde_json::Value::from),
        ValueKind::Float => config.get_float(key)?.map(serde_json::Value::from),
    };
    let Some(value) = value else {
        return Err(CliError::KeyNotFound(key.to_string()).into());
    };

    match format {
        OutputFormat::Table => Ok(match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }),
        _ => {
            let mut object = BTreeMap::new();
            object.insert("key", serde_json::Value::from(key));
            object.insert("value", value);
            render_structured(&object, format)
        }
    }
}

fn sources(config: &ConfigLoader, format: OutputFormat) -> Result<String> {
    let rows: Vec<SourceOutput> = config
        .sources()
        .iter()
        .map(|report| {
            let (status, keys) = match report.outcome {
                SourceOutcome::Loaded { keys } => ("loaded", Some(keys)),
                SourceOutcome::Skipped => ("skipped", None),
            };
            SourceOutput {
                source: report.descriptor.kind.to_string(),
                option: match report.descriptor.kind {
                    SourceKind::Environment => None,
                    SourceKind::File(file_format) => Some(file_format.option_name()),
                },
                path: report
                    .descriptor
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string()),
                status,
                keys,
            }
        })
        .collect();

    match format {
        OutputFormat::Table => Ok(render_table(
            &["SOURCE", "PATH", "STATUS", "KEYS"],
            &rows
                .into_iter()
                .map(|row| {
                    vec![
                        row.source,
                        row.path.unwrap_or_else(|| "-".to_string()),
                        row.status.to_string(),
                        row.keys.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect::<Vec<_>>(),
        )),
        _ => render_structured(&rows, format),
    }
}
