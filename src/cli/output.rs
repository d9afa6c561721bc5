//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexalignArgs, OutputFormat};
use crate::error::Result;
use crate::loader::BuildStep;
use crate::pos::PartOfSpeech;

/// Result structure for offset lookups.
#[derive(Debug, Serialize)]
pub struct LookupResults {
    pub from: String,
    pub to: String,
    pub pos: PartOfSpeech,
    pub identity: bool,
    pub hits: Vec<LookupHit>,
    pub duration_ms: u64,
}

/// One mapped offset. `target` is `None` when the target edition has no
/// equivalent sense.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LookupHit {
    pub source: u64,
    pub target: Option<u64>,
}

/// Result structure for build plans.
#[derive(Debug, Serialize)]
pub struct PlanResults {
    pub from: String,
    pub to: String,
    pub available: bool,
    pub steps: Vec<BuildStep>,
}

/// Result structure for data file verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataVerification {
    pub language: String,
    pub nouns: usize,
    pub verbs: usize,
    pub adjectives: usize,
    pub adverbs: usize,
    pub total: usize,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexalignArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexalignArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match value.get("hits").and_then(|h| h.as_array()) {
        Some(hits) => output_lookup_human(&value, hits),
        None => output_generic_human(&value),
    }
}

/// Output lookup hits in human format, one offset pair per line.
fn output_lookup_human(value: &serde_json::Value, hits: &[serde_json::Value]) -> Result<()> {
    let from = value.get("from").map(format_value).unwrap_or_default();
    let to = value.get("to").map(format_value).unwrap_or_default();
    println!("{from} => {to}");
    println!("─────────────");

    for hit in hits {
        let source = hit.get("source").and_then(|s| s.as_u64()).unwrap_or(0);
        match hit.get("target").and_then(|t| t.as_u64()) {
            Some(target) => println!("{source:08} -> {target:08}"),
            None => println!("{source:08} -> (none)"),
        }
    }

    if let Some(duration) = value.get("duration_ms").and_then(|d| d.as_u64()) {
        println!();
        println!("Lookup time: {duration}ms");
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexalignArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(obj) => match obj.get("step") {
            // build steps read better as their tag plus language
            Some(step) => match obj.get("language") {
                Some(language) => format!("{}({})", format_value(step), format_value(language)),
                None => format_value(step),
            },
            None => "[object]".to_string(),
        },
        serde_json::Value::Null => "null".to_string(),
    }
}
