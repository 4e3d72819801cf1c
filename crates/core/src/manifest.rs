//! Loading the script table from a `package.json` manifest.
//!
//! Only the `scripts` field is read. Entries with invalid names or non-string
//! commands are dropped without surfacing an error; a manifest with nothing
//! left to run is an error.

use std::fs::File;
use std::io::BufReader;

use itertools::{Either, Itertools};
use log::{debug, info};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::script_definitions::{is_valid_script_name, Script};

fn get_reader(path: &str) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(reader) => Ok(BufReader::new(reader)),
        Err(e) => Err(Error::manifest_io(path.to_string(), e)),
    }
}

/// Mirrors JavaScript truthiness, which decides whether `scripts` is "present".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Extracts the valid scripts from a parsed manifest document.
///
/// Order follows the manifest's `scripts` object.
///
/// # Errors
///
/// Returns an error if:
/// - The document has no truthy `scripts` field
/// - `scripts` is not an object
/// - No entry survives name and command validation
pub fn extract_scripts(document: &Value, path: &str) -> Result<Vec<Script>> {
    let scripts_field = document.get("scripts").filter(|value| is_truthy(value));
    let Some(scripts_field) = scripts_field else {
        return Err(Error::missing_scripts(path.to_string()));
    };

    let Value::Object(table) = scripts_field else {
        return Err(Error::invalid_scripts_format(path.to_string()));
    };

    let (scripts, dropped): (Vec<Script>, Vec<&String>) =
        table.iter().partition_map(|(name, command)| match command {
            Value::String(command) if is_valid_script_name(name) => {
                Either::Left(Script::new(name.clone(), command.clone()))
            }
            _ => Either::Right(name),
        });

    if !dropped.is_empty() {
        debug!(
            "Dropped {} invalid script entries: {}",
            dropped.len(),
            dropped.iter().join(", ")
        );
    }

    if scripts.is_empty() {
        return Err(Error::no_scripts(path.to_string()));
    }

    Ok(scripts)
}

/// Reads and validates the scripts in the manifest at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or does not
/// contain at least one runnable script (see [`extract_scripts`]).
pub fn load_scripts(path: &str) -> Result<Vec<Script>> {
    let reader = get_reader(path)?;

    let document: Value = serde_json::from_reader(reader)
        .map_err(|e| Error::manifest_json(path.to_string(), e))?;

    let scripts = extract_scripts(&document, path)?;
    info!("Loaded {} scripts from `{}`", scripts.len(), path);

    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(scripts: &[Script]) -> Vec<&str> {
        scripts.iter().map(|script| script.name.as_str()).collect()
    }

    #[test]
    fn test_extract_keeps_manifest_order() {
        let document: Value =
            serde_json::from_str(r#"{"scripts":{"test":"ava","build":"tsc","lint":"eslint"}}"#)
                .unwrap();

        let scripts = extract_scripts(&document, "package.json").unwrap();
        assert_eq!(names(&scripts), vec!["test", "build", "lint"]);
        assert_eq!(scripts[1], Script::new("build", "tsc"));
    }

    #[test]
    fn test_extract_duplicate_keys() {
        let document: Value =
            serde_json::from_str(r#"{"scripts":{"a":"1","b":"2","a":"3"}}"#).unwrap();

        let scripts = extract_scripts(&document, "package.json").unwrap();
        assert_eq!(scripts, vec![Script::new("a", "3"), Script::new("b", "2")]);
    }

    #[test]
    fn test_extract_drops_invalid_entries() {
        let document = json!({
            "scripts": {
                "build": "tsc",
                "has space": "echo",
                "count": 3,
                "flag": true,
                "nested": {"a": "b"},
                "test:unit": "ava"
            }
        });

        let scripts = extract_scripts(&document, "package.json").unwrap();
        assert_eq!(names(&scripts), vec!["build", "test:unit"]);
    }

    #[test]
    fn test_extract_missing_scripts() {
        for document in [
            json!({"name": "pkg"}),
            json!({"scripts": null}),
            json!({"scripts": false}),
            json!({"scripts": 0}),
            json!({"scripts": ""}),
            json!([1, 2]),
            json!("scripts"),
            Value::Null,
        ] {
            let result = extract_scripts(&document, "package.json");
            assert!(
                matches!(result, Err(Error::MissingScripts { .. })),
                "{document} should have no scripts"
            );
        }
    }

    #[test]
    fn test_extract_invalid_scripts_format() {
        for document in [
            json!({"scripts": ["build"]}),
            json!({"scripts": "tsc"}),
            json!({"scripts": 1}),
            json!({"scripts": true}),
        ] {
            let result = extract_scripts(&document, "package.json");
            assert!(
                matches!(result, Err(Error::InvalidScriptsFormat { .. })),
                "{document} should have an invalid format"
            );
        }
    }

    #[test]
    fn test_extract_no_valid_scripts() {
        for document in [json!({"scripts": {}}), json!({"scripts": {"bad name": "x", "ok": 1}})] {
            let result = extract_scripts(&document, "package.json");
            assert!(matches!(result, Err(Error::NoScripts { .. })));
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(!is_truthy(&json!("")));
    }
}
