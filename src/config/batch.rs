//! JSON batch files.
//!
//! Two layouts are accepted:
//!
//! ```json
//! [{ "title": "Home" }, { "title": "About", "paletteName": "ocean" }]
//! ```
//!
//! ```json
//! {
//!   "defaults": { "paletteName": "forest", "density": 18 },
//!   "images": [{ "title": "Home" }, { "title": "About", "density": 6 }]
//! }
//! ```
//!
//! With the second form, each `defaults` key applies to every entry that does not set it.

use std::path::Path;

use serde_json::{Map, Value};

use crate::{
    config::model::ImageConfig,
    foundation::error::{BrushworkError, BrushworkResult},
};

/// Read and parse a batch file.
pub fn load_batch(path: &Path) -> BrushworkResult<Vec<ImageConfig>> {
    let text = std::fs::read_to_string(path).map_err(|e| BrushworkError::io(path, e))?;
    let configs = parse_batch(&text)?;
    tracing::debug!(path = %path.display(), entries = configs.len(), "loaded batch");
    Ok(configs)
}

pub fn parse_batch(json: &str) -> BrushworkResult<Vec<ImageConfig>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| BrushworkError::serde(format!("batch file is not valid json: {e}")))?;
    parse_batch_value(value)
}

pub fn parse_batch_value(value: Value) -> BrushworkResult<Vec<ImageConfig>> {
    let (defaults, entries) = match value {
        Value::Array(entries) => (Map::new(), entries),
        Value::Object(mut obj) => {
            let defaults = match obj.remove("defaults") {
                None | Some(Value::Null) => Map::new(),
                Some(Value::Object(d)) => d,
                Some(_) => {
                    return Err(BrushworkError::serde("batch 'defaults' must be an object"));
                }
            };
            let entries = match obj.remove("images") {
                Some(Value::Array(entries)) => entries,
                Some(_) => return Err(BrushworkError::serde("batch 'images' must be an array")),
                None => return Err(BrushworkError::serde("batch object is missing 'images'")),
            };
            if let Some(key) = obj.keys().next() {
                return Err(BrushworkError::serde(format!(
                    "unknown batch key '{key}' (expected 'defaults' and 'images')"
                )));
            }
            (defaults, entries)
        }
        _ => {
            return Err(BrushworkError::serde(
                "batch must be an array of images or an object with 'images'",
            ));
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let Value::Object(mut fields) = entry else {
                return Err(BrushworkError::config(index, "entry must be a json object"));
            };
            for (key, value) in &defaults {
                if !fields.contains_key(key) && !has_alias(&fields, key) {
                    fields.insert(key.clone(), value.clone());
                }
            }
            serde_json::from_value(Value::Object(fields))
                .map_err(|e| BrushworkError::config(index, e.to_string()))
        })
        .collect()
}

/// `paletteName` and `palette` name the same field; an entry setting either one overrides a
/// default given under the other.
fn has_alias(fields: &Map<String, Value>, key: &str) -> bool {
    match key {
        "paletteName" => fields.contains_key("palette"),
        "palette" => fields.contains_key("paletteName"),
        _ => false,
    }
}

/// Place every relative `outputPath` under `dir`.
pub fn rebase_outputs(configs: &mut [ImageConfig], dir: &Path) {
    for config in configs {
        if config.output_path.is_relative() {
            config.output_path = dir.join(&config.output_path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/batch.rs"]
mod tests;
