use crate::model::types::*;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A reflection document holds either one class-like element or a list of them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReflectionDocument {
    Many(Vec<ClassLike>),
    One(Box<ClassLike>),
}

impl ReflectionDocument {
    fn into_classes(self) -> Vec<ClassLike> {
        match self {
            ReflectionDocument::Many(classes) => classes,
            ReflectionDocument::One(class) => vec![*class],
        }
    }
}

/// Parse reflection JSON into class-like elements, preserving document order
pub fn load_classes(json: &str) -> Result<Vec<ClassLike>> {
    let document: ReflectionDocument = serde_json::from_str(json)
        .map_err(|e| anyhow::anyhow!("Failed to parse reflection JSON: {}", e))?;
    let classes = document.into_classes();
    debug!(count = classes.len(), "loaded class-like elements");
    Ok(classes)
}

/// Read a reflection document from `path`, or from stdin when `path` is `-`
pub fn load_classes_from_path(path: &Path) -> Result<Vec<ClassLike>> {
    let json = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read reflection JSON from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read reflection file {}", path.display()))?
    };

    load_classes(&json).with_context(|| format!("Invalid reflection document {}", path.display()))
}
