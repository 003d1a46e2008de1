use std::{fs, path::Path};

use anyhow::Context;
use chrono::{DateTime, Utc};
use dough_core::{DoughInput, DoughResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A named recipe as written by `--save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub input: DoughInput,
    pub result: DoughResult,
}

impl SavedRecipe {
    pub fn new(name: impl Into<String>, input: DoughInput, result: DoughResult) -> Self {
        Self {
            name: name.into(),
            created_at: Utc::now(),
            input,
            result,
        }
    }
}

pub fn load(path: &Path) -> anyhow::Result<SavedRecipe> {
    let txt = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe: {}", path.display()))?;
    let recipe: SavedRecipe = serde_json::from_str(&txt)
        .with_context(|| format!("Invalid recipe JSON: {}", path.display()))?;
    info!(name = %recipe.name, path = %path.display(), "loaded recipe");
    Ok(recipe)
}

pub fn save(path: &Path, recipe: &SavedRecipe) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(recipe)?;
    fs::write(path, json).with_context(|| format!("Failed to save recipe: {}", path.display()))?;
    info!(name = %recipe.name, path = %path.display(), "saved recipe");
    Ok(())
}
