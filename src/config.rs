//! Declarative recipe files.
//! This module loads and parses recipe declarations from JSON or YAML files,
//! preserving declaration order, and converts them into [`Recipe`] values.

use crate::error::{Error, Result};
use crate::recipe::Recipe;
use crate::resolver::RootSpec;
use crate::transform::NameTransform;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Supported recipe file names
pub const RECIPE_FILES: [&str; 3] = ["stubsmith.json", "stubsmith.yml", "stubsmith.yaml"];

/// One recipe declaration as it appears in a recipe file. Only `stub` and
/// `target` are required; provider closures are not expressible here and must
/// be injected through the builder API instead.
#[derive(Debug, Deserialize)]
pub struct RecipeConfig {
    pub stub: String,
    pub target: String,
    #[serde(default)]
    pub root_path: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub root_namespace: Option<String>,
    #[serde(default)]
    pub replace: IndexMap<String, String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub file_name_transform: Option<String>,
    #[serde(default)]
    pub relative_path_transform: Option<String>,
    #[serde(default)]
    pub overwrite: bool,
    #[serde(default)]
    pub backup: bool,
}

/// Loads recipe declarations from a directory, trying multiple file names.
///
/// # Arguments
/// * `recipe_dir` - Directory containing the recipe file
/// * `recipe_files` - List of recipe file names to try
///
/// # Returns
/// * `Result<String>` - Contents of the first found recipe file
///
/// # Errors
/// * `Error::Config` if no recipe file exists
pub fn load_recipes<P: AsRef<Path>>(recipe_dir: P, recipe_files: &[&str]) -> Result<String> {
    for file in recipe_files {
        let recipe_path = recipe_dir.as_ref().join(file);
        if recipe_path.exists() {
            debug!("Loading recipes from {}", recipe_path.display());
            return Ok(std::fs::read_to_string(&recipe_path)?);
        }
    }

    Err(Error::Config(format!(
        "no recipe file found (tried: {})",
        recipe_files.join(", ")
    )))
}

/// Parses recipe file contents into an ordered scope -> declaration map.
/// JSON is attempted first, YAML as fallback.
///
/// # Errors
/// * `Error::Config` if the contents match neither format or a declaration
///   is missing required keys
pub fn parse_recipes(content: &str) -> Result<IndexMap<String, RecipeConfig>> {
    let parsed: IndexMap<String, RecipeConfig> = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::Config(format!("invalid recipe file: {}", e)))?,
    };

    Ok(parsed)
}

/// Converts parsed declarations into runnable recipes, filling in the scope
/// label from the map key when a declaration carries none.
pub fn into_recipes(configs: IndexMap<String, RecipeConfig>) -> Result<IndexMap<String, Recipe>> {
    let mut recipes = IndexMap::new();

    for (key, config) in configs {
        let scope = config.scope.clone().unwrap_or_else(|| key.clone());
        let recipe = Recipe::try_from(config)?.with_scope(&scope);
        recipes.insert(key, recipe);
    }

    Ok(recipes)
}

impl TryFrom<RecipeConfig> for Recipe {
    type Error = Error;

    fn try_from(config: RecipeConfig) -> Result<Recipe> {
        if config.stub.is_empty() {
            return Err(Error::Config(
                "invalid recipe: missing path to stub file".to_string(),
            ));
        }
        if config.target.is_empty() {
            return Err(Error::Config(
                "invalid recipe: missing target folder".to_string(),
            ));
        }

        let mut recipe = Recipe::new(config.stub, config.target)
            .with_replace(config.replace)
            .with_overwrite(config.overwrite)
            .with_backup(config.backup);

        if let Some(root_path) = config.root_path {
            recipe = recipe.with_root_path(RootSpec::Literal(root_path));
        }
        if let Some(extension) = &config.extension {
            recipe = recipe.with_extension(extension);
        }
        if let Some(root_namespace) = &config.root_namespace {
            recipe = recipe.with_root_namespace(root_namespace);
        }
        if let Some(scope) = &config.scope {
            recipe = recipe.with_scope(scope);
        }
        // transform names are validated here, at recipe-build time
        if let Some(name) = &config.file_name_transform {
            recipe = recipe.with_file_name_transform(NameTransform::from_name(name)?);
        }
        if let Some(name) = &config.relative_path_transform {
            recipe = recipe.with_relative_path_transform(NameTransform::from_name(name)?);
        }

        Ok(recipe)
    }
}
