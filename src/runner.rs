//! Batch execution of recipes.
//! Processes an ordered recipe set strictly sequentially, collecting one
//! outcome per recipe. An existing target is a recoverable skip; any other
//! failure aborts the remaining queue and rolls back the files this run
//! already created.

use crate::error::{Error, Result};
use crate::recipe::{NameInput, Recipe, RunFlags};
use crate::resolver::Resolver;
use crate::stub::Generated;
use indexmap::IndexMap;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// The per-recipe result reported back to the caller. Console rendering is
/// the collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file was created at the given path.
    Created { scope: String, path: PathBuf },
    /// Dry run: the file would have been created at the given path.
    WouldCreate { scope: String, path: PathBuf },
    /// The target already existed and the recipe was skipped.
    SkippedExisting { scope: String, path: PathBuf },
}

/// Runs an ordered set of recipes for one invocation.
#[derive(Debug)]
pub struct Runner<'a> {
    resolver: &'a Resolver,
}

impl<'a> Runner<'a> {
    pub fn new(resolver: &'a Resolver) -> Self {
        Self { resolver }
    }

    /// Processes the recipes in declaration order.
    ///
    /// Recoverable errors (existing targets) are recorded as skips and the
    /// run continues. A fatal error triggers a best-effort rollback of every
    /// file this run created, then propagates; recipes after the failing one
    /// are never attempted.
    pub fn run(
        &self,
        recipes: &IndexMap<String, Recipe>,
        name: &NameInput,
        flags: RunFlags,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(recipes.len());
        let mut created: Vec<PathBuf> = Vec::new();

        for (key, recipe) in recipes {
            let scope = if recipe.scope().is_empty() {
                key.clone()
            } else {
                recipe.scope().to_string()
            };

            match recipe.run(name, self.resolver, flags) {
                Ok(Generated::Written(path)) => {
                    created.push(path.clone());
                    outcomes.push(Outcome::Created { scope, path });
                }
                Ok(Generated::DryRun(path)) => {
                    outcomes.push(Outcome::WouldCreate { scope, path });
                }
                Err(err) if err.is_recoverable() => {
                    warn!("Skipping '{}': {}", scope, err);
                    let path = match err {
                        Error::TargetExists(path) => PathBuf::from(path),
                        _ => unreachable!("only TargetExists is recoverable"),
                    };
                    outcomes.push(Outcome::SkippedExisting { scope, path });
                }
                Err(err) => {
                    roll_back(&created);
                    return Err(err);
                }
            }
        }

        Ok(outcomes)
    }
}

/// Deletes the files created so far. Individual deletion failures are
/// reported and do not stop the rollback of the remaining files.
fn roll_back(created: &[PathBuf]) {
    for path in created {
        if !path.is_file() {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => debug!("Rolled back {}", path.display()),
            Err(err) => warn!("Rollback could not delete {}: {}", path.display(), err),
        }
    }
}
