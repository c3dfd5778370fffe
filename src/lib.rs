//! Stubsmith is a stub-based file generator for project scaffolding.
//! Recipes bind a stub template to a target location, and one invocation
//! copies the stub to a computed path while substituting placeholder tokens
//! and deriving the target name and namespace from a single name argument.

/// Command-line interface module for the Stubsmith application
pub mod cli;

/// Declarative recipe files
/// Supports JSON and YAML formats (stubsmith.json, stubsmith.yml, stubsmith.yaml)
pub mod config;

/// Error types and handling for the Stubsmith application
pub mod error;

/// Filesystem handles: folder/name/extension triples with the
/// read/write/substitute operations the pipeline is built on
pub mod file;

/// Hierarchical namespace derivation from target path segments
pub mod namespace;

/// Recipe configuration and per-recipe generation orchestration
pub mod recipe;

/// Path resolution against configured roots and provider closures
pub mod resolver;

/// Batch execution with per-recipe outcomes and rollback on fatal errors
pub mod runner;

/// Stub template engine: extension inference, overwrite/backup policy,
/// copy-and-substitute
pub mod stub;

/// File-name and path-segment case transformations
pub mod transform;
