//! Stub template engine.
//! Copies a stub file to its resolved target, inferring the target extension
//! from the stub's compound file name and enforcing the dry-run, overwrite
//! and backup policy before any substitution happens.

use crate::error::{Error, Result};
use crate::file::FileHandle;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Authoring suffix stripped from stub file names before extension inference.
pub const STUB_SUFFIX: &str = ".stub";

/// Suffix appended to an existing target when it is backed up.
pub const BACKUP_SUFFIX: &str = ".backup";

/// The result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    /// The target was written to disk.
    Written(PathBuf),
    /// Dry run: the path that would have been written.
    DryRun(PathBuf),
}

impl Generated {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::DryRun(path) => path,
        }
    }
}

/// Flags controlling a single generation call.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    pub dry_run: bool,
    pub overwrite: bool,
    pub backup: bool,
}

/// A stub file paired with its resolved target.
#[derive(Debug)]
pub struct Stub {
    source: FileHandle,
    target: FileHandle,
}

impl Stub {
    /// Pairs a stub with its target, inferring the target extension from the
    /// stub file name when the target declares none.
    ///
    /// # Errors
    /// * `Error::Config` if the stub file does not exist (validation-time
    ///   check, fatal to the run)
    pub fn new(source: FileHandle, mut target: FileHandle) -> Result<Self> {
        if !source.exists() {
            return Err(Error::Config(format!(
                "stub file {} could not be found",
                source.full_path().display()
            )));
        }

        if target.extension().is_empty() {
            let guessed = guess_extension(&source.file_name());
            if !guessed.is_empty() {
                target.set_extension(&guessed);
            }
        }

        Ok(Self { source, target })
    }

    pub fn source(&self) -> &FileHandle {
        &self.source
    }

    pub fn target(&self) -> &FileHandle {
        &self.target
    }

    /// Copies the stub contents to the target and applies the replacements
    /// via sequential substitution.
    ///
    /// A dry run performs no filesystem writes and returns the would-be
    /// target path. When the target already exists, `backup` renames it to a
    /// `.backup` sibling before writing; otherwise `overwrite` must be set or
    /// the call fails with the recoverable `Error::TargetExists`.
    pub fn generate(
        &self,
        replace: &IndexMap<String, String>,
        options: GenerateOptions,
    ) -> Result<Generated> {
        let target_path = self.target.full_path();

        if options.dry_run {
            debug!("Dry run, would generate {}", target_path.display());
            return Ok(Generated::DryRun(target_path));
        }

        if self.target.exists() {
            if options.backup {
                self.back_up()?;
            } else if !options.overwrite {
                return Err(Error::TargetExists(target_path.display().to_string()));
            }
        }

        self.target.set_contents(&self.source.get_contents()?)?;
        self.target.replace_in_file(replace)?;

        debug!("Generated {}", target_path.display());
        Ok(Generated::Written(target_path))
    }

    /// Renames the existing target to its `.backup` sibling, silently
    /// replacing any prior backup.
    fn back_up(&self) -> Result<PathBuf> {
        let original = self.target.full_path();
        let backup = PathBuf::from(format!("{}{}", original.display(), BACKUP_SUFFIX));

        if backup.is_file() {
            fs::remove_file(&backup)?;
        }
        fs::rename(&original, &backup)?;

        debug!("Backed up {} to {}", original.display(), backup.display());
        Ok(backup)
    }
}

/// Infers a target extension from a stub file name: the trailing `.stub`
/// suffix is removed and everything after the first remaining `.` is the
/// extension. A name without dots infers no extension.
pub fn guess_extension(stub_file_name: &str) -> String {
    let base = stub_file_name
        .strip_suffix(STUB_SUFFIX)
        .unwrap_or(stub_file_name);

    match base.split_once('.') {
        Some((_, extension)) => extension.to_string(),
        None => String::new(),
    }
}

/// The stub's own base name with the `.stub` suffix and any inferable
/// extension removed; used as the target name when the invocation supplies
/// none.
pub fn stub_base_name(stub_file_name: &str) -> String {
    let base = stub_file_name
        .strip_suffix(STUB_SUFFIX)
        .unwrap_or(stub_file_name);

    match base.split_once('.') {
        Some((name, _)) => name.to_string(),
        None => base.to_string(),
    }
}
