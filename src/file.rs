//! Filesystem handle used by the generation pipeline.
//! A [`FileHandle`] splits a path into folder, base name and extension and
//! provides the read/write/substitute operations recipes are built on.

use crate::error::{Error, Result};
use crate::resolver::{canonical, is_absolute, normalize};
use crate::transform::NameTransform;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// A filesystem path split into its folder, base name and extension.
///
/// The folder is always stored as an absolute, separator-normalized path;
/// relative folders are resolved against the given root at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    folder: PathBuf,
    name: String,
    extension: String,
}

impl FileHandle {
    pub fn new<P, R>(folder: P, name: &str, extension: &str, root: R) -> Self
    where
        P: AsRef<Path>,
        R: AsRef<Path>,
    {
        let folder = folder.as_ref().to_string_lossy().to_string();
        let folder = if is_absolute(&folder) {
            normalize(&folder)
        } else {
            normalize(root.as_ref().join(canonical(&folder)))
        };

        Self {
            folder,
            name: canonical(name).trim_matches(MAIN_SEPARATOR).to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Parses a combined path string into folder, base name and extension.
    pub fn from_path<P, R>(path: P, root: R) -> Self
    where
        P: AsRef<Path>,
        R: AsRef<Path>,
    {
        let path = PathBuf::from(canonical(&path.as_ref().to_string_lossy()));
        let folder = path.parent().unwrap_or_else(|| Path::new(""));
        let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        Self::new(folder, name, extension, root)
    }

    //--- Accessors ---------------------------------------------------------------------------------------------------

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The base name with its extension, e.g. `view.blade.php`.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    pub fn full_path(&self) -> PathBuf {
        self.folder.join(self.file_name())
    }

    //--- File operations ---------------------------------------------------------------------------------------------

    pub fn exists(&self) -> bool {
        self.full_path().is_file()
    }

    pub fn folder_exists(&self) -> bool {
        self.folder.is_dir()
    }

    /// Recursively creates the folder if missing; no-op if present.
    pub fn create_folder(&self) -> Result<()> {
        if !self.folder_exists() {
            debug!("Creating folder {}", self.folder.display());
            fs::create_dir_all(&self.folder)?;
        }
        Ok(())
    }

    /// Writes the given contents, creating the folder tree as needed and
    /// overwriting any existing file.
    pub fn set_contents(&self, contents: &str) -> Result<()> {
        self.create_folder()?;
        fs::write(self.full_path(), contents)?;
        Ok(())
    }

    pub fn get_contents(&self) -> Result<String> {
        if !self.exists() {
            return Err(Error::NotFound(self.full_path().display().to_string()));
        }
        Ok(fs::read_to_string(self.full_path())?)
    }

    /// Applies every `search -> replace` pair in map order to the file
    /// contents and writes the result back.
    ///
    /// Substitution is sequential: later pairs see the result of earlier
    /// ones. Replacement is literal substring matching, not regex.
    ///
    /// # Errors
    /// * `Error::NotFound` if the file does not exist
    pub fn replace_in_file(&self, replace: &IndexMap<String, String>) -> Result<()> {
        let mut contents = self.get_contents()?;

        for (search, replace_with) in replace {
            contents = contents.replace(search, replace_with);
        }

        self.set_contents(&contents)
    }

    /// Removes the file if it exists; no-op if absent.
    pub fn delete(&self) -> Result<()> {
        if self.exists() {
            fs::remove_file(self.full_path())?;
        }
        Ok(())
    }

    //--- Mutators ----------------------------------------------------------------------------------------------------

    /// Appends a normalized relative segment to the folder; no-op if empty.
    pub fn sub_folder(&mut self, path: &str) -> &mut Self {
        let segment = canonical(path);
        let segment = segment.trim_matches(MAIN_SEPARATOR);

        if !segment.is_empty() {
            self.folder = normalize(self.folder.join(segment));
        }
        self
    }

    pub fn set_filename(&mut self, name: &str) -> &mut Self {
        self.name = name.to_string();
        self
    }

    /// Sets the extension, trimming any leading dot. If the base name already
    /// ends with (part of) the new extension, the overlap is dropped from the
    /// name so the extension never appears twice in the full path.
    pub fn set_extension(&mut self, extension: &str) -> &mut Self {
        let extension = extension.trim_start_matches('.');
        self.name = strip_duplicate_extension(&self.name, extension);
        self.extension = extension.to_string();
        self
    }

    /// Applies a name transform to the base name; no-op if none is given.
    pub fn transform_name(&mut self, transform: Option<&NameTransform>) -> &mut Self {
        if let Some(transform) = transform {
            self.name = transform.apply(&self.name);
        }
        self
    }
}

impl std::fmt::Display for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_path().display())
    }
}

/// Drops trailing dot-segments of `name` that duplicate leading segments of
/// `extension`, so `MyView.blade` + `blade.php` composes to `MyView.blade.php`
/// rather than `MyView.blade.blade.php`. At least one name segment is kept.
fn strip_duplicate_extension(name: &str, extension: &str) -> String {
    if extension.is_empty() || name.is_empty() {
        return name.to_string();
    }

    let extension_parts: Vec<&str> = extension.split('.').collect();
    let mut name_parts: Vec<&str> = name.split('.').collect();
    let max_overlap = extension_parts.len().min(name_parts.len().saturating_sub(1));

    for overlap in (1..=max_overlap).rev() {
        if name_parts[name_parts.len() - overlap..] == extension_parts[..overlap] {
            name_parts.truncate(name_parts.len() - overlap);
            break;
        }
    }

    name_parts.join(".")
}
