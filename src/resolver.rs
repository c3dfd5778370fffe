//! Path resolution for recipe stubs and targets.
//! Resolves relative-vs-absolute paths against a configured root, supports
//! collaborator-injected provider closures, and normalizes separators purely
//! lexically (no filesystem traversal, no symlink awareness).

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// A collaborator-injected source of a path, e.g. a framework helper the CLI
/// layer resolves to a location at invocation time.
pub type PathProvider = Box<dyn Fn() -> PathBuf>;

/// A root-path provider invoked with the relative recipe path. Its result is
/// returned directly, bypassing concatenation.
pub type RootProvider = Box<dyn Fn(&str) -> PathBuf>;

/// A stub or target location declared by a recipe.
pub enum PathSpec {
    Literal(String),
    Provider(PathProvider),
}

impl PathSpec {
    pub fn provider(f: impl Fn() -> PathBuf + 'static) -> Self {
        Self::Provider(Box::new(f))
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        Self::Literal(path.to_string())
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        Self::Literal(path)
    }
}

impl fmt::Debug for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// The root path a relative recipe path is resolved against.
pub enum RootSpec {
    /// Use the resolver's configured default root.
    Default,
    Literal(String),
    Provider(RootProvider),
}

impl RootSpec {
    pub fn provider(f: impl Fn(&str) -> PathBuf + 'static) -> Self {
        Self::Provider(Box::new(f))
    }
}

impl fmt::Debug for RootSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Resolves recipe paths to absolute locations.
#[derive(Debug, Clone)]
pub struct Resolver {
    project_root: PathBuf,
    default_root: PathBuf,
}

impl Resolver {
    /// Creates a resolver rooted at the given project directory. The default
    /// root for relative recipe paths is the project root itself unless
    /// overridden with [`Resolver::with_default_root`].
    pub fn new<P: AsRef<Path>>(project_root: P) -> Self {
        let project_root = normalize(project_root.as_ref());
        Self {
            default_root: project_root.clone(),
            project_root,
        }
    }

    /// Configures a dedicated root (e.g. an "app" directory) used when a
    /// recipe declares no explicit root path.
    pub fn with_default_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.default_root = normalize(root.as_ref());
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolves a recipe path against its root specification.
    ///
    /// Absolute paths pass through unchanged (normalized). Provider closures
    /// are invoked and their result returned directly. A relative path is
    /// joined onto the root, which must itself be absolute.
    ///
    /// # Errors
    /// * `Error::Config` if neither the path nor its root resolves to an
    ///   absolute location
    pub fn resolve(&self, path: &PathSpec, root: &RootSpec) -> Result<PathBuf> {
        let path = match path {
            PathSpec::Provider(provider) => return Ok(normalize(&provider())),
            PathSpec::Literal(path) => path,
        };

        if is_absolute(path) {
            return Ok(normalize(Path::new(path)));
        }

        match root {
            RootSpec::Provider(provider) => Ok(normalize(&provider(path))),
            RootSpec::Default => Ok(normalize(&self.default_root.join(canonical(path)))),
            RootSpec::Literal(root) if is_absolute(root) => {
                Ok(normalize(&Path::new(&canonical(root)).join(canonical(path))))
            }
            RootSpec::Literal(root) => Err(Error::Config(format!(
                "the recipe path must be absolute or the root path must be callable or an absolute path (path: {}) (root: {})",
                path, root
            ))),
        }
    }
}

/// An absolute path starts with a platform separator (or a drive prefix on
/// Windows, which `Path::is_absolute` covers).
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || path.starts_with('\\') || Path::new(path).is_absolute()
}

/// Canonicalizes all `/` and `\` separators to the platform separator.
pub fn canonical(path: &str) -> String {
    path.replace(['/', '\\'], &MAIN_SEPARATOR.to_string())
}

/// Lexically normalizes a path: separators are canonicalized, `.` segments
/// are dropped and `..` segments pop the previously resolved segment.
pub fn normalize<P: AsRef<Path>>(path: P) -> PathBuf {
    let canonical = canonical(&path.as_ref().to_string_lossy());
    let mut resolved = PathBuf::new();

    for component in Path::new(&canonical).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                // nothing left to pop above the root or the prefix
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => resolved.push(".."),
            },
            other => resolved.push(other),
        }
    }

    resolved
}
