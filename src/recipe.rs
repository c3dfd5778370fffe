//! Recipes: the unit of generation configuration.
//! A recipe binds a stub to a target folder together with its replacement
//! map, name transforms and overwrite/backup policy, and orchestrates the
//! resolver, file handles and stub engine for one generation unit.

use crate::error::{Error, Result};
use crate::file::FileHandle;
use crate::namespace;
use crate::resolver::{PathSpec, Resolver, RootSpec};
use crate::stub::{self, Generated, GenerateOptions, Stub};
use crate::transform::NameTransform;
use indexmap::IndexMap;
use log::debug;

/// Placeholder token replaced with the derived namespace.
pub const NAMESPACE_PLACEHOLDER: &str = "DUMMY_NAMESPACE";

/// Placeholder token replaced with the derived class name.
pub const CLASS_PLACEHOLDER: &str = "DUMMY_CLASS";

/// The user-supplied name argument, split into its directory portion and its
/// base name (without extension).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    pub relative_path: Option<String>,
    pub base_name: Option<String>,
}

impl NameInput {
    /// Splits a free-form name argument like `HeroSection/BackgroundImage`
    /// into a relative path part and a base name part.
    pub fn parse(raw: &str) -> Self {
        let canonical = raw.replace('\\', "/");
        let trimmed = canonical.trim_matches('/');

        let (relative_path, file) = match trimmed.rsplit_once('/') {
            Some((dir, file)) => (Some(dir), file),
            None => (None, trimmed),
        };

        // drop the extension from the final segment, keeping dot-files intact
        let base_name = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        };

        Self {
            relative_path: relative_path
                .filter(|dir| !dir.is_empty())
                .map(str::to_string),
            base_name: Some(base_name)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
        }
    }
}

/// Run-level flags OR-merged with each recipe's own flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunFlags {
    pub dry_run: bool,
    pub overwrite: bool,
    pub backup: bool,
}

/// Configuration for one generation unit, built fluently and consumed once
/// via [`Recipe::run`].
#[derive(Debug)]
pub struct Recipe {
    stub: PathSpec,
    target: PathSpec,
    root_path: RootSpec,
    extension: Option<String>,
    root_namespace: Option<String>,
    replace: IndexMap<String, String>,
    scope: String,
    file_name_transform: Option<NameTransform>,
    relative_path_transform: Option<NameTransform>,
    overwrite: bool,
    backup: bool,
}

impl Recipe {
    pub fn new(stub: impl Into<PathSpec>, target: impl Into<PathSpec>) -> Self {
        Self {
            stub: stub.into(),
            target: target.into(),
            root_path: RootSpec::Default,
            extension: None,
            root_namespace: None,
            replace: IndexMap::new(),
            scope: String::new(),
            file_name_transform: None,
            relative_path_transform: None,
            overwrite: false,
            backup: false,
        }
    }

    //--- Fluent configuration ----------------------------------------------------------------------------------------

    pub fn with_root_path(mut self, root_path: RootSpec) -> Self {
        self.root_path = root_path;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = Some(extension.trim_start_matches('.').to_string());
        self
    }

    pub fn with_root_namespace(mut self, root_namespace: &str) -> Self {
        self.root_namespace = Some(root_namespace.to_string());
        self
    }

    /// Merges the given pairs into the replacement map. Explicit entries take
    /// priority over the derived defaults and are applied after them.
    pub fn with_replace<I, K, V>(mut self, replace: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.replace
            .extend(replace.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }

    pub fn with_file_name_transform(mut self, transform: NameTransform) -> Self {
        self.file_name_transform = Some(transform);
        self
    }

    pub fn with_relative_path_transform(mut self, transform: NameTransform) -> Self {
        self.relative_path_transform = Some(transform);
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    //--- Generation --------------------------------------------------------------------------------------------------

    /// Runs this recipe for the given name input: resolves the stub and the
    /// target, applies the transforms, merges the derived replacements under
    /// the explicit ones and hands off to the stub engine.
    pub fn run(&self, name: &NameInput, resolver: &Resolver, flags: RunFlags) -> Result<Generated> {
        self.validate()?;

        let stub_path = resolver.resolve(&self.stub, &self.root_path)?;
        let source = FileHandle::from_path(&stub_path, resolver.project_root());

        let relative_path = name
            .relative_path
            .as_deref()
            .map(|path| match &self.relative_path_transform {
                Some(transform) => transform.apply_to_path(path),
                None => path.to_string(),
            });

        let base_name = match &name.base_name {
            Some(base_name) => base_name.clone(),
            None => stub::stub_base_name(&source.file_name()),
        };
        let base_name = match &self.file_name_transform {
            Some(transform) => transform.apply(&base_name),
            None => base_name,
        };

        let target_folder = resolver.resolve(&self.target, &self.root_path)?;
        let mut target = FileHandle::new(&target_folder, &base_name, "", resolver.project_root());
        if let Some(relative_path) = &relative_path {
            target.sub_folder(relative_path);
        }
        if let Some(extension) = &self.extension {
            target.set_extension(extension);
        }

        let replace = self.replacements(relative_path.as_deref(), &base_name);
        debug!(
            "Running recipe{} for target {}",
            if self.scope.is_empty() {
                String::new()
            } else {
                format!(" '{}'", self.scope)
            },
            target.full_path().display()
        );

        Stub::new(source, target)?.generate(
            &replace,
            GenerateOptions {
                dry_run: flags.dry_run,
                overwrite: self.overwrite || flags.overwrite,
                backup: self.backup || flags.backup,
            },
        )
    }

    /// Missing stub or target is a configuration error, not a silent no-op.
    fn validate(&self) -> Result<()> {
        if matches!(&self.stub, PathSpec::Literal(path) if path.is_empty()) {
            return Err(Error::Config("the recipe has no stub file set".to_string()));
        }
        if matches!(&self.target, PathSpec::Literal(path) if path.is_empty()) {
            return Err(Error::Config(
                "the recipe has no target folder set".to_string(),
            ));
        }
        Ok(())
    }

    /// Derived namespace and class-name replacements, merged as lower
    /// priority under the recipe's explicit replacement map.
    fn replacements(
        &self,
        relative_path: Option<&str>,
        base_name: &str,
    ) -> IndexMap<String, String> {
        let relative_name = match relative_path {
            Some(path) => format!("{}/{}", path, base_name),
            None => base_name.to_string(),
        };
        let root_namespace = self
            .root_namespace
            .as_deref()
            .unwrap_or(namespace::DEFAULT_ROOT_NAMESPACE);

        let mut replace = IndexMap::new();
        replace.insert(
            NAMESPACE_PLACEHOLDER.to_string(),
            namespace::derive(&relative_name, root_namespace),
        );
        replace.insert(CLASS_PLACEHOLDER.to_string(), base_name.to_string());
        replace.extend(
            self.replace
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        replace
    }
}
