//! File-name and path-segment transformations.
//! Known transform names map to case conversions through an explicit
//! registry; unknown names are rejected when the recipe is built instead of
//! silently falling back to the identity transform.

use crate::error::{Error, Result};
use cruet::Inflector;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// An arbitrary user-supplied transformation function.
pub type TransformFn = Box<dyn Fn(&str) -> String>;

/// A transformation applied to a file name or path segment.
pub enum NameTransform {
    Kebab,
    Pascal,
    Camel,
    Snake,
    Upper,
    Lower,
    Custom(TransformFn),
}

impl NameTransform {
    /// Looks up a named transform in the registry.
    ///
    /// `studly` is accepted as an alias for `pascal`.
    ///
    /// # Errors
    /// * `Error::Config` for unknown transform names
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "kebab" => Ok(Self::Kebab),
            "pascal" | "studly" => Ok(Self::Pascal),
            "camel" => Ok(Self::Camel),
            "snake" => Ok(Self::Snake),
            "upper" => Ok(Self::Upper),
            "lower" => Ok(Self::Lower),
            unknown => Err(Error::Config(format!(
                "unknown name transform: {}",
                unknown
            ))),
        }
    }

    pub fn custom(f: impl Fn(&str) -> String + 'static) -> Self {
        Self::Custom(Box::new(f))
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Self::Kebab => input.to_kebab_case(),
            Self::Pascal => input.to_pascal_case(),
            Self::Camel => input.to_camel_case(),
            Self::Snake => input.to_snake_case(),
            Self::Upper => input.to_uppercase(),
            Self::Lower => input.to_lowercase(),
            Self::Custom(f) => f(input),
        }
    }

    /// Applies the transform to each segment of a relative path separately,
    /// so case conversions never touch the separators.
    pub fn apply_to_path(&self, path: &str) -> String {
        path.split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.apply(segment))
            .collect::<Vec<_>>()
            .join(&MAIN_SEPARATOR.to_string())
    }
}

impl fmt::Debug for NameTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kebab => "Kebab",
            Self::Pascal => "Pascal",
            Self::Camel => "Camel",
            Self::Snake => "Snake",
            Self::Upper => "Upper",
            Self::Lower => "Lower",
            Self::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}
