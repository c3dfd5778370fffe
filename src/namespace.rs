//! Hierarchical (PSR-4 style) namespace derivation from target path segments.

/// Separator used when joining namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Root namespace used when a recipe specifies none.
pub const DEFAULT_ROOT_NAMESPACE: &str = "App";

/// Derives a namespace from a relative target name and a root namespace.
///
/// The name is split on both `/` and `\`, the final segment is dropped (the
/// leaf becomes the class name) and the remaining segments are joined under
/// the trimmed root namespace.
pub fn derive(target_relative_name: &str, root_namespace: &str) -> String {
    let mut segments: Vec<&str> = target_relative_name
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect();
    segments.pop();

    let root = root_namespace.trim_matches(NAMESPACE_SEPARATOR);
    let mut parts = Vec::with_capacity(segments.len() + 1);
    if !root.is_empty() {
        parts.push(root);
    }
    parts.extend(segments);

    parts.join(&NAMESPACE_SEPARATOR.to_string())
}
