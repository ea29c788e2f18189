//! Part-name arithmetic for relationship targets.
//!
//! Part names here are zip member names: forward-slash separated and relative
//! to the package root, without the leading slash OPC uses for part URIs.
//! The package root itself is the empty string.

/// Directory that holds relationships parts.
pub const RELS_DIR: &str = "_rels";

/// Suffix of every relationships part.
pub const RELS_SUFFIX: &str = ".rels";

/// Whether `name` follows the `<dir>/_rels/<file>.rels` convention, with the
/// package-root form `_rels/<file>.rels` included.
pub fn is_relationships_part(name: &str) -> bool {
    if !name.ends_with(RELS_SUFFIX) {
        return false;
    }
    let parent = match name.rfind('/') {
        Some(pos) => &name[..pos],
        None => return false,
    };
    file_name(parent) == RELS_DIR
}

/// Directory of the part that owns the relationships part `rels_name`.
///
/// `_rels/.rels` belongs to the package root, so its owner directory is
/// the empty path. `<dir>/_rels/<name>.rels` belongs to `<dir>/<name>`,
/// whose directory is `<dir>`.
///
/// Returns `None` when `rels_name` is not a relationships part.
pub fn source_dir(rels_name: &str) -> Option<&str> {
    if !is_relationships_part(rels_name) {
        return None;
    }

    if let Some(file) = rels_name.strip_prefix("_rels/") {
        if !file.contains('/') {
            return Some("");
        }
    }

    let rels_dir_start = rels_name.rfind("/_rels/")?;
    Some(&rels_name[..rels_dir_start])
}

/// Resolve a relationship target against the owning part's directory.
///
/// Targets beginning with `/` are package-root absolute and are used as-is
/// with the leading slashes removed. Anything else is joined onto
/// `source_dir` and normalized.
pub fn resolve_target(source_dir: &str, target: &str) -> String {
    if target.starts_with('/') {
        return target.trim_start_matches('/').to_string();
    }

    if source_dir.is_empty() {
        normalize(target)
    } else {
        normalize(&format!("{}/{}", source_dir, target))
    }
}

/// Collapse `.` and `..` segments and repeated slashes.
///
/// `..` segments that would climb above the package root are kept, so the
/// result never aliases an in-package name. An input that normalizes to
/// nothing yields `"."`.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
