use std::path::{Component, Path, PathBuf};

/// Collapses `.` and `..` segments out of a manifest-supplied relative path
/// so every entry resolves inside the root it is joined to.
pub fn normalize_path(source: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in source.components() {
        match component {
            // Skip the current-dir marker "."
            Component::CurDir => {}

            // For "..", pop the last component if possible
            Component::ParentDir => {
                normalized.pop();
            }

            // For normal components, push them
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_dir_markers_are_dropped() {
        assert_eq!(
            normalize_path(Path::new("./features/./core-features.md")),
            PathBuf::from("features/core-features.md")
        );
    }

    #[test]
    fn parent_dir_segments_collapse() {
        assert_eq!(
            normalize_path(Path::new("api/../guides/basic-usage.md")),
            PathBuf::from("guides/basic-usage.md")
        );
    }

    #[test]
    fn leading_parent_dir_cannot_escape() {
        assert_eq!(
            normalize_path(Path::new("../intro.md")),
            PathBuf::from("intro.md")
        );
    }
}
