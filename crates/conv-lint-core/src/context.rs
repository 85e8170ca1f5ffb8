//! Per-file context for analysis.

use std::path::{Component, Path, PathBuf};

/// Metadata about one analyzed file.
///
/// The namespace is the file's module path in fully-qualified display
/// form, derived from its path under the analysis root: a leading `src`
/// segment and `lib`/`main`/`mod` file stems are dropped, and the result
/// is `crate`-rooted. `src/models/user.rs` becomes `crate::models::user`.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// Path relative to the analysis root.
    pub relative_path: PathBuf,
    /// Fully-qualified module path of the file itself.
    pub namespace: String,
}

impl FileContext {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let namespace = Self::compute_namespace(&relative_path);

        Self {
            relative_path,
            namespace,
        }
    }

    fn compute_namespace(relative_path: &Path) -> String {
        let mut parts: Vec<String> = relative_path
            .with_extension("")
            .components()
            .filter_map(|c| {
                if let Component::Normal(s) = c {
                    s.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();

        // lib.rs, main.rs, and mod.rs name the enclosing module
        if let Some(last) = parts.last() {
            if last == "mod" || last == "lib" || last == "main" {
                parts.pop();
            }
        }

        if parts.first().is_some_and(|first| first == "src") {
            parts.remove(0);
        }

        let mut namespace = String::from("crate");
        for part in parts {
            namespace.push_str("::");
            namespace.push_str(&part);
        }
        namespace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace_of(relative: &str) -> String {
        FileContext::compute_namespace(Path::new(relative))
    }

    #[test]
    fn crate_root_files_map_to_crate() {
        assert_eq!(namespace_of("src/lib.rs"), "crate");
        assert_eq!(namespace_of("src/main.rs"), "crate");
    }

    #[test]
    fn module_files_map_to_their_path() {
        assert_eq!(namespace_of("src/models.rs"), "crate::models");
        assert_eq!(namespace_of("src/models/user.rs"), "crate::models::user");
    }

    #[test]
    fn mod_rs_names_the_directory() {
        assert_eq!(namespace_of("src/models/mod.rs"), "crate::models");
    }

    #[test]
    fn relative_path_is_stripped_from_root() {
        let ctx = FileContext::new(Path::new("/project/src/models.rs"), Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("src/models.rs"));
        assert_eq!(ctx.namespace, "crate::models");
    }
}
