use std::path::{Path, PathBuf};

use crate::config::StructGraphConfig;

/// Source file extension discovered when expanding directories.
const SOURCE_EXTENSION: &str = "go";

/// Expand command-line inputs into the ordered list of source files to process.
///
/// Files are kept as given, in the given order, whatever their extension; a
/// missing path is passed through so that reading it fails the run. Each
/// directory is replaced in place by the `.go` files beneath it, sorted by
/// path. Directory walks respect `.gitignore`, skip `_test.go` files unless
/// `include_tests` is set, and apply the `exclude` globs from `config`.
pub fn expand_inputs(
    inputs: &[PathBuf],
    config: &StructGraphConfig,
    include_tests: bool,
) -> Vec<PathBuf> {
    let mut units = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = collect_go_files(input, config, include_tests);
            if found.is_empty() {
                tracing::warn!(dir = %input.display(), "no Go files found");
            }
            found.sort();
            units.extend(found);
        } else {
            units.push(input.clone());
        }
    }
    units
}

/// Collect Go files from a single directory tree using the `ignore` crate.
fn collect_go_files(root: &Path, config: &StructGraphConfig, include_tests: bool) -> Vec<PathBuf> {
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(true)
        // Read .gitignore files even when the directory is not inside a git repository.
        .require_git(false)
        .build();

    let mut out = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(true) {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != SOURCE_EXTENSION {
            continue;
        }

        if !include_tests && is_test_file(path) {
            continue;
        }

        if is_excluded_by_config(path, config) {
            tracing::debug!(path = %path.display(), "excluded by config");
            continue;
        }

        out.push(path.to_path_buf());
    }
    out
}

fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with("_test.go"))
}

/// Returns true if `path` matches any exclusion pattern from config.
fn is_excluded_by_config(path: &Path, config: &StructGraphConfig) -> bool {
    let patterns = match &config.exclude {
        Some(p) => p,
        None => return false,
    };

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        let Ok(matcher) = glob::Pattern::new(pattern) else {
            continue;
        };
        if matcher.matches(&path_str) {
            return true;
        }
        // Also check if any component matches the pattern directly.
        for component in path.components() {
            if let Some(s) = component.as_os_str().to_str()
                && matcher.matches(s)
            {
                return true;
            }
        }
    }

    false
}
