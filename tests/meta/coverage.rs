//! Enforces the one-to-one mirror between src modules and unit test files

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
    let mut paths = HashSet::new();

    if dir.is_dir() {
        for entry_result in fs::read_dir(dir)? {
            let entry = entry_result?;
            let path = entry.path();

            let relative_path = match path.strip_prefix(base) {
                Ok(stripped) => stripped.to_string_lossy().to_string(),
                Err(_original_error) => {
                    return Err(io::Error::other("Failed to strip prefix"));
                }
            };

            if path.is_dir() {
                paths.insert(relative_path.clone());
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }
    }

    Ok(paths)
}

fn src_and_test_paths() -> (HashSet<String>, HashSet<String>) {
    let src_dir = Path::new("src");
    let tests_dir = Path::new("tests/unit");

    let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
        assert!(src_dir.exists(), "Failed to read src directory: {error}");
        HashSet::new()
    });
    let test_paths = collect_relative_paths(tests_dir, tests_dir).unwrap_or_default();

    (src_paths, test_paths)
}

#[test]
fn test_all_src_files_have_unit_tests() {
    let (src_paths, test_paths) = src_and_test_paths();

    let missing_tests: Vec<&String> = src_paths
        .iter()
        .filter(|src_path| {
            // Entry points and module organization files carry no unit file
            src_path.as_str() != "main.rs"
                && src_path.as_str() != "lib.rs"
                && !src_path.ends_with("mod.rs")
                && !test_paths.contains(*src_path)
        })
        .collect();

    assert!(
        missing_tests.is_empty(),
        "The following src files/directories are missing unit test counterparts:\n{}",
        missing_tests
            .iter()
            .map(|src_path| format!("  - src/{src_path} -> tests/unit/{src_path}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn test_all_unit_tests_have_src_counterparts() {
    let (src_paths, test_paths) = src_and_test_paths();

    let orphaned_tests: Vec<&String> = test_paths
        .iter()
        .filter(|test_path| !test_path.ends_with("mod.rs") && !src_paths.contains(*test_path))
        .collect();

    assert!(
        orphaned_tests.is_empty(),
        "The following unit test files/directories have no corresponding src files:\n{}",
        orphaned_tests
            .iter()
            .map(|test_path| format!("  - tests/unit/{test_path} -> src/{test_path} (missing)"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn test_all_test_files_contain_tests() {
    let tests_dir = Path::new("tests");
    let mut files_without_tests = Vec::new();

    let result = check_test_files(tests_dir, tests_dir, &mut files_without_tests);
    if let Err(error) = result {
        assert!(tests_dir.exists(), "Failed to scan tests directory: {error}");
    }

    assert!(
        files_without_tests.is_empty(),
        "The following test files don't contain any #[test] functions:\n{}",
        files_without_tests.join("\n")
    );
}

fn check_test_files(
    dir: &Path,
    base_dir: &Path,
    files_without_tests: &mut Vec<String>,
) -> Result<(), io::Error> {
    for entry_result in fs::read_dir(dir)? {
        let entry = entry_result?;
        let path = entry.path();

        if path.is_dir() {
            check_test_files(&path, base_dir, files_without_tests)?;
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        // Harness entry and module organization files carry no tests
        if (path.parent() == Some(base_dir) && file_name == "main.rs") || file_name == "mod.rs" {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        if !content.contains("#[test]") {
            files_without_tests.push(format!("  - {}", path.display()));
        }
    }

    Ok(())
}
