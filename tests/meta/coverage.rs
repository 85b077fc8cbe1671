//! Keeps `tests/unit` a mirror of `src`
//!
//! Every source file has a unit test file at the same relative path, every
//! unit test file is declared by its parent module so it actually compiles,
//! and every test file holds at least one test.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module files hold declarations only
    fn is_organizational(relative: &str) -> bool {
        matches!(relative, "main.rs" | "lib.rs") || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                paths.extend(rust_files(&path, base)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|error| io::Error::other(format!("{}: {error}", path.display())))?;
                paths.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }

        Ok(paths)
    }

    fn mirrored_files(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        rust_files(base, base)
            .unwrap()
            .into_iter()
            .filter(|relative| !is_organizational(relative))
            .collect()
    }

    // Tests every source file has a unit test counterpart
    // Verified by adding an untested file under src/lattice
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let unit = mirrored_files(UNIT_DIR);
        let missing: Vec<String> = mirrored_files(SRC_DIR)
            .into_iter()
            .filter(|relative| !unit.contains(relative))
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src = mirrored_files(SRC_DIR);
        let orphaned: Vec<String> = mirrored_files(UNIT_DIR)
            .into_iter()
            .filter(|relative| !src.contains(relative))
            .map(|relative| format!("  - tests/unit/{relative} (no src/{relative})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests each unit test file is reachable from the unit target root
    // Verified by removing a `mod` line from tests/unit/io/mod.rs
    #[test]
    fn test_unit_files_are_declared() {
        let mut undeclared = Vec::new();

        for relative in mirrored_files(UNIT_DIR) {
            let path = Path::new(UNIT_DIR).join(&relative);
            let parent = path.parent().unwrap();
            let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap();

            let module_file = parent.join("mod.rs");
            let declarations = fs::read_to_string(&module_file).unwrap_or_default();
            let declaration = format!("mod {stem};");
            let declared = declarations.lines().any(|line| {
                let line = line.trim();
                line == declaration || line.strip_prefix("pub ") == Some(declaration.as_str())
            });
            if !declared {
                undeclared.push(format!("  - {} in {}", stem, module_file.display()));
            }
        }

        assert!(
            undeclared.is_empty(),
            "Unit test files not declared by their module:\n{}",
            undeclared.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let base = Path::new("tests");
        let empty: Vec<String> = rust_files(base, base)
            .unwrap()
            .into_iter()
            .filter(|relative| !relative.ends_with("main.rs") && !relative.ends_with("mod.rs"))
            .filter(|relative| {
                let content = fs::read_to_string(base.join(relative)).unwrap_or_default();
                !content.contains("#[test]")
            })
            .map(|relative| format!("  - tests/{relative}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
