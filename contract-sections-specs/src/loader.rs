//! Fixture file loading.

use std::fs;
use std::path::Path;

use crate::failures::EXPECTED_FAILURES_FILE;
use crate::{parse_fixture, OrderingFixture, SpecError};

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> Result<OrderingFixture, SpecError> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&content).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by relative
/// path. The expected-failures file is skipped.
pub fn load_all_fixtures(dir: &Path) -> Result<Vec<(String, OrderingFixture)>, SpecError> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, OrderingFixture)>,
) -> Result<(), SpecError> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml")
            && path.file_name().map_or(true, |n| n != EXPECTED_FAILURES_FILE)
        {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join("golf-outing-conclusion-last.toml");
        let fixture = load_fixture(&path).unwrap();
        assert!(fixture.title.is_some());
    }

    #[test]
    fn test_load_all_fixtures() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
        let fixtures = load_all_fixtures(&dir).unwrap();
        assert!(fixtures.len() >= 5);
        assert!(fixtures.iter().all(|(name, _)| name != EXPECTED_FAILURES_FILE));
    }

    #[test]
    fn test_load_nested_and_skip_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();

        let mut fixture = fs::File::create(nested.join("one.toml")).unwrap();
        write!(
            fixture,
            "contract_type = \"OTHER\"\n\n[expect]\ntitles = []\n"
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not a fixture").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        assert_eq!(fixtures.len(), 1);
        assert!(fixtures[0].0.ends_with("one.toml"));
    }

    #[test]
    fn test_load_bad_fixture_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "contract_type = ").unwrap();

        let err = load_fixture(&path).unwrap_err();
        assert!(matches!(err, SpecError::Load { ref path, .. } if path.ends_with("broken.toml")));
    }
}
