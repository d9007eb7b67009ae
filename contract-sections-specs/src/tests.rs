use crate::{load_fixture, run_directory, run_fixture, OrderingFixture};
use contract_sections::{BlueprintRegistry, ContractType};
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load a fixture from the fixtures directory.
fn fixture(name: &str) -> OrderingFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_golf_outing_fixture() {
    let fixture = fixture("golf-outing-conclusion-last.toml");

    assert_eq!(fixture.contract_type, ContractType::GolfOuting);
    assert_eq!(fixture.sections.len(), 2);
    assert_eq!(fixture.expect.titles[0], "Parties & Event Overview");

    let result = run_fixture(&fixture, &BlueprintRegistry::builtin());
    assert!(result.passed(), "{:?}", result.mismatches);
}

#[test]
fn test_exhibit_fixture() {
    let fixture = fixture("special-event-exhibits.toml");
    assert_eq!(fixture.exhibits.len(), 2);

    let result = run_fixture(&fixture, &BlueprintRegistry::builtin());
    assert!(result.passed(), "{:?}", result.mismatches);
    assert_eq!(result.outcome.sections.len(), fixture.input_len());
}

#[test]
fn test_all_fixtures_pass() {
    let run = run_directory(&fixtures_dir(), BlueprintRegistry::shared()).unwrap();
    assert!(run.result.success(), "{}", run.regressions.join("\n"));
    assert!(run.result.total > 0);
    assert!(run.stale.is_empty(), "{:?}", run.stale);
}
