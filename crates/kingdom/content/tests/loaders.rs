use std::fs;
use std::path::Path;

use kingdom_content::ContentFactory;
use kingdom_core::{SettlementEngine, Skill, StackingMode};

fn bundled() -> ContentFactory {
    ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn bundled_data_loads() {
    let content = bundled().load_kingdom().unwrap();

    assert_eq!(content.config.stacking_mode, StackingMode::SameStructuresStack);
    assert!(content.activities.len() > 20);
    assert!(content.structures.contains("Palace"));

    let names: Vec<_> = content.settlements.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Restov", "Tuskwater", "Oleg's"]);
    assert_eq!(content.settlements[0].structures.len(), 14);
}

#[test]
fn bundled_kingdom_evaluates() {
    let content = bundled().load_kingdom().unwrap();

    let evaluations = SettlementEngine::new(&content.activities)
        .evaluate_kingdom(&content.settlements, content.config.stacking_mode)
        .unwrap();

    let capital = &evaluations[0];
    assert!(capital.capital);
    // Three marketplaces: trade stacks to the metropolis ceiling.
    assert_eq!(capital.result.skill_bonuses.get(Skill::Trade).value, 3);
    assert_eq!(capital.result.consumption, 5);
    assert!(capital.result.allow_capital_investment);

    let village = &evaluations[2].result;
    assert_eq!(village.skill_bonuses.get(Skill::Politics).value, 1);
    assert_eq!(village.leadership_activity_bonus, 1);
    assert!(village.increase_leadership_activities);
}

#[test]
fn roster_with_unknown_structure_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "").unwrap();
    fs::write(dir.path().join("activities.toml"), r#""Go Fishing" = ["boating"]"#).unwrap();
    fs::write(dir.path().join("structures.ron"), r#"[(name: "Pier")]"#).unwrap();
    fs::write(
        dir.path().join("settlements.ron"),
        r#"[(name: "Tuskwater", level: 2, structures: ["Pier", "Dock"])]"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_kingdom().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Settlement 'Tuskwater' references unknown structure 'Dock'"
    );
}

#[test]
fn minimal_directory_loads() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"stacking_mode = "all-structures-stack""#,
    )
    .unwrap();
    fs::write(dir.path().join("activities.toml"), "").unwrap();
    fs::write(dir.path().join("structures.ron"), "[]").unwrap();
    fs::write(dir.path().join("settlements.ron"), "[]").unwrap();

    let content = ContentFactory::new(dir.path()).load_kingdom().unwrap();
    assert_eq!(content.config.stacking_mode, StackingMode::AllStructuresStack);
    assert!(content.activities.is_empty());
    assert!(content.structures.is_empty());
    assert!(content.settlements.is_empty());
}
