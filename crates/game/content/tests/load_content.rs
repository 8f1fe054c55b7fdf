use std::fs;
use std::path::PathBuf;

use arena_content::ContentFactory;
use arena_core::{ArenaConfig, ClassOracle, EquipmentOracle};

fn shipped_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

const EQUIPMENT: &str = r#"{
    "weapons": [
        {"id": 1, "name": "knife", "min_damage": 1.0, "max_damage": 2.0, "stamina_per_hit": 1.5}
    ],
    "armors": [
        {"id": 1, "name": "tunic", "defence": 0.5, "stamina_per_turn": 0.5}
    ]
}"#;

#[test]
fn shipped_data_loads() {
    let factory = ContentFactory::new(shipped_data_dir());

    let equipment = factory.load_equipment().unwrap();
    assert!(equipment.weapon("axe").is_some());
    assert!(equipment.armor("cuirass").is_some());

    let classes = factory.load_classes().unwrap();
    assert_eq!(classes.class_names(), vec!["Warrior", "Thief"]);

    assert_eq!(factory.load_config().unwrap(), ArenaConfig::default());
}

#[test]
fn optional_files_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(ContentFactory::EQUIPMENT_FILE), EQUIPMENT).unwrap();
    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().unwrap(), ArenaConfig::default());
    let classes = factory.load_classes().unwrap();
    assert!(classes.class("Warrior").is_some());
    assert!(classes.class("Thief").is_some());
}

#[test]
fn missing_equipment_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let factory = ContentFactory::new(dir.path());

    let error = factory.load_equipment().unwrap_err();
    assert!(error.to_string().contains("Failed to read file"));
}

#[test]
fn duplicate_weapon_names_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let duplicated = r#"{
        "weapons": [
            {"id": 1, "name": "knife", "min_damage": 1.0, "max_damage": 2.0, "stamina_per_hit": 1.5},
            {"id": 2, "name": "knife", "min_damage": 1.0, "max_damage": 2.0, "stamina_per_hit": 1.5}
        ],
        "armors": [
            {"id": 1, "name": "tunic", "defence": 0.5, "stamina_per_turn": 0.5}
        ]
    }"#;
    fs::write(dir.path().join(ContentFactory::EQUIPMENT_FILE), duplicated).unwrap();

    assert!(ContentFactory::new(dir.path()).load_equipment().is_err());
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "stamina_per_round = 2.5\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.stamina_per_round, 2.5);
    assert_eq!(config.enemy_skill_chance, ArenaConfig::DEFAULT_ENEMY_SKILL_CHANCE);
}
