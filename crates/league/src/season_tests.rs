use super::*;
use league_core::build_schedule;

fn season() -> SeasonFile {
    let teams = vec![
        Team::new("north", 0, vec!["ana".into(), "bia".into()]),
        Team::new("south", 1, vec!["caio".into(), "duda".into()]),
        Team::new("east", 2, vec!["enzo".into(), "fabi".into()]),
    ];
    let config = FormatConfig::default();
    let schedule = build_schedule(&teams, &config);
    SeasonFile::new("Test Season", config, &schedule)
}

#[test]
fn test_new_season_is_unplayed() {
    let s = season();
    assert_eq!(s.matches.len(), 3);
    assert_eq!(s.finished_count(), 0);
    assert_eq!(s.standings().len(), 6);
}

#[test]
fn test_record_result_by_id() {
    let mut s = season();
    let outcome = s
        .record_result(2, &ScoreSheet::from_sets(&[(4, 6), (3, 6)]))
        .unwrap();

    assert_eq!(outcome.result, ResultType::WinB);
    assert_eq!(s.finished_count(), 1);
    assert!(s.generate_report().contains("4-6 3-6 (B)"));
}

#[test]
fn test_record_result_errors() {
    let mut s = season();
    assert!(matches!(
        s.record_result(42, &ScoreSheet::from_sets(&[(6, 1), (6, 1)])),
        Err(SeasonError::UnknownMatch(42))
    ));
    assert!(matches!(
        s.record_result(1, &ScoreSheet::from_sets(&[(6, 6)])),
        Err(SeasonError::Invalid(ValidationError::TiedSet { set: 1 }))
    ));
    assert_eq!(s.finished_count(), 0);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("season.json");

    let mut s = season();
    s.record_result(1, &ScoreSheet::from_sets(&[(6, 1), (6, 2)])).unwrap();
    s.save(&path).unwrap();

    let loaded = SeasonFile::load(&path).unwrap();
    assert_eq!(loaded.name, "Test Season");
    assert_eq!(loaded.matches, s.matches);
    assert_eq!(loaded.config, s.config);

    let ranked = loaded.standings().ranked();
    assert_eq!(ranked[0].entry.points_total, 7);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        SeasonFile::load(&dir.path().join("nope.json")),
        Err(SeasonError::Io(_))
    ));
}

#[test]
fn test_load_rejects_invalid_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("season.json");

    let mut s = season();
    s.config.max_games_per_set = 0;
    s.save(&path).unwrap();

    assert!(matches!(
        SeasonFile::load(&path),
        Err(SeasonError::Config(ConfigError::Invalid(_)))
    ));
}
