use std::io::Write;

use bug_crossing::config::GameConfig;
use bug_crossing::entities::MAX_LIVES;
use bug_crossing::error::GameError;

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("bug_crossing_{}_{}.toml", name, std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn defaults_match_the_classic_game() {
    let c = GameConfig::default();
    assert_eq!(c.lives, 3);
    assert_eq!(c.initial_enemies, 4);
    assert_eq!(c.spawn_interval_ms, 1500);
    assert_eq!(c.speed_min, 30.0);
    assert_eq!(c.speed_max, 130.0);
    assert_eq!(c.despawn_x, 505.0);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_file_keeps_defaults() {
    let path = write_temp("partial", "lives = 5\nspeed_max = 200\n");
    let c = GameConfig::load(&path).unwrap();
    assert_eq!(c.lives, 5);
    assert_eq!(c.speed_max, 200.0);
    assert_eq!(c.spawn_interval_ms, 1500);
    let _ = std::fs::remove_file(path);
}

#[test]
fn toml_output_loads_back() {
    let c = GameConfig {
        lives: 4,
        frame_ms: 16,
        ..GameConfig::default()
    };
    let path = write_temp("emit", &c.to_toml().unwrap());
    assert_eq!(GameConfig::load(&path).unwrap(), c);
    let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = write_temp("malformed", "lives = \"many\"\n");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, GameError::ConfigParse { .. }), "{err}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GameConfig::load(std::path::Path::new("/nonexistent/bug_crossing.toml")).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        GameConfig { lives: 0, ..GameConfig::default() },
        GameConfig { spawn_interval_ms: 0, ..GameConfig::default() },
        GameConfig { frame_ms: 0, ..GameConfig::default() },
        GameConfig { lives: MAX_LIVES + 1, ..GameConfig::default() },
        GameConfig { speed_min: 130.0, ..GameConfig::default() },
        GameConfig { speed_min: 0.0, ..GameConfig::default() },
        GameConfig { speed_min: -130.0, speed_max: -30.0, ..GameConfig::default() },
        GameConfig { speed_max: f64::NAN, ..GameConfig::default() },
        GameConfig { despawn_x: f64::INFINITY, ..GameConfig::default() },
    ];
    for c in bad {
        assert!(matches!(c.validate(), Err(GameError::InvalidConfig(_))), "{c:?}");
    }
}

#[test]
fn full_heart_rows_are_accepted() {
    let c = GameConfig { lives: MAX_LIVES, ..GameConfig::default() };
    assert!(c.validate().is_ok());
}

#[test]
fn load_validates() {
    let path = write_temp("invalid", "speed_min = 50\nspeed_max = 40\n");
    assert!(matches!(GameConfig::load(&path), Err(GameError::InvalidConfig(_))));
    let _ = std::fs::remove_file(path);
}
