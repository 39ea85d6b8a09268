use super::*;
use serial_test::serial;
use std::io::Write;

const ALL_VARS: &[&str] = &[
    "SIMQUERY_PORT",
    "SIMQUERY_BIND_ADDR",
    "SIMQUERY_GROUND_TRUTH",
    "SIMQUERY_MODEL_PATH",
    "SIMQUERY_STRATEGY",
];

fn clear_env() {
    for var in ALL_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();

    let config = Config::from_env().expect("Should load defaults");

    assert_eq!(config.port, 8000);
    assert_eq!(config.bind_addr.to_string(), "127.0.0.1");
    assert_eq!(
        config.ground_truth_path,
        PathBuf::from(DEFAULT_GROUND_TRUTH_PATH)
    );
    assert!(config.model_path.is_none());
    assert_eq!(config.strategy, StrategyKind::Dense);
}

#[test]
#[serial]
fn test_port_override() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_PORT", "9000");
    }

    let config = Config::from_env().expect("Should parse port");
    assert_eq!(config.port, 9000);

    clear_env();
}

#[test]
#[serial]
fn test_port_zero_rejected() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_PORT", "0");
    }

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_port_garbage_rejected() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_PORT", "not-a-port");
    }

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_bind_addr_override() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_BIND_ADDR", "0.0.0.0");
    }

    let config = Config::from_env().expect("Should parse bind addr");
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0");

    clear_env();
}

#[test]
#[serial]
fn test_bind_addr_garbage_rejected() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_BIND_ADDR", "localhost:nope");
    }

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_strategy_parsing() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_STRATEGY", "classifier");
    }

    let config = Config::from_env().expect("Should parse strategy");
    assert_eq!(config.strategy, StrategyKind::Classifier);

    unsafe {
        env::set_var("SIMQUERY_STRATEGY", "  Dense ");
    }

    let config = Config::from_env().expect("Strategy should be case-insensitive");
    assert_eq!(config.strategy, StrategyKind::Dense);

    clear_env();
}

#[test]
#[serial]
fn test_strategy_garbage_rejected() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_STRATEGY", "hybrid");
    }

    let result = Config::from_env();
    assert!(matches!(result, Err(ConfigError::InvalidStrategy { .. })));

    clear_env();
}

#[test]
#[serial]
fn test_model_path_whitespace_treated_as_unset() {
    clear_env();
    unsafe {
        env::set_var("SIMQUERY_MODEL_PATH", "   ");
    }

    let config = Config::from_env().expect("Should load");
    assert!(config.model_path.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_socket_addr_format() {
    clear_env();

    let config = Config::from_env().expect("Should load defaults");
    assert_eq!(config.socket_addr(), "127.0.0.1:8000");
}

#[test]
fn test_validate_missing_ground_truth() {
    let config = Config {
        ground_truth_path: PathBuf::from("/nonexistent/ground-truth.txt"),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}

#[test]
fn test_validate_ground_truth_must_be_file() {
    let temp_dir = tempfile::TempDir::new().expect("create temp dir");

    let config = Config {
        ground_truth_path: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(config.validate(), Err(ConfigError::NotAFile { .. })));
}

#[test]
fn test_validate_model_path_must_be_dir() {
    let mut ground_truth = tempfile::NamedTempFile::new().expect("create temp file");
    ground_truth
        .write_all(b"Some reference text.")
        .expect("write fixture");

    let config = Config {
        ground_truth_path: ground_truth.path().to_path_buf(),
        model_path: Some(ground_truth.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_accepts_good_paths() {
    let mut ground_truth = tempfile::NamedTempFile::new().expect("create temp file");
    ground_truth
        .write_all(b"Some reference text.")
        .expect("write fixture");
    let model_dir = tempfile::TempDir::new().expect("create temp dir");

    let config = Config {
        ground_truth_path: ground_truth.path().to_path_buf(),
        model_path: Some(model_dir.path().to_path_buf()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}
