use super::*;
use std::collections::HashMap;

#[test]
fn test_defaults_match_public_endpoints() {
    let cfg = Config::default();
    assert_eq!(cfg.stargazer.log_level, "info");
    assert_eq!(cfg.stargazer.language, "ru");
    assert_eq!(cfg.nasa.api_key, "DEMO_KEY");
    assert_eq!(cfg.nasa.base_url, "https://api.nasa.gov");
    assert_eq!(cfg.nasa.rover, "curiosity");
    assert_eq!(cfg.nasa.sol, 1000);
    assert!(cfg.translate.enabled);
    assert_eq!(cfg.telegram.poll_timeout_secs, 30);
    assert!(cfg.telegram.bot_token.is_empty());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let toml_str = r#"
        [telegram]
        bot_token = "123:ABC"

        [nasa]
        api_key = "real-key"
        sol = 42
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.telegram.bot_token, "123:ABC");
    assert_eq!(cfg.nasa.api_key, "real-key");
    assert_eq!(cfg.nasa.sol, 42);
    assert_eq!(cfg.nasa.rover, "curiosity");
    assert_eq!(cfg.stargazer.language, "ru");
    assert!(cfg.translate.enabled);
}

#[test]
fn test_translate_section_from_toml() {
    let toml_str = r#"
        enabled = false
        base_url = "http://localhost:9000"
    "#;
    let cfg: TranslateConfig = toml::from_str(toml_str).unwrap();
    assert!(!cfg.enabled);
    assert_eq!(cfg.base_url, "http://localhost:9000");
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn test_env_overrides_secrets() {
    let env: HashMap<&str, &str> = [
        (ENV_BOT_TOKEN, "env-token"),
        (ENV_NASA_API_KEY, "env-key"),
    ]
    .into_iter()
    .collect();

    let mut cfg = Config::default();
    cfg.apply_env_from(|k| env.get(k).map(|v| v.to_string()));
    assert_eq!(cfg.telegram.bot_token, "env-token");
    assert_eq!(cfg.nasa.api_key, "env-key");
}

#[test]
fn test_empty_env_does_not_clobber_file_values() {
    let mut cfg = Config::default();
    cfg.telegram.bot_token = "file-token".into();
    cfg.apply_env_from(|_| Some(String::new()));
    assert_eq!(cfg.telegram.bot_token, "file-token");
    assert_eq!(cfg.nasa.api_key, "DEMO_KEY");
}

#[test]
fn test_needs_translation() {
    let mut cfg = Config::default();
    assert!(cfg.needs_translation());

    cfg.stargazer.language = "EN".into();
    assert!(!cfg.needs_translation());

    cfg.stargazer.language = "de".into();
    cfg.translate.enabled = false;
    assert!(!cfg.needs_translation());
}

#[test]
fn test_load_missing_file_reports_absence() {
    let loaded = load("/nonexistent/__stargazer_missing__.toml").unwrap();
    assert!(loaded.is_none());
    assert_eq!(loaded.unwrap_or_default().nasa.api_key, "DEMO_KEY");
}

#[test]
fn test_load_from_file() {
    let tmp = std::env::temp_dir().join(format!(
        "__stargazer_test_config_{}__.toml",
        std::process::id()
    ));
    std::fs::write(
        &tmp,
        "[stargazer]\nlanguage = \"en\"\n\n[nasa]\nrover = \"perseverance\"\n",
    )
    .unwrap();

    let cfg = load(tmp.to_str().unwrap()).unwrap().unwrap();
    assert_eq!(cfg.stargazer.language, "en");
    assert_eq!(cfg.nasa.rover, "perseverance");

    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let tmp = std::env::temp_dir().join(format!(
        "__stargazer_test_bad_config_{}__.toml",
        std::process::id()
    ));
    std::fs::write(&tmp, "[nasa\nsol = ").unwrap();

    let err = load(tmp.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StargazerError::Config(_)));

    let _ = std::fs::remove_file(&tmp);
}
