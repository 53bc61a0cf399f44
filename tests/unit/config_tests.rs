// Configuration module unit tests

use std::io::Write;

use urlsmith::config::Config;
use urlsmith::Error;

#[test]
fn test_can_deserialize_full_config() {
    let yaml = r#"
domain: assets.example.com
token: "abc123"
use_https: false
include_library_param: false
srcset:
  min_width: 200
  max_width: 2000
  tolerance: 0.1
  variable_quality: false
"#;
    let config: Config = serde_yaml::from_str(yaml).expect("Failed to deserialize YAML");
    assert_eq!(config.domain, "assets.example.com");
    assert_eq!(config.token.as_deref(), Some("abc123"));
    assert!(!config.use_https);
    assert!(!config.include_library_param);
    assert_eq!(config.srcset.min_width, 200);
    assert_eq!(config.srcset.max_width, 2000);
    assert!(!config.srcset.variable_quality);
}

#[test]
fn test_config_deserialization_fails_with_empty_file() {
    let result: Result<Config, _> = serde_yaml::from_str("");
    assert!(
        result.is_err(),
        "Expected deserialization to fail with empty file"
    );
}

#[test]
fn test_config_deserialization_fails_with_invalid_yaml() {
    let yaml = r#"
domain: [invalid syntax here}
"#;
    assert!(matches!(
        Config::from_yaml_with_env(yaml),
        Err(Error::Yaml(_))
    ));
}

#[test]
fn test_env_var_substitution_in_token() {
    std::env::set_var("URLSMITH_TEST_SIGNING_TOKEN", "env-secret");
    let yaml = r#"
domain: assets.example.com
token: ${URLSMITH_TEST_SIGNING_TOKEN}
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.token.as_deref(), Some("env-secret"));
}

#[test]
fn test_lowercase_placeholder_is_left_alone() {
    let yaml = r#"
domain: assets.example.com
token: "${not_a_var}"
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    assert_eq!(config.token.as_deref(), Some("${not_a_var}"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "domain: assets.example.com").unwrap();
    writeln!(file, "token: file-secret").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let builder = config.into_builder().unwrap();
    assert!(builder.is_signed());
    assert_eq!(builder.domain(), "assets.example.com");
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_invalid_srcset_section_fails_validation() {
    let yaml = r#"
domain: assets.example.com
srcset:
  min_width: 900
  max_width: 100
"#;
    let config = Config::from_yaml_with_env(yaml).unwrap();
    assert!(matches!(config.validate(), Err(Error::InvalidSrcset(_))));
    assert!(config.into_builder().is_err());
}
