use clap::Parser;
use figment::Jail;
use netnotify::cli::Cli;
use netnotify::config::{Config, OutputFormat, OUTAGE_MESSAGE};
use netnotify::ProviderKind;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A helper function to run a test with a temporary config file.
///
/// The test runs inside a `Jail` so `NETNOTIFY_` variables set by one test
/// never leak into another.
fn with_config_file<F>(toml_content: &str, test_fn: F)
where
    F: FnOnce(&mut Jail, PathBuf),
{
    Jail::expect_with(|jail| {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml_content).unwrap();
        let path = file.path().to_path_buf();
        test_fn(jail, path);
        Ok(())
    });
}

#[test]
fn test_load_full_valid_config() {
    let toml_content = r#"
        log_level = "debug"
        message = "Planned maintenance tonight."
        [output]
        format = "Json"
        [[scenarios]]
        provider = "CMac"
        user = "Ana"
        [[scenarios]]
        provider = "vodahouse"
        color = "Crimson"
        user = "Ivo"
        message = "Fiber cut downtown."
    "#;

    with_config_file(toml_content, |_jail, path| {
        let cli = Cli::try_parse_from(["netnotify", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.message, "Planned maintenance tonight.");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.scenarios.len(), 2);

        assert_eq!(config.scenarios[0].provider, ProviderKind::CMac);
        assert_eq!(config.scenarios[0].user, "Ana");
        assert_eq!(config.scenarios[0].color, None);
        assert_eq!(
            config.message_for(&config.scenarios[0]),
            "Planned maintenance tonight."
        );

        assert_eq!(config.scenarios[1].provider, ProviderKind::Vodahouse);
        assert_eq!(config.scenarios[1].color.as_deref(), Some("Crimson"));
        assert_eq!(config.message_for(&config.scenarios[1]), "Fiber cut downtown.");
    });
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let toml_content = r#"
        log_level = "warn"
    "#;

    with_config_file(toml_content, |_jail, path| {
        let cli = Cli::try_parse_from(["netnotify", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli).unwrap();

        // Value from file
        assert_eq!(config.log_level, "warn");

        // Values from defaults
        assert_eq!(config.message, OUTAGE_MESSAGE);
        assert_eq!(config.output.format, OutputFormat::PlainText);
        assert_eq!(config.scenarios, Config::default().scenarios);
    });
}

#[test]
fn test_cli_overrides_file() {
    let toml_content = r#"
        log_level = "warn"
        message = "from file"
        [output]
        format = "PlainText"
    "#;

    with_config_file(toml_content, |_jail, path| {
        let cli = Cli::try_parse_from([
            "netnotify",
            "--config",
            path.to_str().unwrap(),
            "--json",
            "--log-level",
            "trace",
            "--message",
            "from cli",
        ])
        .unwrap();
        let config = Config::load(&cli).unwrap();

        assert_eq!(config.log_level, "trace");
        assert_eq!(config.message, "from cli");
        assert_eq!(config.output.format, OutputFormat::Json);
    });
}

#[test]
fn test_missing_config_file_uses_defaults() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("does-not-exist.toml");
        let cli = Cli::default();

        let config = Config::load_from(&path, &cli).unwrap();
        assert_eq!(config.scenarios, Config::default().scenarios);
        assert_eq!(config.message, OUTAGE_MESSAGE);
        Ok(())
    });
}

#[test]
fn test_env_overrides_file_and_cli_overrides_env() {
    let toml_content = r#"
        log_level = "warn"
        message = "from file"
        [output]
        format = "PlainText"
    "#;

    with_config_file(toml_content, |jail, path| {
        jail.set_env("NETNOTIFY_LOG_LEVEL", "debug");
        jail.set_env("NETNOTIFY_MESSAGE", "from env");
        jail.set_env("NETNOTIFY_OUTPUT__FORMAT", "Json");

        // Environment beats the file.
        let cli = Cli::try_parse_from(["netnotify", "--config", path.to_str().unwrap()]).unwrap();
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.message, "from env");
        assert_eq!(config.output.format, OutputFormat::Json);

        // Command-line flags beat the environment.
        let cli = Cli::try_parse_from([
            "netnotify",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "trace",
            "--message",
            "from cli",
        ])
        .unwrap();
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.log_level, "trace");
        assert_eq!(config.message, "from cli");
        assert_eq!(config.output.format, OutputFormat::Json);
    });
}

#[test]
fn test_default_config_file_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("netnotify.toml", r#"log_level = "error""#)?;

        let config = Config::load(&Cli::default()).unwrap();
        assert_eq!(config.log_level, "error");
        Ok(())
    });
}

#[test]
fn test_unknown_provider_is_rejected() {
    let toml_content = r#"
        [[scenarios]]
        provider = "Orange"
        user = "Ana"
    "#;

    with_config_file(toml_content, |_jail, path| {
        let cli = Cli::try_parse_from(["netnotify", "--config", path.to_str().unwrap()]).unwrap();
        let err = Config::load(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Orange"));
    });
}
