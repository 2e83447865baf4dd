//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use cohort_config::AppConfig;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "0.0.0.0"
port = 8080
allowed_origins = ["https://cohorts.example.com"]
docs_page = "static/docs.html"
public_dir = "static"
"#,
        )?;

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.server.allowed_origins,
            ["https://cohorts.example.com"]
        );
        assert_eq!(config.server.docs_page, "static/docs.html");
        assert_eq!(config.server.public_dir, "static");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
url = "data/cohorts.db"
"#,
        )?;

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.url, "data/cohorts.db");
        assert!(config.database.auth_token.is_empty());
        assert_eq!(config.server.port, 5005);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "cohort-tools.toml",
            r#"
[server]
port = 6006
"#,
        )?;

        let config = AppConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 6006);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cohort-tools.toml", "[server]\nport = 6006\n")?;
        jail.create_file("override.toml", "[server]\nport = 7007\n")?;

        let config = AppConfig::load(Some("override.toml".as_ref())).expect("config loads");
        assert_eq!(config.server.port, 7007);
        Ok(())
    });
}

#[test]
fn wrong_type_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file("cohort-tools.toml", "[server]\nport = \"eighty\"\n")?;

        assert!(AppConfig::load(None).is_err());
        Ok(())
    });
}
