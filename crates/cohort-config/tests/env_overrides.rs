use figment::Jail;
use cohort_config::AppConfig;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("COHORT_TOOLS_SERVER__PORT", "9090");
        jail.set_env("COHORT_TOOLS_DATABASE__URL", "libsql://cohorts-org.turso.io");
        jail.set_env("COHORT_TOOLS_DATABASE__AUTH_TOKEN", "tok");

        let config = AppConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "libsql://cohorts-org.turso.io");
        assert_eq!(config.database.auth_token, "tok");
        assert!(config.database.is_remote());
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cohort-tools.toml", "[server]\nport = 6006\n")?;
        jail.set_env("COHORT_TOOLS_SERVER__PORT", "9090");

        let config = AppConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 9090);
        Ok(())
    });
}
