use cohort_config::AppConfig;

/// Print the effective configuration, secrets masked.
pub fn handle(config: &AppConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
