use anyhow::Context;
use jml_config::JmlConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then layered config, then the `--db` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<JmlConfig> {
    load_dotenv()?;
    let mut config = JmlConfig::load().context("failed to load jml configuration")?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}

fn apply_overrides(config: &mut JmlConfig, flags: &GlobalFlags) {
    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(db: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            db: db.map(String::from),
        }
    }

    #[test]
    fn db_flag_overrides_config_path() {
        let mut config = JmlConfig::default();
        apply_overrides(&mut config, &flags(Some("/tmp/other.db")));
        assert_eq!(config.database.path, "/tmp/other.db");
    }

    #[test]
    fn absent_db_flag_keeps_config() {
        let mut config = JmlConfig::default();
        apply_overrides(&mut config, &flags(None));
        assert_eq!(config.database.path, "jml.db");
    }
}
