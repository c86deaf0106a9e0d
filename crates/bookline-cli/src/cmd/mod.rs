pub mod load;
pub mod quality;
pub mod reconcile;
pub mod run;
pub mod validate;

use std::path::{Path, PathBuf};

use bookline_core::Artifact;

use crate::config::Config;

/// Staging directory for a stage: CLI flag wins over the config file.
pub fn staging_dir(flag: &Option<PathBuf>, config: &Config) -> PathBuf {
    flag.clone()
        .unwrap_or_else(|| config.staging.data_dir.clone())
}

/// Store database path: CLI flag, then config file, then the staging dir.
pub fn store_path(flag: &Option<PathBuf>, config: &Config, staging: &Path) -> PathBuf {
    flag.clone()
        .or_else(|| config.store.db_path.clone())
        .unwrap_or_else(|| Artifact::StoreDb.path_in(staging))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_config() -> Config {
        toml::from_str(
            r#"
            [staging]
            data_dir = "/etc/staging"

            [store]
            db_path = "/etc/books.duckdb"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn staging_dir_flag_overrides_config_file() {
        let config = populated_config();
        let flag = Some(PathBuf::from("/tmp/run"));
        assert_eq!(staging_dir(&flag, &config), PathBuf::from("/tmp/run"));
        assert_eq!(staging_dir(&None, &config), PathBuf::from("/etc/staging"));
    }

    #[test]
    fn store_path_flag_overrides_config_file() {
        let config = populated_config();
        let flag = Some(PathBuf::from("/tmp/run/books.duckdb"));
        assert_eq!(
            store_path(&flag, &config, Path::new("/tmp/run")),
            PathBuf::from("/tmp/run/books.duckdb")
        );
    }

    #[test]
    fn store_path_config_file_overrides_staging_default() {
        let config = populated_config();
        assert_eq!(
            store_path(&None, &config, Path::new("/tmp/run")),
            PathBuf::from("/etc/books.duckdb")
        );
    }

    #[test]
    fn store_path_defaults_into_staging_dir() {
        let config = Config::default();
        assert_eq!(
            store_path(&None, &config, Path::new("/tmp/run")),
            Artifact::StoreDb.path_in(Path::new("/tmp/run"))
        );
    }
}
