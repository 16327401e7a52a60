//! Init command implementation

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::Store;
use std::path::PathBuf;
use tracing::info;

/// Initialize archivist: write the default config and create the database
pub async fn cmd_init(base_dir: Option<PathBuf>, force: bool) -> Result<Config> {
    let mut config = Config::default();
    config.init_paths(base_dir);

    if config.paths.config_file.exists() && !force {
        return Err(Error::AlreadyInitialized(
            config.paths.config_file.display().to_string(),
        ));
    }

    std::fs::create_dir_all(&config.paths.base_dir)?;
    config.save()?;

    // Open once to create the schema
    let store = Store::open(&config.paths.db_file).await?;
    store
        .ensure_default_collection(&config.default_collection_name)
        .await?;

    info!("Initialized archivist at {:?}", config.paths.base_dir);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_config_and_db() {
        let tmp = TempDir::new().unwrap();
        let config = cmd_init(Some(tmp.path().to_path_buf()), false).await.unwrap();

        assert!(config.paths.config_file.exists());
        assert!(config.paths.db_file.exists());

        let store = Store::open(&config.paths.db_file).await.unwrap();
        let collections = store.list_collections().await.unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].name, "Personal Library");
    }

    #[tokio::test]
    async fn test_init_twice_requires_force() {
        let tmp = TempDir::new().unwrap();
        cmd_init(Some(tmp.path().to_path_buf()), false).await.unwrap();

        let again = cmd_init(Some(tmp.path().to_path_buf()), false).await;
        assert!(matches!(again, Err(Error::AlreadyInitialized(_))));

        cmd_init(Some(tmp.path().to_path_buf()), true).await.unwrap();
    }
}
