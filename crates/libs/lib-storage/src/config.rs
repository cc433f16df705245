use lib_utils::envs::get_env;
use std::sync::OnceLock;

pub fn storage_config() -> &'static StorageConfig {
    static INSTANCE: OnceLock<StorageConfig> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        StorageConfig::load_from_env()
            .unwrap_or_else(|e| panic!("Failed while loading StorageConfig from env - Cause: {e:?}"))
    })
}

pub struct StorageConfig {
    pub data_root: String,
}

impl StorageConfig {
    pub fn load_from_env() -> lib_utils::error::Result<StorageConfig> {
        let data_root =
            get_env::<String>("DATA_ROOT").unwrap_or_else(|_| "./galahad_data".to_string());
        Ok(StorageConfig { data_root })
    }
}


// endregion: Unit Test
