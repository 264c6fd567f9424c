use std::path::PathBuf;

use log::*;

/// Loads `.env.test` (if present) and initialises logging. Safe to call more than once.
pub fn prepare_test_env() {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
}

/// A unique path for a throwaway rate cache file.
pub fn random_cache_path() -> PathBuf {
    std::env::temp_dir().join(format!("fx_rates_test_{}.json", rand::random::<u64>()))
}
