use std::{env, time::Duration};

use crate::utils::credentials::resolve_api_key;

pub const DEFAULT_IDFM_HOST: &str = "https://prim.iledefrance-mobilites.fr/marketplace";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct AppConfig {
    pub idfm_host: String,
    /// Empty when no credential could be resolved.
    pub api_key: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let lookup = |name: &str| env::var(name).ok();

        AppConfig {
            idfm_host: lookup("IDFM_BASE_URL")
                .filter(|host| !host.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IDFM_HOST.to_string()),
            api_key: resolve_api_key(lookup),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
