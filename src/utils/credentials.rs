use std::{fs, path::Path};

use tracing::error;

pub const API_KEY_VAR: &str = "IDFM_API_KEY";
pub const API_KEY_FILE_VAR: &str = "IDFM_API_KEY_FILE";

/// Resolves the API key from `IDFM_API_KEY`, falling back to the secret file
/// named by `IDFM_API_KEY_FILE`. Returns an empty string when neither yields a
/// key; callers treat that as "not configured".
pub fn resolve_api_key<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(api_key) = lookup(API_KEY_VAR).filter(|k| !k.is_empty()) {
        return api_key;
    }

    let secret_file = match lookup(API_KEY_FILE_VAR).filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => return String::new(),
    };

    let path = Path::new(&secret_file);
    if !path.exists() {
        return String::new();
    }

    match fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(e) => {
            error!("Failed to read API key from {}: {}", path.display(), e);
            String::new()
        }
    }
}
