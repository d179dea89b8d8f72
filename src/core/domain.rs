use std::collections::HashMap;
use std::env;
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

const DEFAULT_METADATA_BASE_URL: &str = "https://openlibrary.org";
const DEFAULT_METADATA_TIMEOUT_SECS: u64 = 10;

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // base url of the ISBN metadata service
    pub metadata_base_url: String,
    pub metadata_timeout_secs: u64,
    // bearer key => user id
    pub api_keys: HashMap<String, String>,
    // resolve every request to a fixed user instead of checking api keys
    pub stub_identity: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            metadata_base_url: DEFAULT_METADATA_BASE_URL.to_string(),
            metadata_timeout_secs: DEFAULT_METADATA_TIMEOUT_SECS,
            api_keys: HashMap::new(),
            stub_identity: false,
        }
    }

    /// Starts from the defaults and overrides them from the environment:
    /// `METADATA_BASE_URL`, `METADATA_TIMEOUT_SECS`, `CATALOG_API_KEYS`
    /// (comma separated `user=key` pairs) and `CATALOG_STUB_IDENTITY`.
    pub fn from_env(branch_id: &str) -> Self {
        let mut config = Configuration::new(branch_id);
        if let Ok(url) = env::var("METADATA_BASE_URL") {
            config.metadata_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = env::var("METADATA_TIMEOUT_SECS").ok().and_then(|s| s.parse::<u64>().ok()) {
            config.metadata_timeout_secs = secs;
        }
        if let Ok(keys) = env::var("CATALOG_API_KEYS") {
            config.api_keys = parse_api_keys(keys.as_str());
        }
        config.stub_identity = env_flag("CATALOG_STUB_IDENTITY");
        config
    }
}

/// True when the variable is set to `1`, `true` or `yes`.
pub fn env_flag(name: &str) -> bool {
    env::var(name).map_or(false, |v| matches!(v.trim(), "1" | "true" | "yes"))
}

fn parse_api_keys(raw: &str) -> HashMap<String, String> {
    raw.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(user, key)| (key.trim().to_string(), user.trim().to_string()))
        .filter(|(key, user)| !key.is_empty() && !user.is_empty())
        .collect()
}
