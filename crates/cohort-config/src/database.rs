//! Record store connection configuration.

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "cohort-tools-api.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, `:memory:`, or a remote `libsql://` / `http(s)://` URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Auth token for remote databases. Ignored for local files.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether `url` points at a remote libSQL server rather than a local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        ["libsql://", "http://", "https://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }
}
