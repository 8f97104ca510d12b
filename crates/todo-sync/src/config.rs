//! Client Configuration
//!
//! Where the collection lives and whose todos to show.

use serde::Deserialize;

use crate::domain::USER_ID;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Collection root, without the `/todos` suffix
    pub base_url: String,
    pub user_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: USER_ID,
        }
    }
}

impl ApiConfig {
    /// Apply optional overrides (e.g. build-time environment values).
    ///
    /// Blank values keep the default; a user id that is not a number is
    /// ignored with a warning.
    pub fn with_overrides(base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.base_url = url.to_string();
        }

        if let Some(raw) = user_id.map(str::trim).filter(|raw| !raw.is_empty()) {
            match raw.parse::<u32>() {
                Ok(id) => config.user_id = id,
                Err(e) => log::warn!("ignoring user id override {:?}: {}", raw, e),
            }
        }

        config
    }
}
