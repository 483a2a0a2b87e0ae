use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://jisho.org/api/v1/search/words";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("jisho-lookup/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for the outbound search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Search endpoint, queried with `?keyword=`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub(crate) fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("JISHO_API_URL").unwrap_or_else(default_api_url);
        let user_agent = var("JISHO_USER_AGENT").unwrap_or_else(default_user_agent);

        Self {
            api_url,
            user_agent,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
        }
    }
}
