// Build-time configuration for the dashboard.
//
// Values come from the environment of the `trunk build` / `cargo build` that
// produced the bundle, since a browser has no process environment to read.

const DEFAULT_API_BASE_URL: &str = "/api/v1";
const DEFAULT_AUTH_TOKEN_KEY: &str = "clientdesk_auth_token";
const DEFAULT_PAGE_SIZE: usize = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every REST call, without trailing slash.
    pub api_base_url: String,
    /// Local storage key holding the bearer token.
    pub auth_token_key: String,
    /// Rows per page in paginated tables.
    pub page_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CLIENTDESK_API_BASE_URL"),
            option_env!("CLIENTDESK_AUTH_TOKEN_KEY"),
            option_env!("CLIENTDESK_PAGE_SIZE"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        auth_token_key: Option<&str>,
        page_size: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let auth_token_key = auth_token_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_AUTH_TOKEN_KEY)
            .to_string();

        let page_size = page_size
            .and_then(|size| size.trim().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            api_base_url,
            auth_token_key,
            page_size,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
