//! Constants for the zapi client.

/// Default base URL of the Zephyr Scale Cloud API
pub const ZEPHYR_BASE_URL: &str = "https://api.zephyrscale.smartbear.com/v2";

/// Default base URL of the Jira Cloud REST API used for user lookups
pub const JIRA_BASE_URL: &str = "https://rubinobs.atlassian.net/rest/api/2";

/// User-Agent header value for both API clients
pub const USER_AGENT: &str = concat!("zapi/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the Zephyr Scale bearer token
pub const ENV_ZEPHYR_API_TOKEN: &str = "ZEPHYR_API_TOKEN";

/// Environment variable holding the Jira API token
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";

/// Environment variable holding the Jira username for basic auth
pub const ENV_JIRA_USERNAME: &str = "JIRA_USERNAME";

/// Optional override for the Zephyr Scale base URL
pub const ENV_ZEPHYR_BASE_URL: &str = "ZEPHYR_BASE_URL";

/// Optional override for the Jira base URL
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";
