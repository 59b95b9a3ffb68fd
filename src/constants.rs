//! Application-wide constants and configuration values
//!
//! This module centralizes endpoint defaults, link targets and other
//! magic values so the fetchers and renderers agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Name used for the config directory and default log file
pub const APP_NAME: &str = "robostats";

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "robostats.log";

/// Default API endpoints
pub mod endpoints {
    /// TheBlueAlliance read API (v3)
    pub const TBA_API_DOMAIN: &str = "https://www.thebluealliance.com/api/v3";

    /// Statbotics REST API (v3)
    pub const STATBOTICS_API_DOMAIN: &str = "https://api.statbotics.io/v3";

    /// FTCScout GraphQL endpoint
    pub const FTCSCOUT_API_URL: &str = "https://api.ftcscout.org/graphql";

    /// Header carrying the TBA read key
    pub const TBA_AUTH_HEADER: &str = "X-TBA-Auth-Key";
}

/// Public web pages linked from rendered views
pub mod links {
    pub const TBA_WEB: &str = "https://www.thebluealliance.com";
    pub const STATBOTICS_API_WEB: &str = "https://api.statbotics.io/v3";
    pub const FTCSTATS_WEB: &str = "https://ftcstats.org";
}

/// FTCScout search tuning
pub mod ftc_search {
    /// Maximum number of teams and of events shown per search
    pub const RESULT_LIMIT: usize = 10;

    /// Queries shorter than this (but non-empty) are not sent
    pub const MIN_QUERY_CHARS: usize = 3;

    /// Season searched when none is configured
    pub const DEFAULT_SEASON: i32 = 2024;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the TBA read key
    pub const TBA_API_KEY: &str = "ROBOSTATS_TBA_API_KEY";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "ROBOSTATS_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "ROBOSTATS_HTTP_TIMEOUT";
}

/// Fixed strings shared by renderers and tests
pub mod messages {
    pub const NO_MATCHES: &str = "No matches found.";
    pub const INVALID_TEAM: &str = "# Invalid Team Number";
    pub const NO_FTC_RESULTS: &str = "No teams found";
    pub const FTC_SEARCH_HINT: &str = "Type to search for FTC teams";
}
