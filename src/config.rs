use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, TogglError};
use crate::session::ReportSession;

pub const DEFAULT_API_BASE: &str = "https://www.toggl.com/api/v8";
pub const DEFAULT_REPORTS_BASE: &str = "https://toggl.com/reports/api/v2";
pub const DEFAULT_USER_AGENT_HEADER: &str = "toggl-report-api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Basic-auth password the service expects alongside an API token.
pub const API_TOKEN_PASSWORD: &str = "api_token";

pub const ENV_TOKEN: &str = "TOGGL_API_TOKEN";
pub const ENV_AGENT: &str = "TOGGL_USER_AGENT";
pub const ENV_API_BASE: &str = "TOGGL_API_BASE";
pub const ENV_REPORTS_BASE: &str = "TOGGL_REPORTS_BASE";

#[derive(Clone)]
pub struct TogglConfig {
    /// Value of the `user_agent` query parameter the reports API requires.
    pub agent: String,
    pub token: String,
    pub api_base: String,
    pub reports_base: String,
    pub user_agent_header: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl TogglConfig {
    pub fn new(agent: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            reports_base: DEFAULT_REPORTS_BASE.to_string(),
            user_agent_header: DEFAULT_USER_AGENT_HEADER.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Reads agent and token from the environment, with optional base URL overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`TogglConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = required_var(&lookup, ENV_TOKEN)?;
        let agent = required_var(&lookup, ENV_AGENT)?;
        let mut config = Self::new(agent, token);
        if let Some(base) = lookup(ENV_API_BASE) {
            config = config.with_api_base(base);
        }
        if let Some(base) = lookup(ENV_REPORTS_BASE) {
            config = config.with_reports_base(base);
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_reports_base(mut self, base: impl Into<String>) -> Self {
        self.reports_base = base.into();
        self
    }

    pub fn with_user_agent_header(mut self, ua: impl Into<String>) -> Self {
        self.user_agent_header = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    /// Rejects configurations that could never authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.agent.trim().is_empty() {
            return Err(TogglError::InvalidConfig("agent must not be empty".to_string()));
        }
        if self.token.trim().is_empty() {
            return Err(TogglError::InvalidConfig("token must not be empty".to_string()));
        }
        Ok(())
    }

    /// Resolves the workspace and returns a session ready to fetch reports.
    pub fn initialize(self) -> Result<ReportSession> {
        ReportSession::initialize(self)
    }

    pub fn api_url(&self, path: &str) -> String {
        join_url(&self.api_base, path)
    }

    pub fn reports_url(&self, path: &str) -> String {
        join_url(&self.reports_base, path)
    }
}

impl fmt::Debug for TogglConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglConfig")
            .field("agent", &self.agent)
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("reports_base", &self.reports_base)
            .field("user_agent_header", &self.user_agent_header)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn required_var<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| TogglError::InvalidConfig(format!("{name} is not set")))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
