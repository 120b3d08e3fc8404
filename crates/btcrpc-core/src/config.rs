//! Connection settings for a single node.
//!
//! A [`ClientConfig`] is built once and handed to
//! [`HttpRpcClient::new`](crate::rpc::HttpRpcClient::new); the client never
//! mutates it afterwards. The struct also deserializes from the shape an
//! external config loader produces (`login`, `password`, `host`, `port`,
//! `content_type`, `use_tls`).

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// Content type the node expects when none is configured.
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    login: String,
    #[serde(default)]
    password: String,
    host: String,
    port: String,
    #[serde(default = "default_content_type")]
    content_type: String,
    #[serde(default)]
    use_tls: bool,
    #[serde(skip, default = "default_connect_timeout")]
    connect_timeout: Option<Duration>,
    #[serde(skip, default = "default_timeout")]
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Unauthenticated plain-HTTP config for `host:port`.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            login: String::new(),
            password: String::new(),
            host: host.into(),
            port: port.into(),
            content_type: default_content_type(),
            use_tls: false,
            connect_timeout: default_connect_timeout(),
            timeout: default_timeout(),
        }
    }

    /// Set Basic-auth credentials. Auth is only sent when both are non-empty.
    pub fn with_credentials(
        mut self,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.login = login.into();
        self.password = password.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Transport deadlines, handed to `reqwest` unchanged. `None` disables
    /// the corresponding timeout.
    pub fn with_timeouts(mut self, connect: Option<Duration>, total: Option<Duration>) -> Self {
        self.connect_timeout = connect;
        self.timeout = total;
        self
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn use_tls(&self) -> bool {
        self.use_tls
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn scheme(&self) -> &'static str {
        if self.use_tls {
            "https"
        } else {
            "http"
        }
    }

    /// `scheme://host:port`, with no trailing path.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.host, self.port)
    }
}

// Keeps the password out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("login", &self.login)
            .field("password", &password)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("content_type", &self.content_type)
            .field("use_tls", &self.use_tls)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_owned()
}

fn default_connect_timeout() -> Option<Duration> {
    Some(DEFAULT_CONNECT_TIMEOUT)
}

fn default_timeout() -> Option<Duration> {
    Some(DEFAULT_TIMEOUT)
}
