use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::CoreError;

/// Credentials are only used when both halves are non-empty.
pub(super) fn resolve_auth(login: &str, password: &str) -> Option<(String, String)> {
    if login.is_empty() || password.is_empty() {
        return None;
    }
    Some((login.to_owned(), password.to_owned()))
}

pub(super) fn parse_base_url(config: &ClientConfig) -> Result<String, CoreError> {
    if config.host().is_empty() {
        return Err(CoreError::Config("rpc host must not be empty".to_owned()));
    }
    if config.port().is_empty() {
        return Err(CoreError::Config("rpc port must not be empty".to_owned()));
    }

    let base_url = config.base_url();
    let parsed = Url::parse(&base_url).map_err(|e| {
        CoreError::Config(format!(
            "invalid node address `{base_url}`: expected scheme://host:port ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(CoreError::Config(format!(
                "unsupported connection scheme `{other}`; expected http or https"
            )));
        }
    }

    // The host must not smuggle in a path, userinfo, query or second port.
    let port: u16 = config.port().parse().map_err(|e| {
        CoreError::Config(format!("invalid rpc port `{}`: {e}", config.port()))
    })?;
    let has_extras = parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
        || !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.port_or_known_default() != Some(port);
    if has_extras {
        return Err(CoreError::Config(format!(
            "invalid node address `{base_url}`: expected scheme://host:port with a bare host"
        )));
    }

    Ok(base_url)
}

pub(super) fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, CoreError> {
    let mut builder = reqwest::Client::builder()
        .pool_max_idle_per_host(32)
        .tcp_nodelay(true);
    if let Some(connect_timeout) = config.connect_timeout() {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| CoreError::Config(format!("build HTTP transport: {e}")))
}
