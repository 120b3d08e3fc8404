mod cli;

use std::time::Duration;

use btcrpc_core::{ClientConfig, HttpRpcClient, NodeRpc, Operation};
use clap::Parser;
use eyre::{eyre, WrapErr};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    let config = ClientConfig::new(&args.host, &args.port)
        .with_credentials(&args.login, &args.password)
        .with_content_type(&args.content_type)
        .with_tls(args.tls)
        .with_timeouts(Some(Duration::from_secs(10)), timeout);
    tracing::debug!(?config, "loaded client config");

    let rpc = HttpRpcClient::new(config).context("configure RPC client")?;
    let params: Vec<serde_json::Value> = args.params.iter().map(|raw| parse_param(raw)).collect();

    if let Some(warning) = check_operation_shape(&args.method, &params) {
        tracing::warn!("{warning}");
    }

    let outcome = match rpc.call(&args.method, params).await {
        Ok(outcome) => outcome,
        Err(err) => {
            let context = format_call_error(rpc.url(), &err.to_string());
            return Err(err)
                .wrap_err(context)
                .wrap_err_with(|| format!("while calling `{}`", args.method));
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context("render RPC outcome")?
    );

    if outcome.error().is_some() {
        return Err(eyre!("node returned an RPC error (HTTP {})", outcome.status_code));
    }
    if !(200..300).contains(&outcome.status_code) {
        tracing::warn!(status = outcome.status_code, "node answered with a non-success status");
        if outcome.status_code == 401 {
            tracing::warn!("hint: authentication failed; verify --login/--password");
        }
        return Err(eyre!("HTTP status {}", outcome.status_code));
    }

    Ok(())
}

/// JSON when it parses (`1`, `true`, `"x"`, `[..]`), plain string otherwise.
fn parse_param(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_owned()))
}

/// Warn when a known method gets params that do not fit its table entry.
/// The call is still sent unchanged; the node has the final word.
fn check_operation_shape(method: &str, params: &[serde_json::Value]) -> Option<String> {
    if !Operation::METHODS.contains(&method) || Operation::from_name(method, params).is_some() {
        return None;
    }
    Some(format!(
        "params for `{method}` do not match its usual positional shape; sending as given"
    ))
}

/// Context line plus an actionable hint; the error itself stays in the chain.
fn format_call_error(url: &str, source_error: &str) -> String {
    let mut lines = vec![format!("RPC call to `{url}` failed")];

    if source_error.contains("dns error") {
        lines.push("hint: hostname resolution failed; verify --host and your network".into());
    } else if source_error.contains("tls")
        || source_error.contains("certificate")
        || source_error.contains("SSL")
    {
        lines.push(
            "hint: TLS handshake failed; check whether the node actually serves HTTPS".into(),
        );
    } else if source_error.contains("error sending request for url") {
        lines.push(
            "hint: request could not be sent; verify the node is running and reachable".into(),
        );
    } else if source_error.contains("invalid RPC response") {
        lines.push("hint: the endpoint answered but not with a JSON-RPC envelope".into());
    }

    lines.join("\n")
}
