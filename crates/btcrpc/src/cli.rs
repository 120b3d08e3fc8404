use clap::Parser;

/// btcrpc — issue a single JSON-RPC call to a Bitcoin Core compatible node.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node host name or IP address.
    #[arg(long, default_value = "127.0.0.1", env = "BTCRPC_HOST")]
    pub host: String,

    /// Node RPC port.
    #[arg(long, default_value = "8332", env = "BTCRPC_PORT")]
    pub port: String,

    /// RPC username. Auth is only sent when both login and password are set.
    #[arg(long, default_value = "", env = "BTCRPC_LOGIN")]
    pub login: String,

    /// RPC password.
    #[arg(long, default_value = "", env = "BTCRPC_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Content-Type header sent with each request.
    #[arg(long, default_value = btcrpc_core::config::DEFAULT_CONTENT_TYPE)]
    pub content_type: String,

    /// Connect over HTTPS.
    #[arg(long)]
    pub tls: bool,

    /// Overall request timeout in seconds (0 disables it).
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// RPC method name, e.g. `getbalance`.
    pub method: String,

    /// Positional params. Each is parsed as JSON when possible, otherwise
    /// sent as a string.
    pub params: Vec<String>,
}
