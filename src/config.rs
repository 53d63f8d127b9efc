use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Tic-tac-toe backend: binary RPC server plus HTTP/JSON gateway
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe-backend", version, about, long_about = None)]
pub struct Config {
    /// Address both listeners bind to
    #[arg(long, env = "TICTACTOE_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port of the binary RPC server
    #[arg(long, env = "TICTACTOE_RPC_PORT", default_value_t = 50051)]
    pub rpc_port: u16,

    /// Port of the HTTP/JSON gateway
    #[arg(long, env = "TICTACTOE_HTTP_PORT", default_value_t = 8080)]
    pub http_port: u16,

    /// RPC server the gateway dials (defaults to 127.0.0.1:<rpc-port>)
    #[arg(long, env = "TICTACTOE_RPC_ENDPOINT")]
    pub rpc_endpoint: Option<String>,

    /// Deadline in milliseconds for one gateway call to the RPC server
    #[arg(long, env = "TICTACTOE_RPC_TIMEOUT_MS", default_value_t = 5000)]
    pub rpc_timeout_ms: u64,
}

impl Config {
    pub fn rpc_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.rpc_port)
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    pub fn gateway_endpoint(&self) -> String {
        self.rpc_endpoint
            .clone()
            .unwrap_or_else(|| format!("127.0.0.1:{}", self.rpc_port))
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc_timeout_ms)
    }
}
