pub mod client;
pub mod codec;
pub mod messages;
pub mod server;
pub mod service;
pub mod status;

pub use client::RpcClient;
pub use server::RpcServer;
pub use service::{Tictactoe, TictactoeService};
pub use status::{Code, RpcStatus};
