use crate::rpc::codec::{self, CodecError};
use crate::rpc::messages::*;
use crate::rpc::service::Tictactoe;
use crate::rpc::status::RpcStatus;
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Deadline for one call, dial included
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Idle connections kept for reuse
const MAX_IDLE_CONNECTIONS: usize = 16;

/// Client for the binary RPC wire.
///
/// Each call checks a connection out of a small idle pool (dialing when the
/// pool is empty) and owns it until the reply is read. Only a connection
/// that completed a full round trip goes back to the pool, so a cancelled or
/// failed call drops its socket along with any unread reply. The pool lock
/// is never held across network I/O. Transport failures and missed
/// deadlines surface as `Unavailable`; calls are never retried.
pub struct RpcClient {
    endpoint: String,
    call_timeout: Duration,
    idle: Mutex<Vec<TcpStream>>,
}

impl RpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_CALL_TIMEOUT)
    }

    pub fn with_timeout(endpoint: impl Into<String>, call_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            call_timeout,
            idle: Mutex::new(Vec::new()),
        }
    }

    async fn checkout(&self) -> Result<TcpStream, CodecError> {
        if let Some(stream) = self.idle.lock().await.pop() {
            return Ok(stream);
        }
        debug!("Dialing RPC server");
        Ok(TcpStream::connect(&self.endpoint).await?)
    }

    async fn checkin(&self, stream: TcpStream) {
        let mut idle = self.idle.lock().await;
        if idle.len() < MAX_IDLE_CONNECTIONS {
            idle.push(stream);
        }
    }

    #[instrument(skip(self, request), fields(endpoint = %self.endpoint, method = request.method()))]
    async fn call(&self, request: RpcRequest) -> Result<RpcResponse, RpcStatus> {
        let exchange = async {
            let mut stream = self.checkout().await?;
            let response = round_trip(&mut stream, &request).await?;
            Ok::<_, CodecError>((stream, response))
        };

        match timeout(self.call_timeout, exchange).await {
            Ok(Ok((stream, response))) => {
                self.checkin(stream).await;
                Ok(response)
            }
            Ok(Err(e)) => {
                warn!(error = %e, "RPC transport failure");
                Err(RpcStatus::unavailable(format!("{}: {}", self.endpoint, e)))
            }
            Err(_) => {
                warn!(timeout = ?self.call_timeout, "RPC call timed out");
                Err(RpcStatus::unavailable(format!(
                    "{}: no reply within {:?}",
                    self.endpoint, self.call_timeout
                )))
            }
        }
    }
}

async fn round_trip(stream: &mut TcpStream, request: &RpcRequest) -> Result<RpcResponse, CodecError> {
    codec::write_frame(stream, request).await?;
    codec::read_frame(stream).await
}

fn unexpected(response: RpcResponse) -> RpcStatus {
    match response {
        RpcResponse::Error(status) => status,
        other => RpcStatus::internal(format!("unexpected response: {:?}", other)),
    }
}

#[async_trait]
impl Tictactoe for RpcClient {
    async fn create_game(
        &self,
        req: CreateGameRequest,
    ) -> Result<CreateGameResponse, RpcStatus> {
        match self.call(RpcRequest::CreateGame(req)).await? {
            RpcResponse::CreateGame(resp) => Ok(resp),
            other => Err(unexpected(other)),
        }
    }

    async fn make_move(&self, req: MakeMoveRequest) -> Result<MakeMoveResponse, RpcStatus> {
        match self.call(RpcRequest::MakeMove(req)).await? {
            RpcResponse::MakeMove(resp) => Ok(resp),
            other => Err(unexpected(other)),
        }
    }

    async fn get_game_state(
        &self,
        req: GetGameStateRequest,
    ) -> Result<GetGameStateResponse, RpcStatus> {
        match self.call(RpcRequest::GetGameState(req)).await? {
            RpcResponse::GetGameState(resp) => Ok(resp),
            other => Err(unexpected(other)),
        }
    }
}
