use crate::rpc::codec::{self, CodecError};
use crate::rpc::messages::{RpcRequest, RpcResponse};
use crate::rpc::service::{dispatch, Tictactoe};
use crate::rpc::status::RpcStatus;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, instrument, warn};

/// TCP server for the binary RPC wire
pub struct RpcServer {
    listener: TcpListener,
    service: Arc<dyn Tictactoe>,
}

impl RpcServer {
    /// Bind the listening socket. Failure here is fatal for the process.
    pub async fn bind(addr: SocketAddr, service: Arc<dyn Tictactoe>) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, service })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept connections until `shutdown` resolves, one task per connection
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        info!(addr = %self.local_addr()?, "RPC server running");
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("RPC server shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            let service = self.service.clone();
                            tokio::spawn(async move {
                                handle_connection(stream, peer, service).await;
                            });
                        }
                        Err(e) => {
                            warn!(error = %e, "Failed to accept RPC connection");
                        }
                    }
                }
            }
        }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }
}

/// Serve requests on one connection, in order, until the peer hangs up
#[instrument(skip(stream, service))]
async fn handle_connection(mut stream: TcpStream, peer: SocketAddr, service: Arc<dyn Tictactoe>) {
    debug!("RPC connection opened");

    loop {
        let payload = match codec::read_payload(&mut stream).await {
            Ok(payload) => payload,
            Err(e) if e.is_eof() => break,
            Err(e) => {
                warn!(error = %e, "Dropping RPC connection");
                break;
            }
        };

        let response = match codec::decode::<RpcRequest>(&payload) {
            Ok(request) => {
                debug!(method = request.method(), "RPC call");
                dispatch(service.as_ref(), request).await
            }
            Err(e) => {
                warn!(error = %e, "Malformed RPC request");
                RpcResponse::Error(RpcStatus::invalid_argument("malformed request"))
            }
        };

        if let Err(e) = codec::write_frame(&mut stream, &response).await {
            log_write_failure(&e);
            break;
        }
    }

    debug!("RPC connection closed");
}

fn log_write_failure(err: &CodecError) {
    match err {
        CodecError::Io(_) => warn!(error = %err, "Failed to write RPC response"),
        _ => error!(error = %err, "Failed to encode RPC response"),
    }
}
