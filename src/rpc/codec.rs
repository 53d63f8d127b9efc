//! Length-prefixed bincode framing.
//!
//! Each frame is a 4-byte big-endian payload length followed by the
//! bincode-encoded message.

use derive_more::{Display, Error, From};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest accepted payload
pub const MAX_FRAME_LEN: usize = 64 * 1024;

#[derive(Debug, Display, Error, From)]
pub enum CodecError {
    #[display("i/o error: {_0}")]
    Io(std::io::Error),
    #[display("encoding error: {_0}")]
    Encoding(bincode::Error),
    #[display("frame of {len} bytes exceeds limit of {}", MAX_FRAME_LEN)]
    #[from(ignore)]
    FrameTooLarge { len: usize },
}

impl CodecError {
    /// The peer closed the stream between frames
    pub fn is_eof(&self) -> bool {
        matches!(self, CodecError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

/// Encode and write one frame, then flush
pub async fn write_frame<W, T>(writer: &mut W, message: &T) -> Result<(), CodecError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let payload = bincode::serialize(message)?;
    if payload.len() > MAX_FRAME_LEN {
        return Err(CodecError::FrameTooLarge { len: payload.len() });
    }

    writer.write_u32(payload.len() as u32).await?;
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Read the raw payload of one frame
pub async fn read_payload<R>(reader: &mut R) -> Result<Vec<u8>, CodecError>
where
    R: AsyncRead + Unpin,
{
    let len = reader.read_u32().await? as usize;
    if len > MAX_FRAME_LEN {
        return Err(CodecError::FrameTooLarge { len });
    }

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    Ok(payload)
}

pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, CodecError> {
    Ok(bincode::deserialize(payload)?)
}

/// Read and decode one frame
pub async fn read_frame<R, T>(reader: &mut R) -> Result<T, CodecError>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    let payload = read_payload(reader).await?;
    decode(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::messages::{MakeMoveRequest, RpcRequest};

    #[tokio::test]
    async fn test_frame_over_duplex() {
        let (mut client, mut server) = tokio::io::duplex(1024);
        let request = RpcRequest::MakeMove(MakeMoveRequest {
            game_id: "g1".to_string(),
            row: 2,
            col: 1,
            player: "O".to_string(),
        });

        write_frame(&mut client, &request).await.unwrap();
        let received: RpcRequest = read_frame(&mut server).await.unwrap();
        assert_eq!(received, request);
    }

    #[tokio::test]
    async fn test_oversized_length_prefix_is_rejected() {
        let (mut client, mut server) = tokio::io::duplex(64);
        client.write_u32(MAX_FRAME_LEN as u32 + 1).await.unwrap();

        let err = read_payload(&mut server).await.unwrap_err();
        assert!(matches!(err, CodecError::FrameTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_closed_stream_reports_eof() {
        let (client, mut server) = tokio::io::duplex(64);
        drop(client);

        let err = read_payload(&mut server).await.unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn test_garbage_payload_fails_to_decode() {
        let err = decode::<RpcRequest>(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
        assert!(matches!(err, CodecError::Encoding(_)));
    }
}
