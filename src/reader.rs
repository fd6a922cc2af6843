//! Inbound side of the link: drain the device and forward text to a sink

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{ConnectionError, DecodeError, Result};

/// Wait for the next batch of buffered bytes.
///
/// A zero-length read means the other end is gone, never "nothing yet".
pub async fn read_available<'b, R>(
    conn: &mut R,
    buf: &'b mut [u8],
) -> std::result::Result<&'b [u8], ConnectionError>
where
    R: AsyncRead + Unpin,
{
    let n = conn.read(buf).await?;
    if n == 0 {
        return Err(ConnectionError::Closed);
    }
    Ok(&buf[..n])
}

/// Decode a chunk as ASCII text
pub fn decode(chunk: &[u8]) -> std::result::Result<String, DecodeError> {
    if let Some(offset) = chunk.iter().position(|b| !b.is_ascii()) {
        return Err(DecodeError {
            offset,
            byte: chunk[offset],
        });
    }
    Ok(chunk.iter().map(|&b| b as char).collect())
}

/// Forward every inbound chunk to `sink` until the connection or the decoder fails
pub async fn run<R, W>(mut source: R, mut sink: W, buffer_size: usize) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = vec![0u8; buffer_size.max(1)];
    loop {
        let chunk = read_available(&mut source, &mut buf).await?;
        log::debug!("Read {} bytes", chunk.len());
        let text = decode(chunk)?;
        sink.write_all(text.as_bytes()).await?;
        sink.flush().await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::duplex;

    #[test]
    fn decode_printable_ascii() {
        assert_eq!(decode(b"hello\n").unwrap(), "hello\n");
        assert_eq!(decode(b"").unwrap(), "");
    }

    #[test]
    fn decode_rejects_first_non_ascii_byte() {
        let err = decode(b"ok\xc3\xa9").unwrap_err();
        assert_eq!(err, DecodeError { offset: 2, byte: 0xc3 });
    }

    #[tokio::test]
    async fn read_available_returns_buffered_bytes() {
        let (mut conn, mut device) = duplex(64);
        device.write_all(b"abc").await.unwrap();

        let mut buf = [0u8; 16];
        let chunk = read_available(&mut conn, &mut buf).await.unwrap();
        assert_eq!(chunk, b"abc");
    }

    #[tokio::test]
    async fn read_available_reports_closed_device() {
        let (mut conn, device) = duplex(64);
        drop(device);

        let mut buf = [0u8; 16];
        let err = read_available(&mut conn, &mut buf).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Closed));
    }

    #[tokio::test]
    async fn forwards_text_verbatim() {
        let (conn, mut device) = duplex(64);
        device.write_all(b"hello\n").await.unwrap();
        drop(device);

        let mut out = Vec::new();
        let result = run(conn, &mut out, 64).await;

        assert!(matches!(result, Err(Error::Connection(ConnectionError::Closed))));
        assert_eq!(out, b"hello\n");
    }

    #[tokio::test]
    async fn stops_on_non_ascii_input() {
        let (conn, mut device) = duplex(64);
        device.write_all(b"\xff").await.unwrap();

        let mut out = Vec::new();
        let result = run(conn, &mut out, 64).await;

        match result {
            Err(Error::Decode(e)) => assert_eq!(e, DecodeError { offset: 0, byte: 0xff }),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(out.is_empty());
    }
}
