//! A single TCP connection carrying one request and one response.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

use log::{debug, warn};

use crate::client::config::DEFAULT_READ_CHUNK_SIZE;
use crate::client::error::Error;

/// An open connection to one server.
///
/// The handle is created by [`Connection::connect`] and consumed by
/// [`Connection::close`], so it cannot be reused across requests or
/// closed twice.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    addr: String,
}

impl Connection {
    /// Open a TCP connection to `host:port`.
    ///
    /// Name resolution, refused connections and unreachable networks all
    /// surface as [`Error::ConnectionError`]. There is no retry.
    pub fn connect(host: &str, port: u16) -> Result<Self, Error> {
        let addr = format!("{host}:{port}");
        debug!("Connecting to {addr}");

        let stream = TcpStream::connect((host, port)).map_err(|source| Error::ConnectionError {
            addr: addr.clone(),
            source,
        })?;

        debug!("Connected to {addr}");
        Ok(Self { stream, addr })
    }

    /// The `host:port` this connection was opened to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Write the whole buffer to the server.
    pub fn send_all(&mut self, bytes: &[u8]) -> Result<(), Error> {
        send_all(&mut self.stream, bytes)?;
        debug!("Sent {len} bytes to {addr}", len = bytes.len(), addr = self.addr);
        Ok(())
    }

    /// Read until the server closes its side of the connection.
    pub fn receive_all(&mut self, chunk_size: usize) -> Result<Vec<u8>, Error> {
        let received = receive_all(&mut self.stream, chunk_size)?;
        debug!("Received {len} bytes from {addr}", len = received.len(), addr = self.addr);
        Ok(received)
    }

    /// Release the socket.
    ///
    /// Shutdown failures are logged and otherwise ignored; the socket is
    /// dropped either way.
    pub fn close(self) {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => debug!("Closed connection to {addr}", addr = self.addr),
            // The peer already hung up
            Err(e) if e.kind() == ErrorKind::NotConnected => {
                debug!("Closed connection to {addr}", addr = self.addr)
            }
            Err(e) => warn!("Error closing connection to {addr}: {e}", addr = self.addr),
        }
    }
}

/// Write all of `bytes` to `stream`.
///
/// A single `write` may accept only part of the buffer; the remaining
/// tail is written again until nothing is left.
pub fn send_all(stream: &mut impl Write, bytes: &[u8]) -> std::io::Result<()> {
    let mut remaining = bytes;
    while !remaining.is_empty() {
        match stream.write(remaining) {
            Ok(0) => {
                return Err(std::io::Error::new(
                    ErrorKind::WriteZero,
                    "connection stopped accepting data",
                ))
            }
            Ok(n) => remaining = &remaining[n..],
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    stream.flush()
}

/// Read from `stream` in chunks of `chunk_size` bytes until a read
/// returns zero bytes.
///
/// Blocks until the peer closes the connection. A `chunk_size` of zero
/// uses [`DEFAULT_READ_CHUNK_SIZE`].
pub fn receive_all(stream: &mut impl Read, chunk_size: usize) -> std::io::Result<Vec<u8>> {
    let chunk_size = if chunk_size == 0 { DEFAULT_READ_CHUNK_SIZE } else { chunk_size };
    let mut buffer = Vec::new();
    let mut chunk = vec![0; chunk_size];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => buffer.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(buffer)
}
