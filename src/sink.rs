use crate::error::FeedError;
use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

/// Where encoded lines go. One call, one datagram.
pub trait DatagramSink {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize>;
}

/// Fire-and-forget UDP sender bound to an ephemeral local port.
pub struct UdpSink {
    socket: UdpSocket,
    dest: SocketAddr,
}

impl UdpSink {
    /// Resolves `dest` (IPv4 preferred) and binds a socket of the matching family.
    pub fn connect(dest: &str) -> Result<Self, FeedError> {
        let addrs: Vec<SocketAddr> =
            dest.to_socket_addrs().map_err(FeedError::Transport)?.collect();
        let dest = addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .copied()
            .ok_or_else(|| {
                FeedError::Transport(io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("{dest} did not resolve to any address"),
                ))
            })?;
        // "0.0.0.0:0" lets the OS pick the local port
        let bind_addr = if dest.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
        let socket = UdpSocket::bind(bind_addr).map_err(FeedError::Transport)?;
        log::debug!("bound {:?}, sending to {}", socket.local_addr().ok(), dest);
        Ok(Self { socket, dest })
    }

    pub fn dest(&self) -> SocketAddr {
        self.dest
    }
}

impl DatagramSink for UdpSink {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
        self.socket.send_to(payload, self.dest)
    }
}
