// src/core/scanner/tcp_probe.rs

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, TcpStream};
use tokio::time::timeout;
use tracing::{debug, trace};

/// Resolves a host name or address literal to a single IP.
///
/// IPv4 answers are preferred; otherwise the first address returned is used.
pub async fn resolve_target(target: &str) -> io::Result<IpAddr> {
    debug!(target, "Resolving scan target.");
    let addrs: Vec<SocketAddr> = lookup_host((target, 0)).await?.collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses returned"))
}

/// Attempts one TCP connect. `true` only when the handshake completes within `connect_timeout`.
///
/// Refused, reset, unreachable and timed-out attempts all report `false`. The socket is
/// closed before returning in every case.
pub async fn probe_port(addr: SocketAddr, connect_timeout: Duration) -> bool {
    match timeout(connect_timeout, TcpStream::connect(addr)).await {
        Ok(Ok(stream)) => {
            drop(stream);
            trace!(%addr, "open");
            true
        }
        Ok(Err(e)) => {
            trace!(%addr, error = %e, "closed");
            false
        }
        Err(_) => {
            trace!(%addr, "timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::time::Instant;
    use tokio::net::{TcpListener, TcpSocket};

    #[tokio::test]
    async fn listening_port_is_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(probe_port(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    async fn closed_port_is_not_open() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        assert!(!probe_port(addr, Duration::from_millis(500)).await);
    }

    #[tokio::test]
    async fn unanswered_handshake_counts_as_closed() {
        let socket = TcpSocket::new_v4().unwrap();
        socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let listener = socket.listen(0).unwrap();
        let addr = listener.local_addr().unwrap();
        // Never accepted, so it occupies the only backlog slot.
        let _held = TcpStream::connect(addr).await.unwrap();

        let connect_timeout = Duration::from_millis(300);
        let started = Instant::now();
        assert!(!probe_port(addr, connect_timeout).await);
        assert!(started.elapsed() >= connect_timeout);
    }

    #[tokio::test]
    async fn literal_addresses_resolve_to_themselves() {
        let ip = resolve_target("127.0.0.1").await.unwrap();
        assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
    }

    #[tokio::test]
    async fn unresolvable_names_fail() {
        assert!(resolve_target("no-such-host.invalid").await.is_err());
    }
}
