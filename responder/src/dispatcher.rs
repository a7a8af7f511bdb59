use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use resolution::Resolver;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;

use crate::handler::handle_datagram;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
pub const MAX_MESSAGE_SIZE: usize = 512;

/// Owns the socket and hands every datagram to its own task.
pub struct Dispatcher {
    socket: Arc<UdpSocket>,
    resolver: Arc<Resolver>,
    in_flight: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    /// `max_in_flight` caps the number of datagrams being handled at once;
    /// `None` spawns without limit.
    pub async fn bind(
        addr: SocketAddr,
        resolver: Arc<Resolver>,
        max_in_flight: Option<usize>,
    ) -> io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;

        Ok(Self {
            socket: Arc::new(socket),
            resolver,
            in_flight: max_in_flight.map(|n| Arc::new(Semaphore::new(n))),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn run(&self) {
        let mut buf = [0u8; MAX_MESSAGE_SIZE];

        loop {
            // Wait for a free slot before reading, so a full server stops
            // draining the socket instead of queueing tasks.
            let permit = match &self.in_flight {
                Some(semaphore) => match semaphore.clone().acquire_owned().await {
                    Ok(permit) => Some(permit),
                    Err(e) => {
                        tracing::error!(error = %e, "in-flight limiter closed");
                        return;
                    }
                },
                None => None,
            };

            let (len, peer) = match udp_recv(&self.socket, &mut buf).await {
                Some(received) => received,
                None => continue,
            };

            let request = Bytes::copy_from_slice(&buf[..len]);
            let socket = self.socket.clone();
            let resolver = self.resolver.clone();

            tokio::spawn(async move {
                respond(&socket, &resolver, &request, peer).await;
                drop(permit);
            });
        }
    }
}

async fn respond(socket: &UdpSocket, resolver: &Resolver, request: &[u8], peer: SocketAddr) {
    let response = match handle_datagram(resolver, request) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(error = %e, %peer, len = request.len(), "dropping malformed query");
            return;
        }
    };

    if let Err(e) = socket.send_to(&response, peer).await {
        tracing::warn!(error = %e, %peer, "failed to send response");
    }
}

async fn udp_recv(socket: &UdpSocket, buf: &mut [u8]) -> Option<(usize, SocketAddr)> {
    match socket.recv_from(buf).await {
        Ok(received) => Some(received),
        Err(e) => {
            // ICMP port unreachable from an earlier send surfaces here on
            // some platforms.
            if is_connection_error(&e) {
                return None;
            }

            tracing::error!(error = %e, "UDP receive error");
            tokio::time::sleep(Duration::from_millis(100)).await;
            None
        }
    }
}

fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
