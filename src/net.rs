use smol::net::{self, UdpSocket};
use std::io::{Error, ErrorKind, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Returns the local address the host would use to reach `address`
/// (`host:port`). Connecting a UDP socket only consults the routing table,
/// nothing is sent.
pub async fn local_ip(address: &str) -> Result<IpAddr> {
    let remotes = net::resolve(address).await?;
    first_local_ip(&remotes).await
}

// Tries each remote in order, the first one that binds and connects wins.
async fn first_local_ip(remotes: &[SocketAddr]) -> Result<IpAddr> {
    let mut last_err = Error::new(ErrorKind::AddrNotAvailable, "no addresses to connect to");
    for remote in remotes {
        match connected_local_ip(*remote).await {
            Ok(ip) => return Ok(ip),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

async fn connected_local_ip(remote: SocketAddr) -> Result<IpAddr> {
    let unspecified = match remote {
        SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
    };
    let socket = UdpSocket::bind(SocketAddr::new(unspecified, 0)).await?;
    socket.connect(remote).await?;
    Ok(socket.local_addr()?.ip())
}
