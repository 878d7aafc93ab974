// Listener setup module
// Builds the TCP listener the accept loop runs on

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` bound to `addr`.
///
/// `SO_REUSEADDR` is set so a quick restart does not trip over sockets
/// lingering in TIME_WAIT. Bind errors propagate to the caller; there is
/// no retry.
pub fn create_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio's
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
