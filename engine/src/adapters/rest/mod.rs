//! REST Driving Adapter
//!
//! Exposes the use cases through an HTTP JSON API, over TCP or a Unix
//! domain socket.

pub mod handlers;
pub mod router;
pub mod unix_socket;

pub use router::build_router;
#[cfg(unix)]
pub use unix_socket::serve_on_unix_socket;
pub use unix_socket::serve_on_tcp;
