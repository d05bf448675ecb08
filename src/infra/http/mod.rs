pub mod request;
pub mod reqwest_transport;
pub mod transport;

pub use request::{HttpRequest, Method};
pub use reqwest_transport::ReqwestTransport;
pub use transport::{HttpTransport, TransportError};
