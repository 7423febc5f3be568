pub mod http;
pub mod query;
pub mod transport;

pub use http::HttpTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
