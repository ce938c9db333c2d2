pub mod cors;
pub mod request_id;

pub use cors::{cors_middleware, CorsPolicy, PERMISSIVE};
pub use request_id::{make_span_with_request_id, request_id_middleware, RequestId};
