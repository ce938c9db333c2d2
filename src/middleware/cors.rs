use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};

/// Fixed cross-origin policy applied to every response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: &'static str,
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
}

/// Allows any origin, the usual REST verbs and the two headers browsers send us
pub const PERMISSIVE: CorsPolicy = CorsPolicy {
    allow_origin: "*",
    allow_methods: "GET, POST, PUT, DELETE, OPTIONS",
    allow_headers: "Content-Type, Authorization",
};

impl CorsPolicy {
    /// Writes the three policy headers, replacing any existing values
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(self.allow_origin),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(self.allow_methods),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(self.allow_headers),
        );
    }
}

/// Adds the permissive CORS headers to every response.
///
/// OPTIONS requests are answered here with an empty 200 and never reach the
/// route handler.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::OK;
        PERMISSIVE.apply(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    PERMISSIVE.apply(response.headers_mut());
    response
}
