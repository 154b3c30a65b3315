use app::api::{PORTFOLIO_SOURCE, RESUME_SOURCE};
use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};
use std::sync::LazyLock;
use url::Url;

/// Origins the browser fetches the remote documents from.
pub fn document_origins() -> Vec<String> {
    let mut origins: Vec<String> = [PORTFOLIO_SOURCE.url, RESUME_SOURCE.url]
        .into_iter()
        .filter_map(|raw| match Url::parse(raw) {
            Ok(url) => Some(url.origin().ascii_serialization()),
            Err(err) => {
                tracing::warn!(%err, url = raw, "Ignoring unparsable document url");
                None
            }
        })
        .collect();
    origins.sort();
    origins.dedup();
    origins
}

/// Builds the Content-Security-Policy. `connect_origins` are added to
/// `connect-src` next to `'self'`.
pub fn content_security_policy(connect_origins: &[String]) -> String {
    let connect_src = std::iter::once("'self'")
        .chain(connect_origins.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");

    [
        "default-src 'self'".to_owned(),
        "script-src 'self' 'wasm-unsafe-eval'".to_owned(), // Required for WASM
        "style-src 'self' 'unsafe-inline'".to_owned(),     // Leptos inline styles
        "img-src 'self' data: https:".to_owned(),
        "font-src 'self' data:".to_owned(),
        format!("connect-src {connect_src}"),
        "frame-ancestors 'none'".to_owned(),
        "base-uri 'self'".to_owned(),
        "form-action 'self'".to_owned(),
    ]
    .join("; ")
}

static CSP: LazyLock<HeaderValue> = LazyLock::new(|| {
    HeaderValue::from_str(&content_security_policy(&document_origins()))
        .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'"))
});

/// Security headers middleware
/// Adds the security headers to every response
pub async fn security_headers(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    // X-Frame-Options: Prevent clickjacking
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );

    // X-Content-Type-Options: Prevent MIME type sniffing
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );

    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    headers.insert(HeaderName::from_static("content-security-policy"), CSP.clone());

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=()",
        ),
    );

    Ok(response)
}
