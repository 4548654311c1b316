//! Session endpoint
//!
//! One session read and one profile lookup per request, through whichever
//! strategy the server was configured with.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
};
use plantventory_core::resolve_session;

use crate::error::Result;
use crate::state::AppState;

/// The visitor's cookies as one header value.
///
/// Every `Cookie` header is kept (HTTP/2 clients may split them), joined with
/// `"; "`. Values that are not UTF-8 are dropped with a warning.
pub fn forwarded_cookie(headers: &HeaderMap) -> Option<String> {
    let parts: Vec<&str> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| match std::str::from_utf8(value.as_bytes()) {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("dropping undecodable cookie header: {}", e);
                None
            }
        })
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();

    (!parts.is_empty()).then(|| parts.join("; "))
}

pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let resolver = state.sessions.for_request(forwarded_cookie(&headers));
    let view = resolve_session(resolver.as_ref(), state.profiles.as_ref()).await?;
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(view)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn given_no_cookie_header_then_nothing_forwarded() {
        assert_eq!(forwarded_cookie(&HeaderMap::new()), None);
    }

    #[test]
    fn given_split_cookie_headers_then_all_forwarded_in_order() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("session=ada"));

        assert_eq!(
            forwarded_cookie(&headers).as_deref(),
            Some("theme=dark; session=ada")
        );
    }

    #[test]
    fn given_non_ascii_utf8_cookie_then_forwarded_verbatim() {
        let mut headers = HeaderMap::new();
        headers.append(
            header::COOKIE,
            HeaderValue::from_bytes("session=ada; name=José".as_bytes()).unwrap(),
        );

        assert_eq!(
            forwarded_cookie(&headers).as_deref(),
            Some("session=ada; name=José")
        );
    }

    #[test]
    fn given_undecodable_cookie_then_only_valid_ones_forwarded() {
        let mut headers = HeaderMap::new();
        headers.append(
            header::COOKIE,
            HeaderValue::from_bytes(&[b's', b'=', 0xFF, 0xFE]).unwrap(),
        );
        headers.append(header::COOKIE, HeaderValue::from_static("session=ada"));

        assert_eq!(forwarded_cookie(&headers).as_deref(), Some("session=ada"));
    }
}
