//! Header readers for requests that already went through the gate.
//!
//! All readers are total: an absent request or a bad header degrades to the
//! unauthenticated default (`true` for public, `0` for ids).

use http::{request::Parts, HeaderMap, HeaderName, Request, Uri};

pub(crate) const X_PUBLIC: HeaderName = HeaderName::from_static("x-public");
pub(crate) const X_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");
pub(crate) const X_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");

/// Inbound request as seen by the gate.
pub trait InboundRequest {
    fn headers(&self) -> &HeaderMap;
    fn headers_mut(&mut self) -> &mut HeaderMap;
    fn uri(&self) -> &Uri;
}

impl<B> InboundRequest for Request<B> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        Request::headers_mut(self)
    }

    fn uri(&self) -> &Uri {
        Request::uri(self)
    }
}

impl InboundRequest for Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn uri(&self) -> &Uri {
        &self.uri
    }
}

/// Returns true if the request needs no identity.
pub fn is_public<R: InboundRequest>(request: Option<&R>) -> bool {
    match request {
        None => true,
        Some(request) => request
            .headers()
            .get(X_PUBLIC)
            .is_some_and(|value| value == "true"),
    }
}

/// Returns the client id stamped by the gate, or 0.
pub fn get_client_id<R: InboundRequest>(request: Option<&R>) -> i64 {
    request.map_or(0, |request| parse_id(request.headers(), &X_CLIENT_ID))
}

/// Returns the caller id stamped by the gate, or 0.
pub fn get_caller_id<R: InboundRequest>(request: Option<&R>) -> i64 {
    request.map_or(0, |request| parse_id(request.headers(), &X_CALLER_ID))
}

fn parse_id(headers: &HeaderMap, name: &HeaderName) -> i64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
