//! Request authentication against the oauth token service.
//!
//! - [`request`]: header readers for already-authenticated requests
//! - [`client`]: token lookup over HTTP
//! - [`authenticator`]: the per-request pipeline that rewrites trust headers

pub mod authenticator;
pub mod client;
pub mod config;
pub mod request;

pub use authenticator::Authenticator;
pub use client::{OAuthClient, TokenLookup};
pub use config::OAuthConfig;
pub use request::{get_caller_id, get_client_id, is_public, InboundRequest};
