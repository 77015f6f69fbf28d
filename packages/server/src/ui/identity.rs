//! Identity lookup for incoming connections.
//!
//! The login flow stores the user in an `auth` cookie as base64-encoded JSON.
//! Callers without the cookie may pass the name in `x-chat-identity`.

use axum::http::{HeaderMap, header};
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE},
};
use serde::Deserialize;

use crate::{domain::Identity, error::IdentityError};

pub const AUTH_COOKIE: &str = "auth";
pub const IDENTITY_HEADER: &str = "x-chat-identity";

#[derive(Debug, Deserialize)]
struct AuthCookie {
    name: String,
}

/// Resolve the identity attached to a request.
pub fn resolve_identity(headers: &HeaderMap) -> Result<Identity, IdentityError> {
    let token = auth_cookie(headers)
        .map(|value| decode_auth_cookie(&value))
        .or_else(|| identity_header(headers))
        .ok_or(IdentityError::Missing)?;

    Ok(Identity::new(token)?)
}

fn auth_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == AUTH_COOKIE)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.trim().is_empty())
}

fn identity_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get(IDENTITY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// The `name` field of a base64 JSON cookie, or the raw value.
fn decode_auth_cookie(value: &str) -> String {
    STANDARD
        .decode(value)
        .or_else(|_| URL_SAFE.decode(value))
        .ok()
        .and_then(|bytes| serde_json::from_slice::<AuthCookie>(&bytes).ok())
        .map(|cookie| cookie.name)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| value.to_string())
}
