//! Caller identity for Trailhead
//!
//! Provides:
//! - JWT verification (tokens are minted by the account service)
//! - Resolution of the calling user from request headers

pub mod jwt;

pub use jwt::{extract_token_from_header, Claims, JwtValidator, TokenValidationResult};

use hyper::HeaderMap;

use crate::types::{TrailheadError, UserId};

/// Header accepted in place of a token when running in dev mode
pub const DEV_USER_HEADER: &str = "x-user-id";

/// Work out who is calling
///
/// A bearer token always wins. Without one, dev mode falls back to
/// `X-User-Id`; production rejects the request.
pub fn resolve_caller(
    headers: &HeaderMap,
    jwt: &JwtValidator,
    dev_mode: bool,
) -> Result<UserId, TrailheadError> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());

    if let Some(token) = extract_token_from_header(auth_header) {
        let result = jwt.verify_token(token);
        return match result.claims {
            Some(claims) if result.valid => Ok(claims.user_id()),
            _ => Err(TrailheadError::Unauthorized(
                result.error.unwrap_or_else(|| "Invalid token".into()),
            )),
        };
    }

    if dev_mode {
        if let Some(user) = headers
            .get(DEV_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return Ok(UserId::new(user));
        }
    }

    Err(TrailheadError::Unauthorized("Missing bearer token".into()))
}
