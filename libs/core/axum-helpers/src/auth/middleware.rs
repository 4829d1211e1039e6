use super::jwt::JwtAuth;
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

/// Cookie consulted when there is no `Authorization` header.
pub const TOKEN_COOKIE: &str = "jwt";

/// Token from `Authorization: Bearer <token>`, falling back to the `jwt` cookie.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());

    bearer.or_else(|| {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .find_map(|cookie| {
                let (name, value) = cookie.trim().split_once('=')?;
                (name == TOKEN_COOKIE && !value.is_empty()).then_some(value)
            })
    })
}

/// Rejects the request with 401 unless it carries a valid token.
///
/// On success the decoded [`JwtClaims`](super::JwtClaims) are inserted into the
/// request extensions.
pub async fn jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = extract_token(&headers) else {
        tracing::debug!("No token in Authorization header or cookie");
        return Err(AppError::Unauthorized("no token provided".to_string()));
    };

    let claims = auth.verify_token(token).map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AppError::Unauthorized("invalid or expired token".to_string())
    })?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
