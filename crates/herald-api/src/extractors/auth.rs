//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header and
//! turns the claims into the caller identity the services consume. A
//! missing or malformed token is `unauthenticated` before any handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use herald_service::CallerIdentity;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a JWT bearer token
#[derive(Debug, Clone)]
pub struct AuthCaller(pub CallerIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthCaller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let claims = app_state.jwt_service().verify(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::InvalidAuthFormat
        })?;

        let mut caller = CallerIdentity::authenticated(claims.sub)
            .with_claims(claims.admin, claims.moderator);
        caller.display_name = claims.name;
        caller.email = claims.email;

        Ok(AuthCaller(caller))
    }
}
