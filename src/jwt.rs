use crate::error::{self, Error};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Claims of an employee access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee identifier.
    pub sub: String,
    /// Employee display name, recorded on the comments they write.
    pub name: String,
    pub exp: u64,
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .remove::<Claims>()
            .ok_or(error::COULD_NOT_GET_CLAIMS)
    }
}

static VALIDATION: Lazy<Validation> = Lazy::new(|| {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 5;
    validation.set_required_spec_claims(&["exp", "sub"]);

    validation
});

pub struct Jwt {
    decoding: DecodingKey,
}

impl Jwt {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn get_claims(&self, token: &str) -> error::Result<Claims> {
        match jsonwebtoken::decode::<Claims>(token, &self.decoding, &VALIDATION) {
            Ok(decoded) => Ok(decoded.claims),
            Err(err) => {
                warn!(error = err.to_string(), "tried invalid token");
                Err(error::COULD_NOT_GET_CLAIMS)
            }
        }
    }
}
