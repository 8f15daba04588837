use crate::{
    error::{self, Error},
    jwt::Claims,
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// The authenticated employee issuing the request.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Employee
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;

        if claims.name.trim().is_empty() {
            warn!(employee = %claims.sub, "token without an employee name");
            return Err(error::COULD_NOT_GET_CLAIMS);
        }

        Ok(Employee {
            id: claims.sub,
            name: claims.name,
        })
    }
}
