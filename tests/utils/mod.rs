pub mod macros;
pub mod prelude;
mod request;
mod response;
pub mod setup;

use jsonwebtoken::{EncodingKey, Header};
use serde::Serialize;

pub const JWT_SECRET: &str = "integration-test-secret";

#[derive(Debug, Clone)]
pub struct Employee {
    pub name: String,
    pub access_token: String,
}

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    name: &'a str,
    exp: i64,
}

#[allow(unused)]
pub fn employee(name: &str) -> Employee {
    let claims = Claims {
        sub: "1",
        name,
        exp: chrono::Utc::now().timestamp() + 3600,
    };

    let access_token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to sign token");

    Employee {
        name: name.to_owned(),
        access_token,
    }
}

/// Today's date in the wire format.
#[allow(unused)]
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%d/%m/%Y").to_string()
}

#[allow(unused)]
pub fn days_from_today(days: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(days))
        .format("%d/%m/%Y")
        .to_string()
}
