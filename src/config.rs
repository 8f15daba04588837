use anyhow::Context;
use std::env;

const DEFAULT_PORT: u16 = 3333;

/// Process configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .inspect_err(|_| error!("DATABASE_URL is not set"))
            .context("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .inspect_err(|_| error!("JWT_SECRET is not set"))
            .context("JWT_SECRET")?;

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .inspect_err(|_| error!(%port, "PORT is not a valid port number"))
                .context("PORT")?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
