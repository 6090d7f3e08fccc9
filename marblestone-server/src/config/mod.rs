use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub mongodb: MongoConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    #[serde(default = "default_uri")]
    pub uri: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret for the bearer-token guard. Empty when unset; nothing
    /// checks it at startup because no route enforces the guard.
    #[serde(default)]
    pub access_token_secret: String,
}

fn default_port() -> u16 {
    5000
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_database() -> String {
    "marblestone".to_string()
}

impl Default for MongoConfig {
    fn default() -> Self {
        MongoConfig {
            uri: default_uri(),
            database: default_database(),
            username: None,
            password: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional `configuration` file and
    /// `APP__`-prefixed environment variables, then apply the legacy
    /// flat variable names (`PORT`, `DB_USER`, `DB_PASS`, `ACCESS_TOKEN`)
    /// the deployment has always used. No value is validated.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut config: ServerConfig = config.try_deserialize()?;

        if let Ok(port) = env::var("PORT") {
            config.port = port.parse().unwrap_or(config.port);
        }
        if config.mongodb.username.is_none() {
            config.mongodb.username = env::var("DB_USER").ok();
        }
        if config.mongodb.password.is_none() {
            config.mongodb.password = env::var("DB_PASS").ok();
        }
        if config.auth.access_token_secret.is_empty() {
            if let Ok(secret) = env::var("ACCESS_TOKEN") {
                config.auth.access_token_secret = secret;
            }
        }

        Ok(config)
    }
}
