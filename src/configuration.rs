use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvSource, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::db_interaction::StockPolicy;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub jwt: JWTSettings,
    pub orders: OrderSettings
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

#[derive(Deserialize, Debug, Clone)]
pub struct DatabaseSettings{
    pub username: String,
    pub password: SecretString,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub min_idle: u32,
    pub max_lifetime_secs: u64,
    pub idle_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub statement_timeout_ms: u64,
    #[serde(default)]
    pub run_migrations: bool
}

impl DatabaseSettings {
    // Url of the server itself, used to create databases
    pub fn get_database_url(&self) -> String{
        format!(
            "postgres://{}:{}@{}:{}",
            self.username,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }

    // Url of the application database
    pub fn get_database_table_url(&self) -> String{
        format!("{}/{}", self.get_database_url(), self.name)
    }

    pub fn max_lifetime(&self) -> Duration{
        Duration::from_secs(self.max_lifetime_secs)
    }

    pub fn idle_timeout(&self) -> Duration{
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration{
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct JWTSettings{
    pub secret: SecretString,
    pub expiry_hours: u64
}

#[derive(Deserialize, Debug, Clone)]
pub struct OrderSettings{
    #[serde(default)]
    pub enforce_inventory: bool
}

impl OrderSettings {
    pub fn stock_policy(&self) -> StockPolicy{
        if self.enforce_inventory {
            StockPolicy::Reserve
        } else {
            StockPolicy::Trust
        }
    }
}

pub enum Environment{
    Local,
    Production
}

impl Environment {
    pub fn as_str(&self) -> &'static str{
        match self {
            Environment::Local => "local",
            Environment::Production => "production"
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment, use either `local` or `production`",
                other
            ))
        }
    }
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .add_source(File::with_name(&format!("configuration/{}.yaml", environment.as_str())))
            .add_source(
                EnvSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?
            .try_deserialize::<Settings>()
    }
}
