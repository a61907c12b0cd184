use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{configuration::JWTSettings, models::User};

pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone)]
pub struct Tokenizer{
    pub secret: SecretString,
    pub expiry_hours: u64
}

impl Tokenizer {
    pub fn new(settings: &JWTSettings) -> Self {
        Self{
            secret: settings.secret.clone(),
            expiry_hours: settings.expiry_hours
        }
    }

    pub fn generate_key(&self, user: &User) -> Result<String, jsonwebtoken::errors::Error>{
        let expiry = Utc::now() + Duration::hours(self.expiry_hours as i64);

        let claims = Claims{
            sub: user.id,
            exp: expiry.timestamp() as usize,
            email: user.email.clone(),
            username: user.name.clone(),
            role: user.role.clone()
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
        )
    }

    pub fn decode_key(&self, token: &str) -> Option<Claims>{
        match jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::new(Algorithm::HS256)
        ) {
            Ok(decoded_data) => Some(decoded_data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                None
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims{
    pub sub: i32,
    pub exp: usize,
    pub email: String,
    pub username: String,
    pub role: String
}

impl Claims {
    pub fn is_admin(&self) -> bool{
        self.role == ADMIN_ROLE
    }
}
