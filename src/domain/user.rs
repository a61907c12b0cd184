use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::models::User;

fn default_role() -> String{
    "customer".to_string()
}

// Body of the signup endpoint; the plaintext password is hashed before it is stored
#[derive(Deserialize, Debug)]
pub struct SignupRequest{
    pub email: String,
    pub phone_number: i64,
    #[serde(alias = "password_hash")]
    pub password: SecretString,
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest{
    pub email: String,
    pub password: SecretString
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse{
    pub token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub name: String,
    pub role: String
}

// Public view of a user, never carries the password hash
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserView{
    pub id: i32,
    pub email: String,
    pub phone_number: i64,
    pub name: String,
    pub role: String
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self{
            id: user.id,
            email: user.email,
            phone_number: user.phone_number,
            name: user.name,
            role: user.role
        }
    }
}
