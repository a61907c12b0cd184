use argon2::{password_hash::{rand_core::OsRng, SaltString}, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

// Verified against when the login email is unknown, so both paths pay for one hash
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$\
    CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

#[derive(thiserror::Error, Debug)]
#[error("Failed to compute password hash: {0}")]
pub struct HashError(String);

// Function to compute password hash
pub fn compute_password_hash(password: &SecretString) -> Result<SecretString, HashError>{
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
                            .hash_password(password.expose_secret().as_bytes(), &salt)
                            .map_err(|e| HashError(e.to_string()))?
                            .to_string();

    Ok(SecretString::from(password_hash))
}

// Function to verify if password matches hash
pub fn verify_password(password: &SecretString, hashed_password: &str) -> Result<bool, anyhow::Error>{
    let hashed_password = PasswordHash::new(hashed_password)
                .map_err(|_| anyhow::anyhow!("Failed to parse PasswordHash \
                        from stored hashed password"))?;

    Ok(Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &hashed_password)
        .is_ok())
}

// Burns the same work as a real verification; always fails
pub fn verify_against_dummy(password: &SecretString) -> Result<bool, anyhow::Error>{
    verify_password(password, DUMMY_PASSWORD_HASH)?;
    Ok(false)
}
