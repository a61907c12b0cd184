use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq)]
pub struct UserEmail(pub String);

impl UserEmail {
    pub fn parse(email: String) -> Result<UserEmail, String>{
        if email.validate_email() {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid user email", email))
        }
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for UserEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
