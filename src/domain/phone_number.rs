use std::fmt::Debug;

use phonenumber::country;

// Region assumed for numbers written without a country code
const DEFAULT_REGION: country::Id = country::US;

#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNumberDomain(String);

impl PhoneNumberDomain{
    pub fn parse(number: String) -> Result<PhoneNumberDomain, String>{
        let trimmed = number.trim();

        if !trimmed.is_empty() && phonenumber::parse(Some(DEFAULT_REGION), trimmed).is_ok(){
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid phone number", number))
        }
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for PhoneNumberDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumberDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
