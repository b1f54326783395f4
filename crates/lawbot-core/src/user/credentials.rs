//! Request bodies for the authentication endpoints.

use serde::Serialize;
use std::fmt;

/// Email/password pair for `POST /auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Passwords never reach the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New-account request for `POST /auth/signup`.
#[derive(Clone, Default, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Sets the jurisdiction the account is registered in.
    pub fn with_location(mut self, state: impl Into<String>, city: impl Into<String>) -> Self {
        self.state = non_blank(state.into());
        self.city = non_blank(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(country.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = non_blank(gender.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("state", &self.state)
            .field("city", &self.city)
            .finish_non_exhaustive()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("a@x.io", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("a@x.io"));
        assert!(!rendered.contains("hunter2"));

        let signup = SignupRequest::new("A", "a@x.io", "hunter2");
        assert!(!format!("{:?}", signup).contains("hunter2"));
    }

    #[test]
    fn test_signup_body_skips_blank_location() {
        let signup = SignupRequest::new("Asha", "asha@example.com", "pw")
            .with_location("Tamil Nadu", "  ");
        let body = serde_json::to_value(&signup).unwrap();

        assert_eq!(body["name"], "Asha");
        assert_eq!(body["state"], "Tamil Nadu");
        assert!(body.get("city").is_none());
        assert!(body.get("phone").is_none());
    }
}
