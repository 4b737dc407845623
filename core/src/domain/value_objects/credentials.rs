//! Credential commands accepted by the authentication service.

use std::fmt;

use crate::domain::entities::user::UserRole;

/// Sign-up request for a new identity
#[derive(Clone)]
pub struct SignUp {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub password: String,
    pub role: UserRole,
    /// Required for every role except buyer
    pub product_key: Option<String>,
}

/// Sign-in request for an existing identity
#[derive(Clone)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

// Plaintext secrets stay out of logs and panic messages.
impl fmt::Debug for SignUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUp")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("product_key", &self.product_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for SignIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignIn")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
