use once_cell::sync::Lazy;
use regex::Regex;
use rh_core::{SignIn, SignUp, User, UserRole};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// North American style numbers with an optional one or two digit country code
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$")
        .expect("phone pattern is valid")
});

/// bcrypt reads at most 72 bytes of input
const PASSWORD_MIN_BYTES: usize = 8;
const PASSWORD_MAX_BYTES: usize = 72;

#[derive(Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(regex(path = "PHONE_REGEX", message = "phone must be a valid phone number"))]
    pub phone: String,

    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(custom = "validate_password_length")]
    pub password: String,

    /// Body form of the role; the path form wins when only it is present
    #[serde(default)]
    pub role: Option<String>,

    /// Required for every role except buyer
    #[serde(default, rename = "productKey", alias = "product_key")]
    pub product_key: Option<String>,
}

impl SignUpRequest {
    pub fn into_command(self, role: UserRole) -> SignUp {
        SignUp {
            email: self.email,
            name: self.name,
            phone: self.phone,
            password: self.password,
            role,
            product_key: self.product_key,
        }
    }
}

#[derive(Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl From<SignInRequest> for SignIn {
    fn from(request: SignInRequest) -> Self {
        SignIn {
            email: request.email,
            password: request.password,
        }
    }
}

/// Administrative request for a product key
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductKeyRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[serde(alias = "userType")]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductKeyResponse {
    pub key: String,
}

/// The identity the role guard resolved, without the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be empty".into());
        return Err(error);
    }
    Ok(())
}

fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if !(PASSWORD_MIN_BYTES..=PASSWORD_MAX_BYTES).contains(&password.len()) {
        let mut error = ValidationError::new("length");
        error.message = Some(
            format!(
                "password must be between {} and {} bytes",
                PASSWORD_MIN_BYTES, PASSWORD_MAX_BYTES
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}
