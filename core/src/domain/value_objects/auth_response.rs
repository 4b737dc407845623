//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

/// Token handed back after a successful sign-up or sign-in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed session token, sent back as `Authorization: Bearer <token>`
    pub token: String,
}

impl AuthResponse {
    pub fn new(token: String) -> Self {
        Self { token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(AuthResponse::new("abc".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"token": "abc"}));
    }
}
