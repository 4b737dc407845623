//! User entity representing a registered identity on the listing platform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// A prospective purchaser browsing listings
    Buyer,
    /// A realtor publishing listings
    Realtor,
    /// A platform administrator
    Admin,
}

impl UserRole {
    /// Every role, in declaration order
    pub const ALL: [UserRole; 3] = [UserRole::Buyer, UserRole::Realtor, UserRole::Admin];

    /// The wire and storage name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Buyer => "BUYER",
            UserRole::Realtor => "REALTOR",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Roles other than buyer need a product key to self-register
    pub fn requires_product_key(&self) -> bool {
        !matches!(self, UserRole::Buyer)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUYER" => Ok(UserRole::Buyer),
            "REALTOR" => Ok(UserRole::Realtor),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User entity as held by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Unique e-mail address used to sign in
    pub email: String,

    /// Contact phone number
    pub phone: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Role deciding route admission
    pub role: UserRole,
}

impl User {
    /// Checks whether the user holds the given role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Fields of a user that does not exist yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUser {
    /// Materialize the record once the store has assigned an id
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new_user() -> NewUser {
        NewUser {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            role: UserRole::Realtor,
        }
    }

    #[test]
    fn test_into_user_keeps_fields() {
        let user = sample_new_user().into_user(42);
        assert_eq!(user.id, 42);
        assert_eq!(user.email, "alice@example.com");
        assert!(user.has_role(UserRole::Realtor));
        assert!(!user.has_role(UserRole::Admin));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Buyer).unwrap(), "\"BUYER\"");
        assert_eq!(
            serde_json::from_str::<UserRole>("\"REALTOR\"").unwrap(),
            UserRole::Realtor
        );
    }

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!(" Realtor ".parse::<UserRole>(), Ok(UserRole::Realtor));
        assert!("landlord".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_buyer_skips_product_key() {
        assert!(!UserRole::Buyer.requires_product_key());
        assert!(UserRole::Realtor.requires_product_key());
        assert!(UserRole::Admin.requires_product_key());
    }

    #[test]
    fn test_password_hash_is_never_serialized() {
        let json = serde_json::to_value(sample_new_user().into_user(1)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "REALTOR");
    }
}
