//! User entity representing a registered account in the SlotBook system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
///
/// Expert capability is never inferred from free-form request data; an
/// account is promoted to `Expert` only when an expert profile is created
/// for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A client booking appointments
    User,
    /// A provider offering bookable time
    Expert,
    /// Platform administrator
    Admin,
}

impl UserRole {
    /// Stable string form used for persistence
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Expert => "expert",
            UserRole::Admin => "admin",
        }
    }

    /// Parse the persisted string form back into a role
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(UserRole::User),
            "expert" => Some(UserRole::Expert),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address, unique across accounts
    pub email: String,

    /// Bcrypt hash of the password, never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role of the account
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the `User` role
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Promotes the account to the `Expert` role
    pub fn promote_to_expert(&mut self) {
        self.role = UserRole::Expert;
        self.updated_at = Utc::now();
    }

    /// Checks if the account can manage availability and expert profiles
    pub fn is_expert(&self) -> bool {
        matches!(self.role, UserRole::Expert)
    }

    /// Checks if the account is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_user_role() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );

        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_expert());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_promote_to_expert() {
        let mut user = User::new(
            "Bob".to_string(),
            "bob@example.com".to_string(),
            "hash".to_string(),
        );

        user.promote_to_expert();
        assert_eq!(user.role, UserRole::Expert);
        assert!(user.is_expert());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::User, UserRole::Expert, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "Carol".to_string(),
            "carol@example.com".to_string(),
            "secret-hash".to_string(),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "carol@example.com");
    }
}
