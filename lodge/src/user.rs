//! User types for guests and administrators.
//!
//! Credential handling is out of scope for this library: the password hash
//! is treated as an opaque string produced by an external collaborator and
//! stored verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::ValidationError;

/// A unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user identifier from a raw database id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role assigned to a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular guest account.
    #[default]
    Guest,
    /// An administrative account.
    Admin,
}

impl Role {
    /// Parses a role from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known role.
    ///
    /// # Examples
    ///
    /// ```
    /// use lodge::Role;
    ///
    /// assert_eq!(Role::parse("guest").unwrap(), Role::Guest);
    /// assert_eq!(Role::parse("ADMIN").unwrap(), Role::Admin);
    /// assert!(Role::parse("owner").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "admin" => Ok(Self::Admin),
            _ => Err(ValidationError {
                field: "role".into(),
                message: format!("unknown role: {s}"),
            }),
        }
    }

    /// Returns the stored string form of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// Email addresses are normalized to lowercase so the store's uniqueness
/// constraint is case-insensitive.
///
/// # Examples
///
/// ```
/// use lodge::{Role, User};
///
/// let user = User::builder("Ada Lovelace", "Ada@Example.com", "opaque-hash")
///     .build()
///     .unwrap();
///
/// assert_eq!(user.email(), "ada@example.com");
/// assert_eq!(user.role(), Role::Guest);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    name: String,
    email: String,
    phone: Option<String>,
    role: Role,
    password_hash: String,
}

impl User {
    /// Creates a new user builder.
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> UserBuilder {
        UserBuilder {
            id: None,
            name: name.into(),
            email: email.into(),
            phone: None,
            role: Role::default(),
            password_hash: password_hash.into(),
        }
    }

    /// Returns the user identifier, if the user has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number, if set.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the opaque password hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns a copy of this user with the given persisted identifier.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Builder for creating [`User`] instances.
#[derive(Debug)]
pub struct UserBuilder {
    id: Option<UserId>,
    name: String,
    email: String,
    phone: Option<String>,
    role: Role,
    password_hash: String,
}

impl UserBuilder {
    /// Sets the persisted identifier (used when loading from the store).
    #[must_use]
    pub const fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the account role. Defaults to [`Role::Guest`].
    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming, or the email
    /// is empty or does not contain an `@`.
    pub fn build(self) -> Result<User, ValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "name must be non-empty after trimming whitespace".into(),
            });
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError {
                field: "email".into(),
                message: format!("'{email}' is not a valid email address"),
            });
        }

        Ok(User {
            id: self.id,
            name,
            email,
            phone: self.phone,
            role: self.role,
            password_hash: self.password_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("guest").unwrap(), Role::Guest);
        assert_eq!(Role::parse("Admin").unwrap(), Role::Admin);
        assert!(Role::parse("owner").is_err());
        assert!(Role::parse("").is_err());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Guest, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_default_is_guest() {
        assert_eq!(Role::default(), Role::Guest);
    }

    #[test]
    fn test_user_builder_basic() {
        let user = User::builder("Ada Lovelace", "ada@example.com", "hash")
            .build()
            .unwrap();
        assert_eq!(user.id(), None);
        assert_eq!(user.name(), "Ada Lovelace");
        assert_eq!(user.email(), "ada@example.com");
        assert_eq!(user.phone(), None);
        assert_eq!(user.role(), Role::Guest);
    }

    #[test]
    fn test_user_email_normalized() {
        let user = User::builder("Ada", "  Ada@Example.COM ", "hash")
            .build()
            .unwrap();
        assert_eq!(user.email(), "ada@example.com");
    }

    #[test]
    fn test_user_invalid_email() {
        let result = User::builder("Ada", "not-an-email", "hash").build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "email");
    }

    #[test]
    fn test_user_empty_name() {
        let result = User::builder("  ", "ada@example.com", "hash").build();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "name");
    }

    #[test]
    fn test_user_with_role_and_phone() {
        let user = User::builder("Ada", "ada@example.com", "hash")
            .role(Role::Admin)
            .phone(Some("+44 20 1234".to_string()))
            .build()
            .unwrap();
        assert_eq!(user.role(), Role::Admin);
        assert_eq!(user.phone(), Some("+44 20 1234"));
    }

    #[test]
    fn test_user_serde_round_trip() {
        let user = User::builder("Ada", "ada@example.com", "hash")
            .id(UserId::new(3))
            .build()
            .unwrap();
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
