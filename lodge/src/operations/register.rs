//! User registration.
//!
//! Registration validates the account fields, normalizes the email, and
//! relies on the store's unique-email constraint to reject duplicates.

use crate::database::Database;
use crate::error::{EntityKind, Error, Result};
use crate::projection::{user_with_bookings, UserView};
use crate::user::{Role, User, UserId};

/// Options for a registration request.
///
/// # Examples
///
/// ```
/// use lodge::operations::RegisterRequest;
/// use lodge::Role;
///
/// let request = RegisterRequest::new("Ada Lovelace", "ada@example.com", "opaque-hash")
///     .with_phone(Some("+44 20 7946 0000".to_string()))
///     .with_role(Role::Admin);
/// assert_eq!(request.role, Role::Admin);
/// ```
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,

    /// Email address (normalized to lowercase on registration).
    pub email: String,

    /// Opaque password hash produced by an external collaborator.
    pub password_hash: String,

    /// Optional phone number.
    pub phone: Option<String>,

    /// Account role. Defaults to guest.
    pub role: Role,
}

impl RegisterRequest {
    /// Creates a registration request with a guest role and no phone.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            phone: None,
            role: Role::default(),
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the account role.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Registers a new user account.
///
/// # Errors
///
/// Returns `Error::Validation` if the name or email is invalid, or if an
/// account with the same (case-normalized) email already exists.
pub fn register_user(db: &mut Database, request: &RegisterRequest) -> Result<User> {
    let user = User::builder(
        request.name.clone(),
        request.email.clone(),
        request.password_hash.clone(),
    )
    .phone(request.phone.clone())
    .role(request.role)
    .build()?;

    let id = db.insert_user(&user)?;
    Ok(user.with_id(id))
}

/// Looks up a user, preferring id over email when both are given.
///
/// # Errors
///
/// Returns an error if the lookup fails.
pub fn find_user(
    db: &Database,
    id: Option<UserId>,
    email: Option<&str>,
) -> Result<Option<User>> {
    if let Some(id) = id {
        return Database::get_user(db.connection(), id);
    }
    if let Some(email) = email {
        return Database::find_user_by_email(db.connection(), email);
    }
    Ok(None)
}

/// Builds a user's booking history, each stay carrying its room.
///
/// Bookings are ordered by check-in date. Stays whose room has since been
/// removed from inventory appear without one.
///
/// # Errors
///
/// Returns `Error::NotFound` if the user does not exist, or a database
/// error if a lookup fails.
pub fn booking_history(db: &Database, id: UserId) -> Result<UserView> {
    let conn = db.connection();
    let user = Database::get_user(conn, id)?.ok_or(Error::NotFound {
        entity: EntityKind::User,
        id: id.value(),
    })?;

    let bookings = Database::bookings_for_user(conn, id)?;
    let mut stays = Vec::with_capacity(bookings.len());
    for booking in bookings {
        let room = Database::get_room(conn, booking.room_id())?;
        stays.push((booking, room));
    }

    Ok(user_with_bookings(&user, &stays))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{
        create_test_database, create_test_room, seed_booking, stay,
    };

    #[test]
    fn test_register_defaults_to_guest() {
        let mut db = create_test_database();
        let request = RegisterRequest::new("Ada", "Ada@Example.com", "hash");
        let user = register_user(&mut db, &request).unwrap();

        assert!(user.id().is_some());
        assert_eq!(user.role(), Role::Guest);
        // Email is normalized before storage
        assert_eq!(user.email(), "ada@example.com");
    }

    #[test]
    fn test_register_admin() {
        let mut db = create_test_database();
        let request = RegisterRequest::new("Root", "root@example.com", "hash")
            .with_role(Role::Admin);
        let user = register_user(&mut db, &request).unwrap();
        assert_eq!(user.role(), Role::Admin);
    }

    #[test]
    fn test_register_invalid_email() {
        let mut db = create_test_database();
        let request = RegisterRequest::new("Ada", "not-an-email", "hash");
        let err = register_user(&mut db, &request).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut db = create_test_database();
        register_user(&mut db, &RegisterRequest::new("Ada", "ada@example.com", "hash")).unwrap();

        let err = register_user(
            &mut db,
            &RegisterRequest::new("Imposter", "ADA@example.com", "hash"),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_find_user_prefers_id() {
        let mut db = create_test_database();
        let ada = register_user(&mut db, &RegisterRequest::new("Ada", "ada@example.com", "hash"))
            .unwrap();
        register_user(
            &mut db,
            &RegisterRequest::new("Grace", "grace@example.com", "hash"),
        )
        .unwrap();

        let found = find_user(&db, ada.id(), Some("grace@example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(found.email(), "ada@example.com");

        let found = find_user(&db, None, Some("grace@example.com"))
            .unwrap()
            .unwrap();
        assert_eq!(found.email(), "grace@example.com");

        assert!(find_user(&db, None, None).unwrap().is_none());
    }

    #[test]
    fn test_booking_history_nests_rooms_in_stay_order() {
        let mut db = create_test_database();
        let ada = register_user(&mut db, &RegisterRequest::new("Ada", "ada@example.com", "hash"))
            .unwrap();
        let user_id = ada.id().unwrap();
        let single = db.insert_room(&create_test_room("Single", 9900)).unwrap();
        let suite = db.insert_room(&create_test_room("Suite", 30000)).unwrap();

        // Seeded out of calendar order
        seed_booking(&mut db, user_id, suite, stay(2024, 6, 10, 12));
        seed_booking(&mut db, user_id, single, stay(2024, 6, 1, 5));

        let history = booking_history(&db, user_id).unwrap();
        assert_eq!(history.email, "ada@example.com");

        let stays = history.bookings.unwrap();
        assert_eq!(stays.len(), 2);
        assert_eq!(stays[0].room.as_ref().unwrap().room_type, "Single");
        assert_eq!(stays[1].room.as_ref().unwrap().room_type, "Suite");
        // Nested bookings never point back at their user
        assert!(stays.iter().all(|b| b.user.is_none()));
    }

    #[test]
    fn test_booking_history_empty_for_new_user() {
        let mut db = create_test_database();
        let ada = register_user(&mut db, &RegisterRequest::new("Ada", "ada@example.com", "hash"))
            .unwrap();

        let history = booking_history(&db, ada.id().unwrap()).unwrap();
        assert_eq!(history.bookings, Some(vec![]));
    }

    #[test]
    fn test_booking_history_unknown_user() {
        let db = create_test_database();
        let err = booking_history(&db, UserId::new(404)).unwrap_err();
        assert!(err.is_not_found());
    }
}
