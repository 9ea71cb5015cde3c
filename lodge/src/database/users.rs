//! Database CRUD operations for users.
//!
//! This module implements persistence for guest and administrator
//! accounts, including the unique-email enforcement used by registration.

use rusqlite::{params, Connection, TransactionBehavior};

use crate::error::{Error, Result};
use crate::user::{Role, User, UserId};

use super::connection::Database;

/// Helper function to deserialize a user from a database row.
///
/// Expects row fields in this order: id, name, email, phone, role,
/// `password_hash`
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let phone: Option<String> = row.get(3)?;
    let role: String = row.get(4)?;
    let password_hash: Option<String> = row.get(5)?;

    let role = Role::parse(&role)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    User::builder(name, email, password_hash.unwrap_or_default())
        .id(UserId::new(id))
        .phone(phone)
        .role(role)
        .build()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Returns whether a rusqlite error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

// SQL statements for user CRUD operations
const INSERT_USER: &str = r"
    INSERT INTO users (name, email, phone, role, password_hash)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_USER: &str = r"
    SELECT id, name, email, phone, role, password_hash
    FROM users
    WHERE id = ?
";

const SELECT_USER_BY_EMAIL: &str = r"
    SELECT id, name, email, phone, role, password_hash
    FROM users
    WHERE email = ?
";

const LIST_USERS: &str = r"
    SELECT id, name, email, phone, role, password_hash
    FROM users
    ORDER BY id
";

impl Database {
    /// Inserts a new user account.
    ///
    /// The user's identifier is assigned by the database and returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` naming the "email" field if an account
    /// with the same email already exists, or a database error otherwise.
    pub fn insert_user(&mut self, user: &User) -> Result<UserId> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let result = tx.execute(
            INSERT_USER,
            params![
                user.name(),
                user.email(),
                user.phone(),
                user.role().as_str(),
                user.password_hash(),
            ],
        );

        match result {
            Ok(_) => {}
            Err(ref e) if is_unique_violation(e) => {
                return Err(Error::Validation {
                    field: "email".into(),
                    message: format!("an account with email '{}' already exists", user.email()),
                });
            }
            Err(e) => return Err(e.into()),
        }

        let id = UserId::new(tx.last_insert_rowid());
        tx.commit()?;
        Ok(id)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if the user exists
    /// - `Ok(None)` if the user doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        let mut stmt = conn.prepare(SELECT_USER)?;

        match stmt.query_row(params![id.value()], row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a user by normalized email address.
    ///
    /// Emails are stored lowercase, so the lookup normalizes its input the
    /// same way.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        let normalized = email.trim().to_lowercase();
        let mut stmt = conn.prepare(SELECT_USER_BY_EMAIL)?;

        match stmt.query_row(params![normalized], row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all user accounts, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn.prepare(LIST_USERS)?;
        let users = stmt
            .query_map([], row_to_user)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, create_test_user};

    #[test]
    fn test_insert_and_get_user() {
        let mut db = create_test_database();
        let user = create_test_user("Ada Lovelace", "ada@example.com");

        let id = db.insert_user(&user).unwrap();
        let fetched = Database::get_user(db.connection(), id).unwrap().unwrap();

        assert_eq!(fetched.id(), Some(id));
        assert_eq!(fetched.name(), "Ada Lovelace");
        assert_eq!(fetched.email(), "ada@example.com");
        assert_eq!(fetched.role(), Role::Guest);
    }

    #[test]
    fn test_get_user_not_found() {
        let db = create_test_database();
        let result = Database::get_user(db.connection(), UserId::new(999)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_insert_duplicate_email_rejected() {
        let mut db = create_test_database();
        db.insert_user(&create_test_user("Ada", "ada@example.com"))
            .unwrap();

        let result = db.insert_user(&create_test_user("Other Ada", "ada@example.com"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_duplicate_email_differs_only_by_case() {
        let mut db = create_test_database();
        db.insert_user(&create_test_user("Ada", "ada@example.com"))
            .unwrap();

        // Builder normalization lowercases before the store sees it
        let result = db.insert_user(&create_test_user("Ada", "ADA@Example.COM"));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_find_user_by_email() {
        let mut db = create_test_database();
        let id = db
            .insert_user(&create_test_user("Ada", "ada@example.com"))
            .unwrap();

        let found = Database::find_user_by_email(db.connection(), "ada@example.com")
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), Some(id));

        // Lookup normalizes case and whitespace
        let found = Database::find_user_by_email(db.connection(), "  ADA@example.com ")
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), Some(id));

        let missing = Database::find_user_by_email(db.connection(), "nobody@example.com").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_list_users_ordered() {
        let mut db = create_test_database();
        let first = db
            .insert_user(&create_test_user("Ada", "ada@example.com"))
            .unwrap();
        let second = db
            .insert_user(&create_test_user("Grace", "grace@example.com"))
            .unwrap();

        let users = Database::list_users(db.connection()).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id(), Some(first));
        assert_eq!(users[1].id(), Some(second));
    }
}
