//! Authentication service layer.
//!
//! Registration creates a person and its login account in one transaction. Login
//! verifies the Argon2 password hash and issues an opaque session token stored in the
//! `auth_session` table; every later request presents it in the `Session-ID` header
//! and is resolved back to a person and role by [`AuthService::authenticate`].

pub mod account;
pub mod login;
pub mod password;
pub mod register;
pub mod seed;
pub mod session;


use sea_orm::DatabaseConnection;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}
