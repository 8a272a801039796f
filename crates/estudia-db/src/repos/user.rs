//! User repository.
//!
//! Registration, credential checks, profile updates, and account lifecycle.
//! Inputs are assumed pre-validated by `estudia_core::auth`; this layer only
//! enforces storage invariants (uniqueness, referential integrity).

use chrono::Utc;

use estudia_core::auth::{generate_salt, hash_password, verify_password};
use estudia_core::entities::{User, UserProfile};
use estudia_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_i64, get_opt_string, parse_datetime};
use crate::service::EstudiaService;

/// Column list shared by every user SELECT, so `row_to_user` indexes stay valid.
const USER_COLUMNS: &str = "id, username, email, password_hash, salt, is_active, created_at, \
     full_name, phone, company, position, experience_years, target_exam_date, study_hours_daily";

impl EstudiaService {
    /// Register a new user with a freshly salted credential.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if the username or email is already
    /// taken. The `UNIQUE` constraints back this check up under concurrent
    /// registration, surfacing as `DatabaseError::LibSql`.
    pub async fn create_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DatabaseError> {
        if self.get_user_by_username(username).await?.is_some() {
            return Err(DatabaseError::Conflict(
                "El nombre de usuario ya existe".into(),
            ));
        }
        if self.email_taken(email).await? {
            return Err(DatabaseError::Conflict("El email ya está registrado".into()));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_USER).await?;
        let salt = generate_salt().map_err(|e| DatabaseError::Other(e.into()))?;
        let password_hash = hash_password(password, &salt);

        self.db()
            .conn()
            .execute(
                "INSERT INTO users (id, username, email, password_hash, salt, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6)",
                libsql::params![
                    id.as_str(),
                    username,
                    email,
                    password_hash.as_str(),
                    salt.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        Ok(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            salt,
            is_active: true,
            created_at: now,
            full_name: None,
            phone: None,
            company: None,
            position: None,
            experience_years: None,
            target_exam_date: None,
            study_hours_daily: None,
        })
    }

    /// Verify a credential pair against the stored hash and salt.
    ///
    /// Returns `None` on unknown username, wrong password, or a deactivated
    /// account; authentication failure is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` only if the underlying query fails.
    pub async fn authenticate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let Some(user) = self.get_user_by_username(username).await? else {
            return Ok(None);
        };
        if !verify_password(password, &user.salt, &user.password_hash) {
            return Ok(None);
        }
        if !user.is_active {
            tracing::warn!("login rejected for deactivated account: {username}");
            return Ok(None);
        }
        Ok(Some(user))
    }

    /// Get a user by ID. Returns `None` if the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Get a user by username. Returns `None` if no such user exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?1"),
                [username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Apply a partial profile update. `None` fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the user does not exist.
    pub async fn update_user_profile(
        &self,
        id: &str,
        profile: &UserProfile,
    ) -> Result<User, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE users SET
                     full_name = COALESCE(?1, full_name),
                     phone = COALESCE(?2, phone),
                     company = COALESCE(?3, company),
                     position = COALESCE(?4, position),
                     experience_years = COALESCE(?5, experience_years),
                     target_exam_date = COALESCE(?6, target_exam_date),
                     study_hours_daily = COALESCE(?7, study_hours_daily)
                 WHERE id = ?8",
                libsql::params![
                    profile.full_name.as_deref(),
                    profile.phone.as_deref(),
                    profile.company.as_deref(),
                    profile.position.as_deref(),
                    profile.experience_years,
                    profile.target_exam_date.as_deref(),
                    profile.study_hours_daily,
                    id
                ],
            )
            .await?;

        self.get_user(id).await?.ok_or(DatabaseError::NoResult)
    }

    /// Soft-deactivate an account. The row and its sessions are kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the update fails.
    pub async fn deactivate_user(&self, id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("UPDATE users SET is_active = 0 WHERE id = ?1", [id])
            .await?;
        Ok(())
    }

    /// Physically delete a user. Cascades to all owned sessions and messages.
    ///
    /// Data-hygiene tooling only; normal account removal is [`Self::deactivate_user`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_user(&self, id: &str) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await?;
        Ok(())
    }

    /// Check whether an email is already registered.
    async fn email_taken(&self, email: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM users WHERE email = ?1", [email])
            .await?;
        Ok(rows.next().await?.is_some())
    }
}

/// Convert a libSQL row to a `User` struct.
fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<String>(0)?,
        username: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        password_hash: row.get::<String>(3)?,
        salt: row.get::<String>(4)?,
        is_active: row.get::<i64>(5)? != 0,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        full_name: get_opt_string(row, 7)?,
        phone: get_opt_string(row, 8)?,
        company: get_opt_string(row, 9)?,
        position: get_opt_string(row, 10)?,
        experience_years: get_opt_i64(row, 11)?,
        target_exam_date: get_opt_string(row, 12)?,
        study_hours_daily: get_opt_i64(row, 13)?,
    })
}
