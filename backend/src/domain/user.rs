//! User account model.
//!
//! Registration is the only write operation: accounts are neither updatable
//! nor deletable. The plaintext password never reaches a stored [`User`]; it
//! is hashed into a [`PasswordDigest`](crate::domain::PasswordDigest) first
//! and the stored digest is never serialized into a response.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use crate::domain::PasswordDigest;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;
/// Minimum allowed length for a password.
pub const PASSWORD_MIN: usize = 3;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The `username` field was absent from the payload.
    MissingUsername,
    /// The username was shorter than the minimum once trimmed.
    UsernameTooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// The `name` field was absent from the payload.
    MissingName,
    /// The name was blank once trimmed.
    EmptyName,
    /// The `password` field was absent from the payload.
    MissingPassword,
    /// The password was shorter than the minimum.
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUsername => write!(f, "username is required"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters")
            }
            Self::MissingName => write!(f, "name is required"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::MissingPassword => write!(f, "password is required"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Unique account handle.
///
/// Comparison is case-sensitive: `Root` and `root` are distinct handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`] from raw input.
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        let username = username.into();
        let trimmed = username.trim();
        if trimmed.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// Human readable display name for the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`] from raw input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

/// Validated registration payload.
///
/// ## Invariants
/// - `username` satisfies [`USERNAME_MIN`] after trimming.
/// - `name` is non-blank.
/// - `password` satisfies [`PASSWORD_MIN`] and is wiped from memory when the
///   registration is dropped.
#[derive(Debug, Clone)]
pub struct Registration {
    username: Username,
    name: DisplayName,
    password: Zeroizing<String>,
}

impl Registration {
    /// Build a registration from raw payload fields.
    ///
    /// Absent fields are reported distinctly from present-but-invalid ones so
    /// the response can name the exact violation.
    pub fn try_from_parts(
        username: Option<String>,
        name: Option<String>,
        password: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.ok_or(UserValidationError::MissingUsername)?;
        let name = name.ok_or(UserValidationError::MissingName)?;
        let password = Zeroizing::new(password.ok_or(UserValidationError::MissingPassword)?);

        if password.chars().count() < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }

        Ok(Self {
            username: Username::new(username)?,
            name: DisplayName::new(name)?,
            password,
        })
    }

    /// Account handle requested by the caller.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Display name requested by the caller.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Plaintext password, only ever fed to the hashing primitive.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Consume the registration, pairing its identity with a derived digest.
    pub fn into_user(self, password_hash: PasswordDigest) -> User {
        User::new(self.username, self.name, password_hash)
    }
}

/// Stored user account.
///
/// Serializes as `{"username": ..., "name": ...}`; the password digest never
/// appears in any serialized form.
///
/// ## Invariants
/// - `username` is unique (case-sensitive) within the store.
/// - `password_hash` is a non-empty PHC string once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "UserDto")]
pub struct User {
    username: Username,
    name: DisplayName,
    password_hash: PasswordDigest,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(username: Username, name: DisplayName, password_hash: PasswordDigest) -> Self {
        Self {
            username,
            name,
            password_hash,
        }
    }

    /// Unique account handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Display name shown to other users.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Stored password digest, for credential checks only.
    pub fn password_hash(&self) -> &PasswordDigest {
        &self.password_hash
    }
}

#[derive(Debug, Clone, Serialize)]
struct UserDto {
    username: String,
    name: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            username,
            name,
            password_hash: _,
        } = value;
        Self {
            username: username.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests;
