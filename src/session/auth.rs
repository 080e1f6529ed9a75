//! Login capability.

use crate::error::AuthError;

/// Login form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Decides whether a login attempt succeeds.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Accepts any pair of non-empty fields.
///
/// Insecure by design: there is no account store, nothing is checked beyond
/// both fields being filled in. A real deployment must supply its own
/// [`Authenticator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptNonEmpty;

impl Authenticator for AcceptNonEmpty {
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if credentials.email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if credentials.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_non_empty_pair_is_accepted() {
        let auth = AcceptNonEmpty;
        assert_eq!(auth.authenticate(&Credentials::new("x", "y")), Ok(()));
        assert_eq!(auth.authenticate(&Credentials::new("not an email", "1")), Ok(()));
    }

    #[test]
    fn empty_fields_are_named() {
        let auth = AcceptNonEmpty;
        assert_eq!(
            auth.authenticate(&Credentials::new("", "pw")),
            Err(AuthError::MissingField("email"))
        );
        assert_eq!(
            auth.authenticate(&Credentials::new("a@b.c", "")),
            Err(AuthError::MissingField("password"))
        );
    }
}
