//! Session-scoped credential state
//!
//! The credential pair lives in process memory for one invocation and is
//! never written to disk. Commands receive the session explicitly instead
//! of reading ambient globals.

use std::fmt;

/// A credential pair for the forge
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    identity: String,
    secret: String,
}

impl Credential {
    /// Create a credential pair
    pub fn new(identity: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            secret: secret.into(),
        }
    }

    /// The account identity
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The account secret
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

// The secret must never reach logs or error output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("identity", &self.identity)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Per-invocation session state
///
/// Holds the current credential, if any. Cleared only by process exit;
/// there is no expiry and no persistence across invocations.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credential: Option<Credential>,
}

impl Session {
    /// Create an unauthenticated session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create a session holding a credential
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// Whether a credential is present
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The current credential, or `NotAuthenticated`
    pub fn credential(&self) -> crate::error::AnvilResult<&Credential> {
        self.credential
            .as_ref()
            .ok_or(crate::error::AnvilError::NotAuthenticated)
    }

    /// Store a credential for the rest of the session
    pub fn sign_in(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Drop the credential
    pub fn sign_out(&mut self) {
        self.credential = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.credential().is_err());
    }

    #[test]
    fn sign_in_and_out() {
        let mut session = Session::anonymous();
        session.sign_in(Credential::new("robot", "s3cret"));
        assert!(session.is_authenticated());
        assert_eq!(session.credential().unwrap().identity(), "robot");

        session.sign_out();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn debug_redacts_secret() {
        let credential = Credential::new("robot", "s3cret");
        let rendered = format!("{:?}", credential);
        assert!(rendered.contains("robot"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("s3cret"));
    }
}
