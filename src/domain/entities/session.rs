//! Authenticated session issued by the MindFit API.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Proof of an authenticated identity.
///
/// The token is treated as opaque. When it happens to be a JWT with an `exp`
/// claim, that instant is recorded as the session expiry so validity can be
/// decided locally without a network round-trip.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session issued now for `email`.
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = jwt_expiry(&token);

        Self {
            token,
            email: email.into(),
            issued_at: Utc::now(),
            expires_at,
        }
    }

    /// Returns true if the session has passed its expiry time.
    ///
    /// Sessions without a known expiry stay valid until cleared.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now >= e)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("email", &self.email)
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: Option<i64>,
}

/// Reads the `exp` claim from a JWT payload without verifying the signature.
///
/// Returns `None` for anything that is not a three-part JWT with a numeric
/// `exp` claim.
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claim: ExpiryClaim = serde_json::from_slice(&bytes).ok()?;

    DateTime::from_timestamp(claim.exp?, 0)
}
