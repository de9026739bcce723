//! User credential and session models.

use serde::{Deserialize, Serialize};

/// Role attached to a login credential.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Patient,
}

/// A login credential in the persisted directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Stable unique id
    pub id: String,
    pub role: UserRole,
    /// Login key, unique within the directory
    pub email: String,
    /// Plaintext, compared by exact string equality. The directory is a
    /// mock credential list, not a real credential system.
    pub password: String,
    /// Linked patient record, required when role is Patient
    pub patient_id: Option<String>,
}

impl User {
    /// Project this credential into a session record. The password is
    /// structurally absent from the result, so it never reaches the
    /// persisted session or the application.
    pub fn session(&self) -> Session {
        Session {
            user_id: self.id.clone(),
            role: self.role,
            email: self.email.clone(),
            patient_id: self.patient_id.clone(),
        }
    }
}

/// The active authenticated identity, persisted so a restart stays
/// logged in. At most one session is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Id of the credential this session was built from
    pub user_id: String,
    pub role: UserRole,
    pub email: String,
    pub patient_id: Option<String>,
}

impl Session {
    /// True for administrator sessions.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user() -> User {
        User {
            id: "2".into(),
            role: UserRole::Patient,
            email: "john@entnt.in".into(),
            password: "patient123".into(),
            patient_id: Some("p1".into()),
        }
    }

    #[test]
    fn test_session_projection() {
        let user = make_user();
        let session = user.session();

        assert_eq!(session.user_id, "2");
        assert_eq!(session.email, "john@entnt.in");
        assert_eq!(session.patient_id, Some("p1".into()));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_session_serializes_without_password() {
        let json = serde_json::to_string(&make_user().session()).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("patient123"));
    }
}
