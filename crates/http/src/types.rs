//! Request and response types shared with the backend

use serde::{Deserialize, Serialize};

/// A user account as serialized by the backend.
///
/// Replaced wholesale on login, signup, or profile update; never
/// field-patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "user_id")]
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Reference to the user's avatar image, if one is set.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Envelope returned by `GET /api/user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: UserRecord,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Profile update request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Password change request (authenticated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Password reset email request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResetPasswordRequest {
    pub email: String,
}

/// Password reset completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub uid: String,
    pub token: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_decodes_backend_fields() {
        let json = r#"{"user_id": 7, "username": "ada", "email": "ada@example.com", "avatar": "/media/avatars/ada.png"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "ada");
        assert_eq!(user.avatar.as_deref(), Some("/media/avatars/ada.png"));
    }

    #[test]
    fn user_record_avatar_is_optional() {
        let json = r#"{"user_id": 1, "username": "bob", "email": "bob@example.com"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert!(user.avatar.is_none());
    }

    #[test]
    fn update_profile_omits_unset_avatar() {
        let req = UpdateProfileRequest {
            email: "bob@example.com".into(),
            username: "bob".into(),
            avatar: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("avatar").is_none());
    }
}
