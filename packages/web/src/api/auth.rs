//! Wire types for `/auth/*`

use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Seconds until the access token expires
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    #[test]
    fn login_response_from_backend_json() {
        let json = r#"{
            "accessToken": "abc",
            "refreshToken": "def",
            "tokenType": "Bearer",
            "expiresIn": 86400,
            "user": {
                "id": "2f1c7a56-8f7e-4c3b-9a8e-0d6f4b7c1e22",
                "username": "ada",
                "email": "ada@example.com",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "roles": ["USER", "PREMIUM_USER"],
                "emailVerified": true,
                "profileImageUrl": null
            }
        }"#;

        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.expires_in, Some(86400));
        assert_eq!(response.user.roles, vec![Role::User, Role::PremiumUser]);
        assert!(response.user.has_role(Role::PremiumUser));
        assert!(!response.user.is_admin());
    }

    #[test]
    fn login_request_uses_camel_case() {
        let request = LoginRequest {
            username: "ada".into(),
            password: "correct horse".into(),
            remember_me: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["rememberMe"], true);
        assert_eq!(json["username"], "ada");
    }
}
