use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_AVATAR: &str =
    "https://res.cloudinary.com/demo/image/upload/v1580125061/samples/people/default-avatar.jpg";

pub const MAX_BIO_LENGTH: usize = 500;
pub const MIN_PASSWORD_LENGTH: usize = 6;

//role for user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role { User, Editor, Admin }
impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Role::User => write!(fmt, "user"),
            Role::Editor => write!(fmt, "editor"),
            Role::Admin => write!(fmt, "admin"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub website: String,
}

//user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uuid: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub bio: String,
    pub role: Role,
    pub social_links: SocialLinks,
    pub is_verified: bool,

    pub created_at: i64,
    pub modified_at: i64,
}

impl User {
    /// Shape returned to clients. The password hash never leaves the store
    /// through any response path.
    pub fn display_json(&self) -> Value {
        json!({
            "uuid": self.uuid,
            "name": self.name,
            "email": self.email,
            "avatar": self.avatar,
            "bio": self.bio,
            "role": self.role,
            "social_links": self.social_links,
            "is_verified": self.is_verified,
            "created_at": self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            uuid: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "$2b$10$hash".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            bio: String::new(),
            role: Role::User,
            social_links: SocialLinks::default(),
            is_verified: false,
            created_at: 1,
            modified_at: 1,
        }
    }

    #[test]
    fn display_json_excludes_password_hash() {
        let value = sample().display_json();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(Role::Editor.to_string(), "editor");
    }
}
