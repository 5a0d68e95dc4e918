use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::model::user::Role;

/// Access tokens are valid for 30 days.
const ACCESS_TOKEN_VALID_MINUTES: u32 = 30 * 24 * 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub exp: usize,
}

pub mod access_token {
    use super::*;

    /// Returns the signed token together with its validity in minutes.
    pub fn generate_default(user_id: &str, role: Role) -> (String, u32) {
        let exp = Utc::now().timestamp() + (ACCESS_TOKEN_VALID_MINUTES as i64) * 60;
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            exp: exp as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
        )
        .expect("jwt signing with hmac cannot fail");

        (token, ACCESS_TOKEN_VALID_MINUTES)
    }

    pub fn verify(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_preserves_identity_and_role() {
        let (token, minutes) = access_token::generate_default("user-1", Role::Editor);
        assert_eq!(minutes, 30 * 24 * 60);

        let claims = access_token::verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role, Role::Editor);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let (token, _) = access_token::generate_default("user-1", Role::User);
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('a') { 'b' } else { 'a' });
        assert!(access_token::verify(&tampered).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(access_token::verify("not.a.token").is_err());
    }
}
