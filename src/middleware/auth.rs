use serde_json::json;
use crate::BuiltIns::jwt;
use crate::Model::User::Role;
use actix_web::{Error, HttpRequest};

#[derive(Debug, Clone)]
pub enum AccessRequirement {
    AnyToken,
    Role(Role),
    AnyOf(Vec<Role>),
}

impl AccessRequirement {
    pub fn satisfied_by(&self, role: Role) -> bool {
        match self {
            AccessRequirement::AnyToken => true,
            AccessRequirement::Role(r) => role == *r,
            AccessRequirement::AnyOf(roles) => roles.contains(&role),
        }
    }
}

/// The authenticated identity threaded explicitly into each handler.
#[derive(Debug)]
pub struct AuthUser {
    pub user_id: String,
    pub role: Role,
}

pub fn require_access(
    req: &HttpRequest,
    requirement: AccessRequirement,
) -> Result<AuthUser, Error> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(actix_web::error::ErrorUnauthorized(
            json!({ "success": false, "message": "Missing authorization header" }),
        ));
    };

    let token = auth_header.trim_start_matches("Bearer ").to_string();

    let claims = jwt::access_token::verify(&token).map_err(|err| {
        log::error!("{:?}", err);
        actix_web::error::ErrorUnauthorized(
            json!({ "success": false, "message": "Invalid authorization token" }),
        )
    })?;

    if !requirement.satisfied_by(claims.role) {
        return Err(actix_web::error::ErrorForbidden(
            json!({ "success": false, "message": "Not authorized to perform this action" }),
        ));
    }

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_token_accepts_every_role() {
        for role in [Role::User, Role::Editor, Role::Admin] {
            assert!(AccessRequirement::AnyToken.satisfied_by(role));
        }
    }

    #[test]
    fn exact_role_rejects_others() {
        let admin_only = AccessRequirement::Role(Role::Admin);
        assert!(admin_only.satisfied_by(Role::Admin));
        assert!(!admin_only.satisfied_by(Role::Editor));
        assert!(!admin_only.satisfied_by(Role::User));
    }

    #[test]
    fn any_of_checks_membership() {
        let staff = AccessRequirement::AnyOf(vec![Role::Editor, Role::Admin]);
        assert!(staff.satisfied_by(Role::Admin));
        assert!(staff.satisfied_by(Role::Editor));
        assert!(!staff.satisfied_by(Role::User));
    }
}
