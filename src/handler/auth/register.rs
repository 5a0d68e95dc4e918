use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::jwt;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::user::{
    Role, SocialLinks, User, DEFAULT_AVATAR, MIN_PASSWORD_LENGTH,
};
use actix_web::{web, Error, HttpResponse};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: String,
    email: String,
    password: String,
}

pub async fn task(form_data: web::Json<ReqBody>) -> Result<HttpResponse, Error> {
    let name = form_data.name.trim().to_string();
    if name.len() == 0 {
        return Ok(Response::bad_request("Name is required"));
    }

    let email = form_data.email.trim().to_lowercase();
    if !string::is_valid_email(&email) {
        return Ok(Response::bad_request("Please include a valid email"));
    }

    if form_data.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Ok(Response::bad_request(
            "Password must be at least 6 characters"
        ));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");

    let result = collection.find_one(doc!{ "email": &email }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().is_some() {
        return Ok(Response::bad_request("User already exists"));
    }

    let hash = match bcrypt::hash(&form_data.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let now = Utc::now().timestamp_millis();
    let account = User {
        uuid: Uuid::new_v4().to_string(),
        name,
        email,
        password: hash,
        avatar: DEFAULT_AVATAR.to_string(),
        bio: String::new(),
        role: Role::User,
        social_links: SocialLinks::default(),
        is_verified: false,
        created_at: now,
        modified_at: now,
    };

    let result = collection.insert_one(&account).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let (access_token, _) = jwt::access_token::generate_default(&account.uuid, account.role);

    Ok(
        HttpResponse::Created()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "token": access_token,
            "user": account.display_json()
        }))
    )
}
