use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::user::{User, MAX_BIO_LENGTH};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SocialLinksPatch {
    twitter: Option<String>,
    facebook: Option<String>,
    instagram: Option<String>,
    linkedin: Option<String>,
    website: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: String,
    bio: Option<String>,
    avatar: Option<String>,
    social_links: Option<SocialLinksPatch>,
}

pub async fn task(
    req: HttpRequest,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let name = form_data.name.trim().to_string();
    if name.len() == 0 {
        return Ok(Response::bad_request("Name is required"));
    }

    if let Some(bio) = &form_data.bio {
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Ok(Response::bad_request("Bio cannot exceed 500 characters"));
        }
    }

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");
    let result = collection.find_one(doc!{ "uuid": &user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("User not found"));
    }

    let mut account = option.unwrap();
    account.name = name;
    if let Some(bio) = &form_data.bio {
        account.bio = bio.clone();
    }
    if let Some(avatar) = &form_data.avatar {
        if avatar.len() > 0 {
            account.avatar = avatar.clone();
        }
    }
    //provided links merge over the stored ones, key by key
    if let Some(links) = &form_data.social_links {
        if let Some(twitter) = &links.twitter {
            account.social_links.twitter = twitter.clone();
        }
        if let Some(facebook) = &links.facebook {
            account.social_links.facebook = facebook.clone();
        }
        if let Some(instagram) = &links.instagram {
            account.social_links.instagram = instagram.clone();
        }
        if let Some(linkedin) = &links.linkedin {
            account.social_links.linkedin = linkedin.clone();
        }
        if let Some(website) = &links.website {
            account.social_links.website = website.clone();
        }
    }
    account.modified_at = Utc::now().timestamp_millis();

    let social_links = match mongodb::bson::to_bson(&account.social_links) {
        Ok(social_links) => social_links,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let result = collection.update_one(
        doc!{ "uuid": &user_id },
        doc!{ "$set": {
            "name": &account.name,
            "bio": &account.bio,
            "avatar": &account.avatar,
            "social_links": social_links,
            "modified_at": account.modified_at,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(account.display_json()))
}
