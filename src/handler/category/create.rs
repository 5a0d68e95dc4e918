use uuid::Uuid;
use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::category::{
    Category, DEFAULT_COLOR, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: String,
    description: Option<String>,
    image: Option<String>,
    color: Option<String>,
}

pub async fn task(
    req: HttpRequest,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let name = form_data.name.trim().to_string();
    if name.len() == 0 {
        return Ok(Response::bad_request("Category name is required"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Ok(Response::bad_request(
            "Category name cannot be more than 50 characters"
        ));
    }
    if let Some(description) = &form_data.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Ok(Response::bad_request(
                "Description cannot be more than 500 characters"
            ));
        }
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Category>("categories");

    let result = collection.find_one(doc!{ "name": &name }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().is_some() {
        return Ok(Response::bad_request("Category already exists"));
    }

    let now = Utc::now().timestamp_millis();
    let category = Category {
        uuid: Uuid::new_v4().to_string(),
        slug: string::slugify(&name),
        name,
        description: form_data.description.clone().unwrap_or_default(),
        image: form_data.image.clone().unwrap_or_default(),
        color: form_data
            .color
            .clone()
            .filter(|v| v.len() > 0)
            .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        created_at: now,
        modified_at: now,
    };

    let result = collection.insert_one(&category).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::created(category))
}
