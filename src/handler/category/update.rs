use chrono::Utc;
use mongodb::bson::{doc, Document};
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::category::{Category, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
    color: Option<String>,
}

pub async fn task(
    req: HttpRequest,
    category_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let category_id = category_id.into_inner();
    if category_id.len() == 0 {
        return Ok(Response::bad_request("category id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Category>("categories");
    let result = collection.find_one(doc!{ "uuid": &category_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Category not found"));
    }

    let mut category = option.unwrap();
    let mut set = Document::new();

    if let Some(name) = &form_data.name {
        let name = name.trim();
        if name.len() == 0 {
            return Ok(Response::bad_request("Category name is required"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Ok(Response::bad_request(
                "Category name cannot be more than 50 characters"
            ));
        }

        if name != category.name {
            //renames must not collide with another category
            let result = collection.find_one(doc!{ "name": name }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            if result.unwrap().is_some() {
                return Ok(Response::bad_request("Category already exists"));
            }

            category.slug = string::slugify(name);
            set.insert("slug", &category.slug);
        }

        category.name = name.to_string();
        set.insert("name", &category.name);
    }

    if let Some(description) = &form_data.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Ok(Response::bad_request(
                "Description cannot be more than 500 characters"
            ));
        }
        category.description = description.clone();
        set.insert("description", &category.description);
    }
    if let Some(image) = &form_data.image {
        category.image = image.clone();
        set.insert("image", &category.image);
    }
    if let Some(color) = &form_data.color {
        if color.len() > 0 {
            category.color = color.clone();
            set.insert("color", &category.color);
        }
    }

    category.modified_at = Utc::now().timestamp_millis();
    set.insert("modified_at", category.modified_at);

    let result = collection.update_one(
        doc!{ "uuid": &category_id },
        doc!{ "$set": set },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(category))
}
