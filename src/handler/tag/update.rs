use chrono::Utc;
use mongodb::bson::{doc, Document};
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::tag::{Tag, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: Option<String>,
    description: Option<String>,
}

pub async fn task(
    req: HttpRequest,
    tag_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let tag_id = tag_id.into_inner();
    if tag_id.len() == 0 {
        return Ok(Response::bad_request("tag id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Tag>("tags");
    let result = collection.find_one(doc!{ "uuid": &tag_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Tag not found"));
    }

    let mut tag = option.unwrap();
    let mut set = Document::new();

    if let Some(name) = &form_data.name {
        let name = name.trim();
        if name.len() == 0 {
            return Ok(Response::bad_request("Tag name is required"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Ok(Response::bad_request(
                "Tag name cannot be more than 30 characters"
            ));
        }

        if name != tag.name {
            let result = collection.find_one(doc!{ "name": name }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            if result.unwrap().is_some() {
                return Ok(Response::bad_request("Tag already exists"));
            }

            tag.slug = string::slugify(name);
            set.insert("slug", &tag.slug);
        }

        tag.name = name.to_string();
        set.insert("name", &tag.name);
    }

    if let Some(description) = &form_data.description {
        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Ok(Response::bad_request(
                "Description cannot be more than 300 characters"
            ));
        }
        tag.description = description.clone();
        set.insert("description", &tag.description);
    }

    tag.modified_at = Utc::now().timestamp_millis();
    set.insert("modified_at", tag.modified_at);

    let result = collection.update_one(
        doc!{ "uuid": &tag_id },
        doc!{ "$set": set },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(tag))
}
