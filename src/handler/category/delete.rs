use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::post::Post;
use crate::model::category::Category;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    category_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let category_id = category_id.into_inner();
    if category_id.len() == 0 {
        return Ok(Response::bad_request("category id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Category>("categories");
    let result = collection.delete_one(doc!{ "uuid": &category_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().deleted_count == 0 {
        return Ok(Response::not_found("Category not found"));
    }

    //posts keep working; they just lose the reference
    let posts = db.collection::<Post>("posts");
    let result = posts.update_many(
        doc!{ "categories": &category_id },
        doc!{ "$pull": { "categories": &category_id } },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::message("Category removed"))
}
