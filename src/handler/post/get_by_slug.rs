use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::post::Post;
use actix_web::{web, Error, HttpResponse};

pub async fn task(slug: web::Path<String>) -> Result<HttpResponse, Error> {
    let slug = slug.into_inner();
    if slug.len() == 0 {
        return Ok(Response::bad_request("slug required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");
    let result = collection.find_one(doc!{ "slug": &slug }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Post not found"));
    }

    let mut post = option.unwrap();

    let result = collection.update_one(
        doc!{ "slug": &slug },
        doc!{ "$inc": { "view_count": 1 } },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    post.view_count += 1;

    let author = match super::get::author_json(&db, &post.author).await {
        Ok(author) => author,
        Err(error) => return Ok(error),
    };

    Ok(Response::ok(json!({
        "post": post,
        "author": author,
    })))
}
