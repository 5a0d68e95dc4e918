use serde_json::json;
use mongodb::bson::doc;
use mongodb::Database;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::post::Post;
use crate::model::user::User;
use actix_web::{web, Error, HttpResponse};

pub async fn task(post_id: web::Path<String>) -> Result<HttpResponse, Error> {
    let post_id = post_id.into_inner();
    if post_id.len() == 0 {
        return Ok(Response::bad_request("post id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");
    let result = collection.find_one(doc!{ "uuid": &post_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Post not found"));
    }

    let mut post = option.unwrap();

    //every single-post read counts as a view
    let result = collection.update_one(
        doc!{ "uuid": &post_id },
        doc!{ "$inc": { "view_count": 1 } },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    post.view_count += 1;

    let author = match author_json(&db, &post.author).await {
        Ok(author) => author,
        Err(error) => return Ok(error),
    };

    Ok(Response::ok(json!({
        "post": post,
        "author": author,
    })))
}

pub(super) async fn author_json(
    db: &Database,
    author_id: &str,
) -> Result<serde_json::Value, HttpResponse> {
    let collection = db.collection::<User>("users");
    let result = collection.find_one(doc!{ "uuid": author_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    Ok(match result.unwrap() {
        Some(account) => json!({
            "uuid": account.uuid,
            "name": account.name,
            "avatar": account.avatar,
        }),
        None => serde_json::Value::Null,
    })
}
