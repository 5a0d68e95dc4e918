use std::collections::{HashMap, HashSet};

use serde_json::json;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Bson};
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::User;
use crate::model::comment::{build_thread, Comment, CommentAuthor};
use actix_web::{web, Error, HttpResponse};

pub async fn task(post_id: web::Path<String>) -> Result<HttpResponse, Error> {
    let post_id = post_id.into_inner();
    if post_id.len() == 0 {
        return Ok(Response::bad_request("post id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Comment>("comments");

    //top-level threads, newest first
    let result = collection
        .find(doc!{ "post": &post_id, "parent": Bson::Null, "approved": true })
        .sort(doc!{ "created_at": -1 })
        .await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let top_level = match cursor.try_collect::<Vec<Comment>>().await {
        Ok(top_level) => top_level,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    //replies, oldest first
    let result = collection
        .find(doc!{ "post": &post_id, "parent": doc!{ "$ne": Bson::Null }, "approved": true })
        .sort(doc!{ "created_at": 1 })
        .await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let replies = match cursor.try_collect::<Vec<Comment>>().await {
        Ok(replies) => replies,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let authors = match load_authors(&db, &top_level, &replies).await {
        Ok(authors) => authors,
        Err(error) => return Ok(error),
    };

    let thread = build_thread(top_level, replies, &authors);

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "count": thread.len(),
            "data": thread
        }))
    )
}

async fn load_authors(
    db: &mongodb::Database,
    top_level: &[Comment],
    replies: &[Comment],
) -> Result<HashMap<String, CommentAuthor>, HttpResponse> {
    let ids: HashSet<&str> = top_level
        .iter()
        .chain(replies.iter())
        .map(|c| c.author.as_str())
        .collect();

    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let ids: Vec<&str> = ids.into_iter().collect();
    let collection = db.collection::<User>("users");
    let result = collection.find(doc!{ "uuid": doc!{ "$in": ids } }).await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Err(Response::internal_server_error(&error.to_string()));
        }
    };

    let accounts = match cursor.try_collect::<Vec<User>>().await {
        Ok(accounts) => accounts,
        Err(error) => {
            log::error!("{:?}", error);
            return Err(Response::internal_server_error(&error.to_string()));
        }
    };

    Ok(accounts
        .into_iter()
        .map(|account| {
            (
                account.uuid.clone(),
                CommentAuthor {
                    uuid: account.uuid,
                    name: account.name,
                    avatar: account.avatar,
                },
            )
        })
        .collect())
}
