use uuid::Uuid;
use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::post::Post;
use crate::model::user::User;
use crate::model::comment::{Comment, CommentAuthor, CommentView};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    content: String,
    post: String,
    parent: Option<String>,
}

pub async fn task(
    req: HttpRequest,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    if let Err(error) = Comment::validate_content(&form_data.content) {
        return Ok(Response::bad_request(&error.to_string()));
    }

    let db = MongoDB.connect();

    //the post must exist at creation time
    let collection = db.collection::<Post>("posts");
    let result = collection.find_one(doc!{ "uuid": &form_data.post }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().is_none() {
        return Ok(Response::not_found("Post not found"));
    }

    //one level of nesting only: the parent must exist and be top-level
    if let Some(parent_id) = &form_data.parent {
        let collection = db.collection::<Comment>("comments");
        let result = collection.find_one(doc!{ "uuid": parent_id }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("Parent comment not found"));
        }

        if let Err(error) = Comment::validate_parent(&option.unwrap()) {
            return Ok(Response::bad_request(&error.to_string()));
        }
    }

    let now = Utc::now().timestamp_millis();
    let comment = match Comment::new(
        Uuid::new_v4().to_string(),
        &form_data.content,
        &form_data.post,
        &user_id,
        form_data.parent.clone(),
        now,
    ) {
        Ok(comment) => comment,
        Err(error) => return Ok(Response::bad_request(&error.to_string())),
    };

    let collection = db.collection::<Comment>("comments");
    let result = collection.insert_one(&comment).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    //expand the author to its display-safe subset
    let collection = db.collection::<User>("users");
    let result = collection.find_one(doc!{ "uuid": &user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let author = match result.unwrap() {
        Some(account) => CommentAuthor {
            uuid: account.uuid,
            name: account.name,
            avatar: account.avatar,
        },
        None => CommentAuthor {
            uuid: user_id,
            ..CommentAuthor::default()
        },
    };

    Ok(Response::created(CommentView::from_comment(comment, author)))
}
