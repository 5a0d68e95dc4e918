use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::comment::Comment;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    comment_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let comment_id = comment_id.into_inner();
    if comment_id.len() == 0 {
        return Ok(Response::bad_request("comment id required"));
    }

    /* DATABASE ACID SESSION INIT */
    let result = MongoDB.connect_acid().await;
    let (db, mut session) = match result {
        Ok(pair) => pair,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let collection = db.collection::<Comment>("comments");
    let result = collection.find_one(doc!{ "uuid": &comment_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Comment not found"));
    }

    let comment = option.unwrap();
    if comment.author != user_id && user.role != Role::Admin {
        return Ok(Response::forbidden(
            "Not authorized to delete this comment"
        ));
    }

    if comment.is_reply() {
        //a reply deletes alone
        let result = collection.delete_one(doc!{ "uuid": &comment_id }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        return Ok(Response::message("Comment removed"));
    }

    //top-level: replies go first, then the parent. If the reply deletion
    //fails the transaction aborts and the parent survives untouched.
    if let Err(error) = session.start_transaction().await {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let result = collection
        .delete_many(doc!{ "parent": &comment_id })
        .session(&mut session)
        .await;

    match result {
        Ok(_) => {
            let result = collection
                .delete_one(doc!{ "uuid": &comment_id })
                .session(&mut session)
                .await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                session.abort_transaction().await.ok();
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            /* DATABASE ACID COMMIT */
            if let Err(error) = session.commit_transaction().await {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }
        }
        //standalone deployments reject in-transaction writes; fall back to
        //plain ordered deletes. A crash between the two can leave a
        //childless parent briefly undeleted, never orphaned replies.
        Err(error) if transactions_unsupported(&error.to_string()) => {
            session.abort_transaction().await.ok();

            let result = collection.delete_many(doc!{ "parent": &comment_id }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let result = collection.delete_one(doc!{ "uuid": &comment_id }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }
        }
        Err(error) => {
            log::error!("{:?}", error);
            session.abort_transaction().await.ok();
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    }

    Ok(Response::message("Comment removed"))
}

//mongod without a replica set answers the first in-transaction write with
//an IllegalOperation error; that is the signal to retry without a session
fn transactions_unsupported(message: &str) -> bool {
    message.contains("Transaction numbers are only allowed")
        || message.contains("does not support transactions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_transaction_errors_trigger_the_fallback() {
        assert!(transactions_unsupported(
            "Command failed: Transaction numbers are only allowed on a \
             replica set member or mongos"
        ));
        assert!(transactions_unsupported(
            "this MongoDB deployment does not support transactions"
        ));
    }

    #[test]
    fn other_errors_do_not_trigger_the_fallback() {
        assert!(!transactions_unsupported("connection reset by peer"));
        assert!(!transactions_unsupported("E11000 duplicate key error"));
    }
}
