use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/comments")
        //Create
        .route(
          "",
          web::post().to(Handler::Comment::Create::task)
        )
        //Threaded list for one post
        .route(
          "/post/{post_id}",
          web::get().to(Handler::Comment::List::task)
        )
        //Like
        .route(
          "/like/{uuid}",
          web::put().to(Handler::Comment::Like::task)
        )
        //Unlike
        .route(
          "/unlike/{uuid}",
          web::put().to(Handler::Comment::Unlike::task)
        )
        //Approve (admin)
        .route(
          "/approve/{uuid}",
          web::put().to(Handler::Comment::Approve::task)
        )
        //Edit
        .route(
          "/{uuid}",
          web::put().to(Handler::Comment::Update::task)
        )
        //Delete (cascades for top-level comments)
        .route(
          "/{uuid}",
          web::delete().to(Handler::Comment::Delete::task)
        )
    );
}
