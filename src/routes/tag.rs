use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tags")
        //List
        .route(
          "",
          web::get().to(Handler::Tag::List::task)
        )
        //Create (admin)
        .route(
          "",
          web::post().to(Handler::Tag::Create::task)
        )
        //Get by slug
        .route(
          "/slug/{slug}",
          web::get().to(Handler::Tag::GetBySlug::task)
        )
        //Get
        .route(
          "/{uuid}",
          web::get().to(Handler::Tag::Get::task)
        )
        //Update (admin)
        .route(
          "/{uuid}",
          web::put().to(Handler::Tag::Update::task)
        )
        //Delete (admin)
        .route(
          "/{uuid}",
          web::delete().to(Handler::Tag::Delete::task)
        )
    );
}
