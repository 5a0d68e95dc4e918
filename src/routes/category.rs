use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/categories")
        //List
        .route(
          "",
          web::get().to(Handler::Category::List::task)
        )
        //Create (admin)
        .route(
          "",
          web::post().to(Handler::Category::Create::task)
        )
        //Get by slug
        .route(
          "/slug/{slug}",
          web::get().to(Handler::Category::GetBySlug::task)
        )
        //Get
        .route(
          "/{uuid}",
          web::get().to(Handler::Category::Get::task)
        )
        //Update (admin)
        .route(
          "/{uuid}",
          web::put().to(Handler::Category::Update::task)
        )
        //Delete (admin)
        .route(
          "/{uuid}",
          web::delete().to(Handler::Category::Delete::task)
        )
    );
}
