use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/posts")
        //Published listing with filters
        .route(
          "",
          web::get().to(Handler::Post::List::task)
        )
        //Create
        .route(
          "",
          web::post().to(Handler::Post::Create::task)
        )
        //Own posts, any status
        .route(
          "/dashboard/myposts",
          web::get().to(Handler::Post::Mine::task)
        )
        //Get by slug
        .route(
          "/slug/{slug}",
          web::get().to(Handler::Post::GetBySlug::task)
        )
        //Get
        .route(
          "/{uuid}",
          web::get().to(Handler::Post::Get::task)
        )
        //Update
        .route(
          "/{uuid}",
          web::put().to(Handler::Post::Update::task)
        )
        //Delete
        .route(
          "/{uuid}",
          web::delete().to(Handler::Post::Delete::task)
        )
    );
}
