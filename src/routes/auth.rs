use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
        //Register
        .route(
          "/register",
          web::post().to(Handler::Auth::Register::task)
        )
        //Login
        .route(
          "/login",
          web::post().to(Handler::Auth::Login::task)
        )
        //Current user
        .route(
          "/me",
          web::get().to(Handler::Auth::Me::task)
        )
    );
}
