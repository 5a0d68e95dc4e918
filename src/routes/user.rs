use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
        //Public profile
        .route(
          "/profile/{uuid}",
          web::get().to(Handler::User::Profile::task)
        )
        //Update own profile
        .route(
          "/profile",
          web::put().to(Handler::User::UpdateProfile::task)
        )
        //Change password
        .route(
          "/change-password",
          web::put().to(Handler::User::ChangePassword::task)
        )
        //List (admin)
        .route(
          "",
          web::get().to(Handler::User::List::task)
        )
        //Update role (admin)
        .route(
          "/{uuid}/role",
          web::put().to(Handler::User::UpdateRole::task)
        )
    );
}
