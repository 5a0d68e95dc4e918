use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};

pub mod builtins;
pub use builtins as BuiltIns;

pub mod config;

pub mod middleware;
pub use middleware as Middleware;

pub mod model;
pub use model as Model;

pub mod handler;
pub use handler as Handler;

pub mod routes;
pub use routes as Routes;

pub mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    builtins::mongo::MongoDB
        .init()
        .await
        .expect("failed to connect to mongodb");

    let addr = config::bind_addr();
    log::info!("listening on {}", addr);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(Routes::Auth::router)
            .configure(Routes::User::router)
            .configure(Routes::Post::router)
            .configure(Routes::Category::router)
            .configure(Routes::Tag::router)
            .configure(Routes::Comment::router)
    })
    .bind(addr)?
    .run()
    .await
}
