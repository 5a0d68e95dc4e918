use std::env;

pub fn mongo_uri() -> String {
    env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string())
}

pub fn database_name() -> String {
    env::var("MONGO_DATABASE").unwrap_or_else(|_| "quillpad".to_string())
}

pub fn jwt_secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| "quillpad_dev_secret".to_string())
}

pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string())
}
