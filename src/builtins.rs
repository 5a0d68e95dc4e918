pub mod jwt;
pub mod mongo;
