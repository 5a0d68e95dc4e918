pub mod register;
pub use register as Register;

pub mod login;
pub use login as Login;

pub mod me;
pub use me as Me;
