pub mod profile;
pub use profile as Profile;

pub mod update_profile;
pub use update_profile as UpdateProfile;

pub mod change_password;
pub use change_password as ChangePassword;

pub mod list;
pub use list as List;

pub mod update_role;
pub use update_role as UpdateRole;
