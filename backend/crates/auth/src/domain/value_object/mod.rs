//! Value Object Module

pub mod email;
pub mod full_name;
pub mod public_id;
pub mod user_id;
pub mod user_password;
pub mod user_role;

pub use email::Email;
pub use full_name::FullName;
pub use public_id::PublicId;
pub use user_id::UserId;
pub use user_password::{RawPassword, UserPassword};
pub use user_role::UserRole;
