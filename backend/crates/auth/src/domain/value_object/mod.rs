//! Value Objects

pub mod user_id;
pub mod user_name;
pub mod user_password;

pub use user_id::UserId;
pub use user_name::{UserName, UserNameError};
pub use user_password::{RawPassword, UserPassword};
