mod data_stores;
mod email;
mod error;
mod member;
mod project;
mod project_id;
mod project_name;
mod tracked_error;
mod user;
mod user_id;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use project::*;
pub use project_id::*;
pub use project_name::*;
pub use tracked_error::*;
pub use user::*;
pub use user_id::*;
