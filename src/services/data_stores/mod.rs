mod hashmap_project_store;
mod hashmap_user_store;

pub use hashmap_project_store::*;
pub use hashmap_user_store::*;
