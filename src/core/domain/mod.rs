//! Domain types.

mod admin_key;
mod env;

pub use admin_key::AdminKey;
pub use env::EnvFile;
