pub mod cli;
pub mod outline;
pub mod utils;

// Re-export the public client surface
pub use outline::client::OutlineClient;
pub use outline::keys::{
    AccessKey, AccessKeyList, CreateAccessKeyParams, DataLimit, UpdateAccessKeyParams,
};
pub use utils::errors::{OutlineError, Result};
