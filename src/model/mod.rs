pub mod config;
pub mod donation;
pub mod session;
pub mod store;
pub mod user;

pub use config::*;
pub use donation::*;
pub use session::*;
pub use store::*;
pub use user::*;
