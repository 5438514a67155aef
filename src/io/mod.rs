pub mod assets;
pub mod config_io;
pub mod recovery;
pub mod store_io;
