pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod server;
pub mod store;

pub use db::Database;
pub use store::NoteStore;
