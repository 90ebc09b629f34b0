pub mod catalog;
pub mod config;
pub mod movie;

pub use catalog::{list_genres, list_movies};
pub use movie::{run_edit, run_new};
