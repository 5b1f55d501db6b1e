pub mod db;
pub mod handlers;
pub mod models;
pub mod service;
pub mod time_check_error;
