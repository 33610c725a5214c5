pub mod database;
pub mod json_store;
pub mod repositories;
pub mod seed;
