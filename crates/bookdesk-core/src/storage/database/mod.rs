mod connection;
mod schema;

pub use connection::Database;
