pub mod csv;

pub use csv::{csv_file_name, generate_csv, write_csv};
