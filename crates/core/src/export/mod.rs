pub mod csv_format;
pub mod manager;
