pub mod table;

pub use table::ContractionTable;
