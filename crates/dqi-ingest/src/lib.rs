pub mod csv;
pub mod error;
pub mod polars_utils;

pub use crate::csv::{read_table, write_table};
pub use crate::error::IngestError;
pub use crate::polars_utils::{any_to_f64, any_to_string, format_numeric, parse_f64};
