pub mod engine;
pub mod tables;

pub use crate::engine::{apply_mapping, normalize_dii_headers};
pub use crate::tables::{DII_CASE_MAP, USDA_DASH_MAP, USDA_DII_MAP, USDA_HEI_MAP};
