pub mod units;

pub use crate::units::{
    InferredUnits, convert_to_canonical, infer_units, normalize_units, rename_for_scoring,
};
