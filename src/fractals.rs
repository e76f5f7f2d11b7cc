//! Fractal knowledge: scale lookup, daily resolution and spoken formatting.

pub mod daily;
pub mod format;
pub mod scales;

pub use daily::{DailyFractals, DailyResolver};
pub use format::join_spoken_list;
pub use scales::{resolve_scale, scale_table, ScaleLookup, ScaleTable, FRACTAL_DATA_JSON};
