#![forbid(unsafe_code)]

pub mod instruction_filter;
pub mod model;
pub mod style;
pub mod version;
