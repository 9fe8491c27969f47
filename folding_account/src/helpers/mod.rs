pub mod math;
pub mod path;
