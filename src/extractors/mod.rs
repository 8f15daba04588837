mod employee;
mod json;
mod params;

pub use employee::*;
pub use json::*;
pub use params::*;
