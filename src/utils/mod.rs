mod de;
mod orm;
mod signal;

pub use common::{date, validation::PHONE_REGEX};
pub use de::*;
pub use orm::*;
pub use signal::*;
