mod error;
mod traits;

pub use self::error::{Error, Result};
pub use self::traits::Checksum8;
