mod config;
mod dual;
mod error;
mod model;
mod render;
mod repeat;
#[cfg(test)]
mod test_utils;

pub use self::config::*;
pub use self::error::*;
pub use self::model::*;
pub use self::render::*;
