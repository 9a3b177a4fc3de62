use super::*;

mod percentage;

pub use self::percentage::*;
