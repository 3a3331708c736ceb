pub mod decode;
pub mod encode;

pub use decode::{decode, DecodeError, DecodeMode};
pub use encode::encode;
