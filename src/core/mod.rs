pub mod decode;
pub mod envelope;
pub(crate) mod export;
pub mod pagination;

pub use crate::utils::error::Result;
