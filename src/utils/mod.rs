//! 工具模块

mod redact;

pub use redact::{mask_api_key, truncate};
