//! General-purpose helpers shared across the framework

pub mod random;
pub mod request;
pub mod text;
pub mod types;

pub use request::{RequestData, RequestMethod};
pub use text::{trim_blanks, unicode_char};
pub use types::ValueType;
