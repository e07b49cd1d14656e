pub mod compile;
pub mod config;
pub mod emit;
pub mod error;
pub mod grammer;
pub mod msg;
pub mod source;

pub use compile::{Assignment, Compiler, Listing};
pub use config::Config;
pub use emit::Backend;
pub use error::{Error, ErrorKind};
pub use grammer::ast::Node;
