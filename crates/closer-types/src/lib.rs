pub mod message;
pub mod event;
pub mod playbook;
pub mod config;
pub mod error;
pub mod session;


pub use error::CloserError;
pub type Result<T> = std::result::Result<T, CloserError>;
