//! Chat completion client implementations

pub mod azure;

pub use azure::AzureChatClient;
