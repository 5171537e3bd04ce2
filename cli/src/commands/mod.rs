//! CLI command implementations

pub mod chat;
pub mod pair;
pub mod serve;
pub mod tools;

pub use chat::chat_command;
pub use pair::pair_command;
pub use serve::serve_command;
pub use tools::tools_command;
