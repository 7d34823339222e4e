pub mod api;
pub mod cli;
pub mod core;
pub mod jsonbin;
pub mod mailbox;
