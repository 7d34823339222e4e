pub mod models;
mod repo;
pub use repo::MailboxRepo;
