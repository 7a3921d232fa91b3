pub mod error;
pub mod knowledge_base;
pub mod unify;
pub mod query;
pub mod discover;
pub mod parser;
pub mod loader;

pub use discover::discover;
pub use error::Error;
pub use knowledge_base::KnowledgeBase;
pub use query::{proves, query, solve_premises, Answers};
