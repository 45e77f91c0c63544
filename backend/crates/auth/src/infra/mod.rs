//! Infrastructure Layer
//!
//! Repository implementations: Postgres for users and credentials, process
//! memory for sessions.

pub mod memory;
pub mod postgres;

pub use memory::MemorySessionStore;
pub use postgres::PgAuthRepository;
