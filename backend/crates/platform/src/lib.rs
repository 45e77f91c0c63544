//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Encoding and comparison utilities (Base64, constant-time equality)
//! - Password hashing (Argon2id)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
