//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Cookie management
//!
//! Policy decisions (minimum password length, email format, roles) live in
//! the domain crates; this crate only knows how to do the mechanical work.

pub mod cookie;
pub mod password;
