//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64, constant-time compare)
//! - Password hashing (Argon2id)
//! - Bearer token header extraction

pub mod bearer;
pub mod crypto;
pub mod password;
