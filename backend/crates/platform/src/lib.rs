//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, salted, tunable cost factor)
//! - Cookie management

pub mod cookie;
pub mod password;
