//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: in-memory account store backing `AccountService`
//! - **hashing**: Argon2 digests backing `PasswordHasher`
//!
//! Adapters translate between domain types and their storage representation.
//! Uniqueness and credential rules live with the store, not the HTTP layer.

pub mod hashing;
pub mod persistence;
