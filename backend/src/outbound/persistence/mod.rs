//! Account persistence adapters.

mod in_memory_account_service;

pub use in_memory_account_service::InMemoryAccountService;
