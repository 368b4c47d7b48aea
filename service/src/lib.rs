pub mod assign_service;
pub mod error;
