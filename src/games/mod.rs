//! Game implementations.

pub mod fordle;
