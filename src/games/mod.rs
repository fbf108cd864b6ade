//! Game implementations.

pub mod gwent;
