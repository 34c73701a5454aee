// Internal support modules shared across the library

pub mod error;
