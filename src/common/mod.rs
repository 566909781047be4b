pub mod config;
pub mod encode;
pub mod error;
pub mod generator;
pub mod types;
pub mod writer;
