pub mod config;
pub mod include;
