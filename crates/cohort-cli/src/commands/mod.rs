pub mod config;
pub mod seed;
pub mod serve;
