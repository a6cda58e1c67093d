pub mod add;
pub mod backup;
pub mod codec;
pub mod config;
pub mod conflict;
pub mod del;
pub mod export;
pub mod service;
pub mod store;
