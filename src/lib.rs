// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod procfs;
pub mod storage;
