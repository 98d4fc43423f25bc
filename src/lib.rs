pub mod config;
pub mod curriculum;
pub mod draft;
pub mod output;
pub mod scoring;
pub mod storage;
