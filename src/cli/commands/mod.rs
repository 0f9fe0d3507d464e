pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod lesson;
pub mod log;
pub mod stats;
pub mod student;
