//! CLI commands

pub mod init;
