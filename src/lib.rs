//! Hostblock - block distracting hostnames via the hosts file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod entry;
pub mod hostnames;
pub mod linefile;
pub mod patcher;
pub mod platform;
