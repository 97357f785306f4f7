pub mod config;
pub mod logging;

pub mod checksum;
pub mod generate;
pub mod record;
pub mod report;
pub mod scan;
pub mod verify;
