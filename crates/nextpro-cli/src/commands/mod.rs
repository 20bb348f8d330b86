//! Command handlers. create-next-pro has a single command.

pub mod create;
