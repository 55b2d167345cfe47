//! Library components of the `seqr-templates` command.

pub mod commands;
pub mod logging;
pub mod summary;
