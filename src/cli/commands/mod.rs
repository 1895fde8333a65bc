pub mod comment;
mod command_result;
pub mod helper;
pub mod init;
pub mod merge;
pub mod sync;
pub mod unmerge;
pub mod update;

pub use command_result::*;
