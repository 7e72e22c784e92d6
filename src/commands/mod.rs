#![allow(clippy::needless_pass_by_value)]

pub mod add;
pub mod check;
pub mod init;
pub mod list;
