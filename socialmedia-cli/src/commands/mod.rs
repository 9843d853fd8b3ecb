//! CLI Commands

pub mod block;
pub mod platforms;
