//! Note rendering and vault layout.

pub mod logs;
pub mod master;
pub mod vault;
