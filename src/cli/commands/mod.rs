pub mod fold;
pub mod init;
pub mod lookup;
pub mod recolor;
pub mod tables;
