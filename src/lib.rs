pub mod backend;
pub mod frontend;
