pub mod catalog;
pub mod system;
