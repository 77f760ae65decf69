pub mod fetch;
pub mod list_utils;
pub mod selection;
