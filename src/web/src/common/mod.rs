pub mod default_handler;
pub mod page_handler;
