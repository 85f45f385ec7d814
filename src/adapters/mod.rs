pub mod form_handler;
pub mod form_page;
pub mod health_handler;
pub mod page;
pub mod sink;
