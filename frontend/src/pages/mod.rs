pub mod catalog;
pub mod static_page;
