pub mod catalog_dropdown;
pub mod loading;
pub mod navbar;
pub mod profile_dropdown;
