mod admin_tests;
mod catalog_tests;
mod form_tests;
mod property_tests;
