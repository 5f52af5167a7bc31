//! Single-component unit tests.

mod catalog_tests;
mod coords_tests;
