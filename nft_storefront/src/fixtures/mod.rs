// fixtures/mod.rs - Test fixtures module
//
// Reusable sample data for tests. Instead of repeating the same genre list
// and market items in every test, they are defined once here and shared by
// the unit tests and the integration tests under tests/.

pub mod catalog;
