// Property-based tests for the week preview
// Checks time geometry, week construction and selection laws with random inputs

mod selection_properties;
mod time_geometry_properties;
mod week_properties;
