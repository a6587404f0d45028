// Utility module exports

pub mod color;
pub mod time_geometry;
