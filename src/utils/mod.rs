// Shared utilities

pub mod leaflet_ffi;
