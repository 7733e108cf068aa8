// Browser-only helpers

pub mod mapbox_ffi;
