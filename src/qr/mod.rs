//! Drawing pre-computed QR module grids. Encoding the grid is out of scope; callers bring one.

/// Module grid container and payload helpers.
pub mod grid;
/// Grid placement and captions.
pub mod placement;
