//! Battery status badge composited over externally supplied frames.

/// Badge layout and compositor.
pub mod badge;
/// Battery icon.
pub mod battery;
