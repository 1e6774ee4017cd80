//! Presenting frames: the sink seam the panel transport sits behind, and the presenter that
//! decides what to draw and how to degrade when memory is short.

/// Screen composition and fallback policy.
pub mod pipeline;
/// Frame sink trait and built-in sinks.
pub mod sink;
