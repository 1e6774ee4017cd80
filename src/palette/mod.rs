//! The panel's seven ink colours and the RGB quantizer that maps onto them.

/// Palette colour codes.
pub mod color;
/// Ordered threshold rules from RGB to palette colour.
pub mod quantize;
