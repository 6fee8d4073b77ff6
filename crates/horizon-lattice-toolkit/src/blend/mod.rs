//! Color blending (`tint()` / `shade()`).

mod mix;

pub use mix::{BlendTarget, CHANNEL_MAX, blend, shade, shade_node, tint, tint_node};
