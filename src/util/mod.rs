//! Shared utilities for the coloring pipeline.
//!
//! Value normalization and the red → white → blue color ramp.

pub mod score_color;
