//! UpSet Core Types and Definitions
//!
//! This crate provides the foundational types used to draw UpSet plots. It
//! includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Scales**: Linear scales with d3-compatible ticks ([`scale::LinearScale`])
//! - **Draw**: Drawing primitives rendered to SVG ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scale;
