#![deny(missing_docs)]

//! Hit-testable, textured quads for panorama and VR renderers.
//!
//! A [`HotspotPlugin`] is a rectangle placed somewhere in the scene. Each frame the host
//! renderer asks it to draw itself, and whenever the user looks at or touches something
//! the host asks it how far along the ray it is. The hotspot shows one of several images,
//! picked by key with [`plugins::Hotspot::use_texture`], and swaps between them on the
//! render thread once the new image has loaded.
//!
//! # Getting started
//! ```no_run
//! use std::sync::Arc;
//! use hotspot::{plugins::PluginManager, workers::FileImageLoader, HotspotBuilder};
//!
//! # fn main() -> hotspot::HotspotResult<()> {
//! let loader = Arc::new(FileImageLoader::new("assets")?);
//! let mut builder = HotspotBuilder::new(loader);
//! builder
//!     .source(0, "door_closed.png")
//!     .source(1, "door_open.png")
//!     .size(2.0, 1.0)
//!     .title("Door");
//!
//! let mut plugins = PluginManager::new();
//! plugins.add(builder.build()?);
//! # Ok(())
//! # }
//! ```
//!
//! The GPU itself is hidden behind [`rendering::Gpu`]; [`rendering::HeadlessGpu`] records
//! commands instead of drawing, which is handy in tests.

/// Placement and size of a hotspot
pub mod components;
mod hotspot_error;
/// Installing a logger
pub mod logging;
/// Rays and intersections
pub mod math;
/// The plugin and hotspot contracts, and their implementations
pub mod plugins;
/// Talking to the GPU
pub mod rendering;
/// Background image loading
pub mod workers;

#[cfg(test)]
mod testing;

pub use components::{Placement, Size};
pub use hotspot_error::HotspotError;
pub use math::{Ray, NOT_HIT};
pub use plugins::{HotspotBuilder, HotspotConfig, HotspotPlugin};

/// Hotspot result type
pub type HotspotResult<T> = std::result::Result<T, HotspotError>;
