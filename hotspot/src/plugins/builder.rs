use std::{
    collections::HashMap,
    sync::{Arc, Weak},
};

use serde::{Deserialize, Serialize};

use crate::{
    components::{Placement, Size},
    plugins::{HotspotHitListener, HotspotPlugin, ImageLoadProvider},
    HotspotResult,
};

/// The serialisable part of a hotspot's configuration.
///
/// ```json
/// {
///     "sources": { "0": "door_closed.png", "1": "door_open.png" },
///     "width": 2.0,
///     "height": 1.0,
///     "title": "Door"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotspotConfig {
    /// Texture key to image reference
    #[serde(default)]
    pub sources: HashMap<i32, String>,
    /// Quad width in world units
    pub width: f32,
    /// Quad height in world units
    pub height: f32,
    /// Display label
    #[serde(default)]
    pub title: Option<String>,
    /// Where to put the hotspot. Defaults to [`Placement::original`].
    #[serde(default)]
    pub placement: Option<Placement>,
}

/// Builds a [`HotspotPlugin`]. No GPU resources are touched until the plugin's
/// `init_in_gl`.
pub struct HotspotBuilder {
    provider: Arc<dyn ImageLoadProvider>,
    config: HotspotConfig,
    listener: Option<Weak<dyn HotspotHitListener>>,
}

impl HotspotBuilder {
    /// Create a `HotspotBuilder` that loads its images through `provider`
    pub fn new(provider: Arc<dyn ImageLoadProvider>) -> Self {
        Self::from_config(HotspotConfig::default(), provider)
    }

    /// Start from a configuration, eg. one read from a file
    pub fn from_config(config: HotspotConfig, provider: Arc<dyn ImageLoadProvider>) -> Self {
        Self {
            provider,
            config,
            listener: None,
        }
    }

    /// Register an image for texture `key`, replacing any earlier one
    pub fn source(&mut self, key: i32, image_ref: impl Into<String>) -> &mut Self {
        self.config.sources.insert(key, image_ref.into());
        self
    }

    /// Register several images at once
    pub fn sources<I, S>(&mut self, sources: I) -> &mut Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        self.config
            .sources
            .extend(sources.into_iter().map(|(k, s)| (k, s.into())));
        self
    }

    /// Set the quad extents
    pub fn size(&mut self, width: f32, height: f32) -> &mut Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    /// Set who gets told about touches. Only a weak reference is kept.
    pub fn listener<L: HotspotHitListener + 'static>(&mut self, listener: &Arc<L>) -> &mut Self {
        let listener = Arc::downgrade(listener) as Weak<dyn HotspotHitListener>;
        self.listener = Some(listener);
        self
    }

    /// Set the display label
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.config.title = Some(title.into());
        self
    }

    /// Set the placement
    pub fn placement(&mut self, placement: Placement) -> &mut Self {
        self.config.placement = Some(placement);
        self
    }

    /// Build the [`HotspotPlugin`]. Fails only if the size is negative or not finite;
    /// an empty source map is fine, the hotspot will just never be drawn.
    pub fn build(self) -> HotspotResult<HotspotPlugin> {
        let HotspotConfig {
            sources,
            width,
            height,
            title,
            placement,
        } = self.config;
        let size = Size::new(width, height)?;

        Ok(HotspotPlugin::new(
            self.provider,
            sources,
            size,
            self.listener,
            title,
            placement.unwrap_or_else(Placement::original),
        ))
    }
}
