use crate::{
    math::Ray,
    rendering::{BitmapCallback, Director, Gpu},
    HotspotResult,
};

/// Building hotspots from code or configuration
pub mod builder;
/// The textured, hit-testable quad
pub mod hotspot_plugin;
/// Finding the nearest hotspot along a ray
pub mod picker;
/// Owns plugins and drives their lifecycle
pub mod plugin_manager;

pub use builder::{HotspotBuilder, HotspotConfig};
pub use hotspot_plugin::{HotspotPlugin, SourceLookup, TextureState};
pub use picker::{pick_nearest, HitResult, Picker};
pub use plugin_manager::PluginManager;

/// Something the renderer draws every frame.
///
/// All methods are called on the render thread, in this order: `init_in_gl` once per
/// GPU context, then `before_renderer` and `renderer` every frame, then `destroy_in_gl`
/// when the context goes away.
pub trait Plugin {
    /// Create GPU resources
    fn init_in_gl(&mut self, gpu: &mut dyn Gpu) -> HotspotResult<()>;

    /// Called once per frame before any eye is rendered
    fn before_renderer(&mut self, _total_width: u32, _total_height: u32) {}

    /// Draw into eye `index`, a `width` x `height` target
    fn renderer(
        &mut self,
        index: usize,
        width: u32,
        height: u32,
        director: &mut dyn Director,
        gpu: &mut dyn Gpu,
    );

    /// Release GPU resources
    fn destroy_in_gl(&mut self, gpu: &mut dyn Gpu);

    /// May the host evict this plugin at will?
    fn removable(&self) -> bool;

    /// The hit-testing side of this plugin, if it has one
    fn as_hotspot(&self) -> Option<&dyn Hotspot> {
        None
    }
}

/// Something that can be looked at or touched.
pub trait Hotspot {
    /// Distance along `ray` to the nearest point on this hotspot, or
    /// [`crate::NOT_HIT`]
    fn hit(&self, ray: &Ray) -> f32;

    /// The user touched this hotspot along `ray`
    fn on_touch_hit(&self, ray: &Ray);

    /// The user's gaze started resting on this hotspot at `timestamp` (milliseconds)
    fn on_gaze_enter(&self, _timestamp: u64) {}

    /// The user's gaze left this hotspot
    fn on_gaze_exit(&self) {}

    /// Display label
    fn title(&self) -> Option<&str>;

    /// Select the texture source to show from the next frame on
    fn use_texture(&self, key: i32);
}

/// Receives touches on hotspots. Hotspots only keep a weak reference to it.
pub trait HotspotHitListener: Send + Sync {
    /// `hotspot` was touched along `ray`
    fn on_hotspot_hit(&self, hotspot: &dyn Hotspot, ray: &Ray);
}

/// Fetches pixels for an image reference, eg. a URI or a path.
///
/// The callback may be completed on any thread, or never.
pub trait ImageLoadProvider: Send + Sync {
    /// Start loading `image_ref`
    fn on_provide_bitmap(&self, image_ref: &str, callback: BitmapCallback);
}

impl<F> ImageLoadProvider for F
where
    F: Fn(&str, BitmapCallback) + Send + Sync,
{
    fn on_provide_bitmap(&self, image_ref: &str, callback: BitmapCallback) {
        self(image_ref, callback)
    }
}
