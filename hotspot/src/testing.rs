//! Collaborators for tests: they record what they are asked to do.

use std::sync::{Arc, Mutex};

use crate::{
    components::Placement,
    math::Ray,
    plugins::{Hotspot, HotspotHitListener, ImageLoadProvider},
    rendering::{Bitmap, BitmapCallback, Director, Gpu, ProgramHandle},
};

/// Holds on to every request until the test completes it
#[derive(Clone, Default)]
pub(crate) struct ManualImageProvider {
    requests: Arc<Mutex<Vec<(String, BitmapCallback)>>>,
}

impl ImageLoadProvider for ManualImageProvider {
    fn on_provide_bitmap(&self, image_ref: &str, callback: BitmapCallback) {
        self.requests
            .lock()
            .unwrap()
            .push((image_ref.to_string(), callback));
    }
}

impl ManualImageProvider {
    /// Image refs requested so far, oldest first
    pub fn requested(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(r, _)| r.clone())
            .collect()
    }

    /// Complete every outstanding request with a 1x1 bitmap
    pub fn complete_all(&self) {
        let requests = std::mem::take(&mut *self.requests.lock().unwrap());
        for (_, callback) in requests {
            callback.on_bitmap_loaded(Bitmap::new(1, 1, vec![0, 0, 0, 255]).unwrap());
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDirector {
    pub viewports: Vec<(u32, u32)>,
    pub shots: Vec<(Placement, bool)>,
}

impl Director for RecordingDirector {
    fn update_viewport(&mut self, width: u32, height: u32) {
        self.viewports.push((width, height));
    }

    fn shot(
        &mut self,
        _gpu: &mut dyn Gpu,
        _program: ProgramHandle,
        placement: &Placement,
        stereo_adjust: bool,
    ) {
        self.shots.push((*placement, stereo_adjust));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingListener {
    pub hits: Mutex<Vec<(Option<String>, Ray)>>,
}

impl HotspotHitListener for RecordingListener {
    fn on_hotspot_hit(&self, hotspot: &dyn Hotspot, ray: &Ray) {
        self.hits
            .lock()
            .unwrap()
            .push((hotspot.title().map(str::to_string), *ray));
    }
}
