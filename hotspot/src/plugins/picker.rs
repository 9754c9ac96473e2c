use crate::{math::Ray, plugins::Hotspot, NOT_HIT};

/// The nearest hotspot along a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    /// Position of the hotspot in the slice that was searched
    pub index: usize,
    /// Distance along the ray
    pub distance: f32,
}

/// Find the nearest hotspot hit by `ray`. On a tie the earlier hotspot wins.
pub fn pick_nearest(ray: &Ray, hotspots: &[&dyn Hotspot]) -> Option<HitResult> {
    let mut nearest: Option<HitResult> = None;
    for (index, hotspot) in hotspots.iter().enumerate() {
        let distance = hotspot.hit(ray);
        if distance == NOT_HIT {
            continue;
        }
        if nearest.map_or(true, |n| distance < n.distance) {
            nearest = Some(HitResult { index, distance });
        }
    }
    nearest
}

/// Routes gaze and touch rays to hotspots.
///
/// The gazed hotspot is remembered by identity, so the slice passed in may be reordered,
/// grown or shrunk between frames. A hotspot that has left the slice gets no
/// `on_gaze_exit`.
#[derive(Debug, Default)]
pub struct Picker {
    gaze_target: Option<GazeTarget>,
}

#[derive(Debug, Clone, Copy)]
struct GazeTarget {
    index: usize,
    address: usize,
}

fn address(hotspot: &dyn Hotspot) -> usize {
    hotspot as *const _ as *const () as usize
}

impl Picker {
    /// Create a picker with nothing under the gaze
    pub fn new() -> Self {
        Default::default()
    }

    /// Position of the gazed hotspot in the slice given to the last
    /// [`Picker::update_gaze`]
    pub fn gaze_target(&self) -> Option<usize> {
        self.gaze_target.map(|t| t.index)
    }

    /// Update the gaze with this frame's ray. When the nearest hotspot changes, the old
    /// one gets `on_gaze_exit` and the new one `on_gaze_enter(timestamp)`.
    pub fn update_gaze(
        &mut self,
        ray: &Ray,
        hotspots: &[&dyn Hotspot],
        timestamp: u64,
    ) -> Option<HitResult> {
        let hit = pick_nearest(ray, hotspots);
        let target = hit.map(|h| GazeTarget {
            index: h.index,
            address: address(hotspots[h.index]),
        });

        let previous = self.gaze_target.map(|t| t.address);
        if previous != target.map(|t| t.address) {
            if let Some(previous) = previous
                .and_then(|a| hotspots.iter().find(|h| address(**h) == a))
            {
                previous.on_gaze_exit();
            }
            if let Some(target) = target {
                log::trace!("[HOTSPOT_PICKER] Gaze entered hotspot {}", target.index);
                hotspots[target.index].on_gaze_enter(timestamp);
            }
        }
        self.gaze_target = target;

        hit
    }

    /// Deliver a touch along `ray` to the nearest hotspot, if any
    pub fn touch(&self, ray: &Ray, hotspots: &[&dyn Hotspot]) -> Option<HitResult> {
        let hit = pick_nearest(ray, hotspots)?;
        log::debug!(
            "[HOTSPOT_PICKER] Touched hotspot {} at distance {}",
            hit.index,
            hit.distance
        );
        hotspots[hit.index].on_touch_hit(ray);
        Some(hit)
    }
}
