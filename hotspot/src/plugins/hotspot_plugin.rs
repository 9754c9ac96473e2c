use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicI32, Ordering},
        Arc, Weak,
    },
};

use glam::{Mat4, Vec3};

use crate::{
    components::{Placement, Size},
    math::{intersect_triangle, Ray, NOT_HIT},
    plugins::{Hotspot, HotspotHitListener, ImageLoadProvider, Plugin},
    rendering::{
        plane::PLANE_VERTEX_COUNT, BitmapCallback, BitmapProvider, BitmapTexture, BlendFactor,
        ContentType, Director, Gpu, Plane, Program,
    },
    HotspotResult,
};

/// Where a hotspot's texture selection stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    /// Nothing has been selected and nothing has been shown yet
    Idle,
    /// A selection was made that the next render step will pick up
    PendingSwap,
    /// The texture is loading or showing the selected source. Readiness is
    /// tracked separately by the texture.
    Active,
}

/// Resolves the hotspot's active texture key to an image and asks the image provider
/// for it.
///
/// Handed to the [`BitmapTexture`] so that every reload reads the key that is active at
/// the time of the request.
pub struct SourceLookup {
    sources: Arc<HashMap<i32, String>>,
    active_key: Arc<AtomicI32>,
    provider: Arc<dyn ImageLoadProvider>,
}

impl BitmapProvider for SourceLookup {
    fn provide_bitmap(&self, callback: BitmapCallback) {
        let key = self.active_key.load(Ordering::Acquire);
        match self.sources.get(&key) {
            Some(image_ref) => {
                log::debug!("[HOTSPOT] Requesting {} for texture key {}", image_ref, key);
                self.provider.on_provide_bitmap(image_ref, callback);
            }
            None => log::debug!("[HOTSPOT] No source registered for texture key {}", key),
        }
    }
}

struct GlResources {
    program: Program,
    plane: Plane,
    texture: BitmapTexture,
}

/// A textured quad placed in the panorama that can be gazed at and touched.
///
/// Build one with [`crate::plugins::HotspotBuilder`].
pub struct HotspotPlugin {
    placement: Placement,
    size: Size,
    title: Option<String>,
    sources: Arc<HashMap<i32, String>>,
    pending_key: AtomicI32,
    active_key: Arc<AtomicI32>,
    selected: AtomicBool,
    provider: Arc<dyn ImageLoadProvider>,
    click_listener: Option<Weak<dyn HotspotHitListener>>,
    gl: Option<GlResources>,
}

impl HotspotPlugin {
    pub(crate) fn new(
        provider: Arc<dyn ImageLoadProvider>,
        sources: HashMap<i32, String>,
        size: Size,
        click_listener: Option<Weak<dyn HotspotHitListener>>,
        title: Option<String>,
        placement: Placement,
    ) -> Self {
        Self {
            placement,
            size,
            title,
            sources: Arc::new(sources),
            pending_key: AtomicI32::new(0),
            active_key: Arc::new(AtomicI32::new(0)),
            selected: AtomicBool::new(false),
            provider,
            click_listener,
            gl: None,
        }
    }

    /// Current placement
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Move the hotspot
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    /// Quad extents
    pub fn size(&self) -> Size {
        self.size
    }

    /// Replace the display label
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// The key most recently passed to [`Hotspot::use_texture`]
    pub fn pending_key(&self) -> i32 {
        self.pending_key.load(Ordering::Acquire)
    }

    /// The key the texture is currently loading or showing
    pub fn active_key(&self) -> i32 {
        self.active_key.load(Ordering::Acquire)
    }

    /// Where the texture selection stands
    pub fn texture_state(&self) -> TextureState {
        if self.pending_key() != self.active_key() {
            return TextureState::PendingSwap;
        }
        let has_content = self
            .gl
            .as_ref()
            .map_or(false, |gl| gl.texture.has_content());
        if !self.selected.load(Ordering::Acquire) && !has_content {
            TextureState::Idle
        } else {
            TextureState::Active
        }
    }

    /// Is the texture uploaded and ready to draw?
    pub fn is_texture_ready(&self) -> bool {
        self.gl.as_ref().map_or(false, |gl| gl.texture.is_ready())
    }

    /// Has [`Plugin::init_in_gl`] run (and not been undone)?
    pub fn is_initialized(&self) -> bool {
        self.gl.is_some()
    }

    fn source_lookup(&self) -> SourceLookup {
        SourceLookup {
            sources: self.sources.clone(),
            active_key: self.active_key.clone(),
            provider: self.provider.clone(),
        }
    }

    /// Promote the pending key, if it changed, and have the texture reload.
    fn reconcile_texture(&mut self) {
        let Some(gl) = self.gl.as_mut() else {
            return;
        };
        let pending = self.pending_key.load(Ordering::Acquire);
        let active = self.active_key.load(Ordering::Acquire);
        if pending != active {
            log::debug!("[HOTSPOT] Swapping texture key {} -> {}", active, pending);
            self.active_key.store(pending, Ordering::Release);
            gl.texture.notify_changed();
        }
    }
}

impl Plugin for HotspotPlugin {
    fn init_in_gl(&mut self, gpu: &mut dyn Gpu) -> HotspotResult<()> {
        if self.gl.is_some() {
            log::warn!("[HOTSPOT] init_in_gl called twice without destroy_in_gl, ignoring");
            return Ok(());
        }

        let mut program = Program::new(ContentType::Bitmap);
        program.build(gpu)?;

        let mut plane = Plane::new(self.size);
        plane.prepare();

        let mut texture = BitmapTexture::new(self.source_lookup());
        if let Err(e) = texture.create(gpu) {
            program.destroy(gpu);
            return Err(e);
        }

        log::info!(
            "[HOTSPOT] Initialised {:?} ({}x{}, {} sources)",
            self.title.as_deref().unwrap_or(""),
            self.size.width,
            self.size.height,
            self.sources.len()
        );
        self.gl = Some(GlResources {
            program,
            plane,
            texture,
        });
        Ok(())
    }

    fn renderer(
        &mut self,
        index: usize,
        width: u32,
        height: u32,
        director: &mut dyn Director,
        gpu: &mut dyn Gpu,
    ) {
        self.reconcile_texture();

        let Some(gl) = self.gl.as_mut() else {
            return;
        };
        let Some(program) = gl.program.handle() else {
            return;
        };

        if let Err(e) = gl.texture.texture(gpu, program) {
            log::error!("[HOTSPOT] Unable to upload texture: {:?}", e);
            return;
        }

        // Still loading, the common case for the first few frames.
        if !gl.texture.is_ready() {
            return;
        }

        director.update_viewport(width, height);
        gl.program.use_program(gpu);

        let uploaded = gl
            .plane
            .upload_vertices_buffer_if_need(gpu, program, index)
            .and_then(|_| gl.plane.upload_tex_coordinate_buffer_if_need(gpu, program, index));
        if let Err(e) = uploaded {
            log::error!("[HOTSPOT] Unable to upload plane buffers: {:?}", e);
            return;
        }

        director.shot(gpu, program, &self.placement, true);

        gpu.enable_blend(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        gl.plane.draw(gpu);
        gpu.disable_blend();
    }

    fn destroy_in_gl(&mut self, gpu: &mut dyn Gpu) {
        let Some(mut gl) = self.gl.take() else {
            return;
        };
        gl.texture.destroy(gpu);
        gl.plane.destroy(gpu);
        gl.program.destroy(gpu);
        log::info!(
            "[HOTSPOT] Destroyed {:?}",
            self.title.as_deref().unwrap_or("")
        );
    }

    fn removable(&self) -> bool {
        true
    }

    fn as_hotspot(&self) -> Option<&dyn Hotspot> {
        Some(self)
    }
}

impl Hotspot for HotspotPlugin {
    fn hit(&self, ray: &Ray) -> f32 {
        let Some(vertices) = self.gl.as_ref().and_then(|gl| gl.plane.vertices_buffer(0)) else {
            return NOT_HIT;
        };
        hit_quad(ray, &self.placement.matrix(), vertices)
    }

    fn on_touch_hit(&self, ray: &Ray) {
        if let Some(listener) = self.click_listener.as_ref().and_then(Weak::upgrade) {
            listener.on_hotspot_hit(self, ray);
        }
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn use_texture(&self, key: i32) {
        self.pending_key.store(key, Ordering::Release);
        self.selected.store(true, Ordering::Release);
    }
}

/// Hit test a quad given as four local-space float triples.
///
/// The quad is split into triangles `(v0, v1, v2)` and `(v1, v2, v3)`, which are tested
/// independently; the nearer hit wins. Since [`NOT_HIT`] is infinite, taking the `min`
/// is correct when either or both triangles miss. Anything but exactly four vertices
/// never hits.
fn hit_quad(ray: &Ray, model: &Mat4, vertices: &[f32]) -> f32 {
    let points: Vec<Vec3> = vertices
        .chunks_exact(3)
        .map(|v| model.transform_point3(Vec3::new(v[0], v[1], v[2])))
        .collect();

    if points.len() != PLANE_VERTEX_COUNT {
        return NOT_HIT;
    }

    let first = intersect_triangle(ray, points[0], points[1], points[2]);
    let second = intersect_triangle(ray, points[1], points[2], points[3]);
    first.min(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        plugins::HotspotBuilder,
        rendering::{GpuCommand, HeadlessGpu},
        testing::{ManualImageProvider, RecordingDirector, RecordingListener},
    };
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn hotspot(provider: &ManualImageProvider) -> HotspotPlugin {
        let mut builder = HotspotBuilder::new(Arc::new(provider.clone()));
        builder
            .size(2.0, 1.0)
            .source(0, "img-a")
            .source(1, "img-b")
            .title("door");
        builder.build().unwrap()
    }

    fn initialised(provider: &ManualImageProvider, gpu: &mut HeadlessGpu) -> HotspotPlugin {
        let mut hotspot = hotspot(provider);
        hotspot.init_in_gl(gpu).unwrap();
        hotspot
    }

    fn render(hotspot: &mut HotspotPlugin, gpu: &mut HeadlessGpu) -> RecordingDirector {
        let mut director = RecordingDirector::default();
        hotspot.renderer(0, 1280, 720, &mut director, gpu);
        director
    }

    fn blend_toggles(gpu: &HeadlessGpu) -> usize {
        gpu.commands()
            .iter()
            .filter(|c| matches!(c, GpuCommand::EnableBlend(..) | GpuCommand::DisableBlend))
            .count()
    }

    #[test]
    pub fn test_hit_uninitialised_never_hits() {
        let provider = ManualImageProvider::default();
        let hotspot = hotspot(&provider);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(hotspot.hit(&ray), NOT_HIT);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(hotspot.hit(&ray), NOT_HIT);
    }

    #[test]
    pub fn test_hit_distance() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        hotspot.set_placement(Placement::from_translation(Vec3::new(0.0, 0.0, -4.0)));

        // Dead centre lies on the shared diagonal.
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_relative_eq!(hotspot.hit(&ray), 4.0);

        // Strictly inside the first triangle (upper left) and the second (lower right).
        let ray = Ray::new(Vec3::new(-0.6, 0.3, 0.0), Vec3::NEG_Z);
        assert_relative_eq!(hotspot.hit(&ray), 4.0);
        let ray = Ray::new(Vec3::new(0.6, -0.3, 0.0), Vec3::NEG_Z);
        assert_relative_eq!(hotspot.hit(&ray), 4.0);

        // Distances are in multiples of the direction.
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        assert_relative_eq!(hotspot.hit(&ray), 2.0);
    }

    #[test]
    pub fn test_hit_misses() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        hotspot.set_placement(Placement::from_translation(Vec3::new(0.0, 0.0, -4.0)));

        let misses = [
            // Beside the quad (it is 2 wide, 1 tall)
            Ray::new(Vec3::new(1.5, 0.0, 0.0), Vec3::NEG_Z),
            Ray::new(Vec3::new(0.0, 0.6, 0.0), Vec3::NEG_Z),
            // Pointing away
            Ray::new(Vec3::ZERO, Vec3::Z),
            // Parallel to it
            Ray::new(Vec3::new(0.0, 0.0, -4.0), Vec3::X),
        ];
        for ray in misses {
            assert_eq!(hotspot.hit(&ray), NOT_HIT, "{:?}", ray);
        }
    }

    #[test]
    pub fn test_hit_follows_placement() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);

        // Off to the right, turned to face the origin.
        hotspot.set_placement(
            Placement::from_translation(Vec3::new(3.0, 0.0, 0.0))
                .with_rotation_euler(-FRAC_PI_2, 0.0, 0.0),
        );

        let ray = Ray::new(Vec3::new(0.0, 0.2, 0.3), Vec3::X);
        assert_relative_eq!(hotspot.hit(&ray), 3.0, epsilon = 1e-5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(hotspot.hit(&ray), NOT_HIT);
    }

    #[test]
    pub fn test_hit_quad_takes_nearer_triangle() {
        // A folded quad: v3 is pulled towards the viewer and over the diagonal, so the
        // second triangle covers part of the first and is nearer there.
        #[rustfmt::skip]
        let vertices = [
            -1.0, 1.0, 0.0,
            1.0, 1.0, 0.0,
            -1.0, -1.0, 0.0,
            -1.0, 0.5, 4.0,
        ];
        let ray = Ray::new(Vec3::new(-0.5, 0.0, 10.0), Vec3::NEG_Z);
        let first = intersect_triangle(
            &ray,
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
        );
        let second = intersect_triangle(
            &ray,
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(-1.0, 0.5, 4.0),
        );
        assert!(first.is_finite());
        assert!(second.is_finite());
        assert!(second < first);
        assert_relative_eq!(first, 10.0, epsilon = 1e-5);
        assert_relative_eq!(second, 10.0 - 4.0 / 3.0, epsilon = 1e-5);
        assert_relative_eq!(hit_quad(&ray, &Mat4::IDENTITY, &vertices), second);
    }

    #[test]
    pub fn test_hit_quad_requires_four_vertices() {
        let ray = Ray::new(Vec3::new(-0.5, 0.5, 1.0), Vec3::NEG_Z);
        let triangle = [-1.0, 1.0, 0.0, 1.0, 1.0, 0.0, -1.0, -1.0, 0.0];
        assert_eq!(hit_quad(&ray, &Mat4::IDENTITY, &triangle), NOT_HIT);

        let mut pentagon = triangle.to_vec();
        pentagon.extend_from_slice(&[1.0, -1.0, 0.0, 0.0, -2.0, 0.0]);
        assert_eq!(hit_quad(&ray, &Mat4::IDENTITY, &pentagon), NOT_HIT);
    }

    #[test]
    pub fn test_use_texture_is_deferred_to_render_step() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = hotspot(&provider);

        // Selecting before init is allowed.
        hotspot.use_texture(1);
        assert_eq!(hotspot.texture_state(), TextureState::PendingSwap);
        assert_eq!(hotspot.active_key(), 0);

        hotspot.init_in_gl(&mut gpu).unwrap();
        assert_eq!(provider.requested(), vec!["img-a"]);

        render(&mut hotspot, &mut gpu);
        assert_eq!(hotspot.active_key(), 1);
        assert_eq!(hotspot.texture_state(), TextureState::Active);
        assert_eq!(provider.requested(), vec!["img-a", "img-b"]);
    }

    #[test]
    pub fn test_redundant_selection_notifies_once() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);

        hotspot.use_texture(1);
        hotspot.use_texture(1);
        hotspot.use_texture(1);
        render(&mut hotspot, &mut gpu);
        hotspot.use_texture(1);
        render(&mut hotspot, &mut gpu);
        render(&mut hotspot, &mut gpu);

        assert_eq!(hotspot.active_key(), 1);
        assert_eq!(provider.requested(), vec!["img-a", "img-b"]);
    }

    #[test]
    pub fn test_missing_source_starves_until_valid_key() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);

        hotspot.use_texture(7);
        for _ in 0..3 {
            render(&mut hotspot, &mut gpu);
            provider.complete_all();
        }
        assert!(!hotspot.is_texture_ready());
        assert_eq!(gpu.draw_count(), 0);
        // Only the initial request for key 0 went out, and it is stale now.
        assert_eq!(provider.requested(), Vec::<String>::new());

        hotspot.use_texture(0);
        render(&mut hotspot, &mut gpu);
        provider.complete_all();
        render(&mut hotspot, &mut gpu);
        assert!(hotspot.is_texture_ready());
        assert_eq!(gpu.draw_count(), 1);
    }

    #[test]
    pub fn test_not_ready_skips_drawing() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);

        let director = render(&mut hotspot, &mut gpu);
        assert_eq!(gpu.draw_count(), 0);
        assert_eq!(blend_toggles(&gpu), 0);
        assert!(director.viewports.is_empty());
        assert!(director.shots.is_empty());
    }

    #[test]
    pub fn test_render_before_init_is_noop() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = hotspot(&provider);
        hotspot.use_texture(1);

        let director = render(&mut hotspot, &mut gpu);
        assert!(gpu.commands().is_empty());
        assert!(director.viewports.is_empty());
        // The selection waits for a render step that can act on it.
        assert_eq!(hotspot.texture_state(), TextureState::PendingSwap);
    }

    #[test]
    pub fn test_ready_draws_and_restores_blend() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        provider.complete_all();

        for frame in 1..=3 {
            let mut director = RecordingDirector::default();
            for eye in 0..2 {
                hotspot.renderer(eye, 1280, 720, &mut director, &mut gpu);
                assert!(!gpu.blend_enabled());
            }
            assert_eq!(gpu.draw_count(), frame * 2);
            assert_eq!(director.shots, vec![(Placement::original(), true); 2]);
        }

        // Blend is set up around each draw and nowhere else.
        let blend: Vec<&GpuCommand> = gpu
            .commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    GpuCommand::EnableBlend(..) | GpuCommand::DisableBlend | GpuCommand::Draw(..)
                )
            })
            .collect();
        for chunk in blend.chunks(3) {
            assert_eq!(
                chunk[0],
                &GpuCommand::EnableBlend(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)
            );
            assert!(matches!(chunk[1], GpuCommand::Draw(..)));
            assert_eq!(chunk[2], &GpuCommand::DisableBlend);
        }

        // Buffers were uploaded once per eye, not once per frame.
        let uploads = gpu
            .commands()
            .iter()
            .filter(|c| matches!(c, GpuCommand::UploadAttribute { .. }))
            .count();
        assert_eq!(uploads, 4);
    }

    #[test]
    pub fn test_texture_swap_scenario() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = hotspot(&provider);
        assert_eq!(hotspot.size(), Size::new(2.0, 1.0).unwrap());
        assert_eq!(*hotspot.placement(), Placement::original());
        assert_eq!(hotspot.texture_state(), TextureState::Idle);
        hotspot.init_in_gl(&mut gpu).unwrap();

        hotspot.use_texture(1);

        // First step: the key moves and the texture is told to reload.
        let director = render(&mut hotspot, &mut gpu);
        assert_eq!(hotspot.active_key(), 1);
        assert_eq!(provider.requested(), vec!["img-a", "img-b"]);
        assert_eq!(gpu.draw_count(), 0);
        assert!(director.viewports.is_empty());

        // The load lands, and the second step draws.
        provider.complete_all();
        let director = render(&mut hotspot, &mut gpu);
        assert_eq!(gpu.draw_count(), 1);
        assert_eq!(director.viewports, vec![(1280, 720)]);
        assert!(!gpu.blend_enabled());
    }

    #[test]
    pub fn test_upload_failure_skips_frame() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        provider.complete_all();

        gpu.fail_uploads(true);
        render(&mut hotspot, &mut gpu);
        assert_eq!(gpu.draw_count(), 0);
        assert!(!gpu.blend_enabled());
    }

    #[test]
    pub fn test_destroy_releases_gpu_resources() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        provider.complete_all();
        render(&mut hotspot, &mut gpu);
        assert!(gpu.live_buffers() > 0);

        hotspot.destroy_in_gl(&mut gpu);
        assert!(!hotspot.is_initialized());
        assert_eq!(gpu.live_buffers(), 0);
        assert_eq!(gpu.live_textures(), 0);
        assert!(gpu
            .commands()
            .iter()
            .any(|c| matches!(c, GpuCommand::DeleteProgram(..))));

        let ray = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);
        assert_eq!(hotspot.hit(&ray), NOT_HIT);
        assert!(hotspot.removable());
    }

    #[test]
    pub fn test_touch_hit_forwards_to_listener() {
        let provider = ManualImageProvider::default();
        let listener = Arc::new(RecordingListener::default());
        let mut builder = HotspotBuilder::new(Arc::new(provider));
        builder.title("door").listener(&listener);
        let hotspot = builder.build().unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        hotspot.on_touch_hit(&ray);

        let hits = listener.hits.lock().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], (Some("door".to_string()), ray));
    }

    #[test]
    pub fn test_touch_hit_without_listener_is_ignored() {
        let provider = ManualImageProvider::default();
        let hotspot = hotspot(&provider);
        hotspot.on_touch_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));

        // A listener that went away is as good as none.
        let listener = Arc::new(RecordingListener::default());
        let mut builder = HotspotBuilder::new(Arc::new(provider));
        builder.listener(&listener);
        let hotspot = builder.build().unwrap();
        drop(listener);
        hotspot.on_touch_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        hotspot.on_gaze_enter(10);
        hotspot.on_gaze_exit();
    }

    #[test]
    pub fn test_title() {
        let provider = ManualImageProvider::default();
        let mut hotspot = hotspot(&provider);
        assert_eq!(hotspot.title(), Some("door"));
        hotspot.set_title(None);
        assert_eq!(hotspot.title(), None);
    }

    #[test]
    pub fn test_double_init_is_ignored() {
        let provider = ManualImageProvider::default();
        let mut gpu = HeadlessGpu::default();
        let mut hotspot = initialised(&provider, &mut gpu);
        hotspot.init_in_gl(&mut gpu).unwrap();
        assert_eq!(gpu.live_textures(), 1);
        assert_eq!(provider.requested().len(), 1);
    }
}
