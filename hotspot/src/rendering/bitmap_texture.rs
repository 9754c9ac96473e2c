use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
};

use anyhow::anyhow;

use crate::{
    rendering::gpu::{Gpu, ProgramHandle, TextureHandle},
    HotspotResult,
};

/// Decoded RGBA8 pixel data, ready to be uploaded
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Bitmap {
    /// Wrap tightly packed RGBA8 pixels
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> HotspotResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(anyhow!(
                "Bitmap of {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            )
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode a PNG or JPEG
    pub fn decode(bytes: &[u8]) -> HotspotResult<Self> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            pixels: img.into_raw(),
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Supplies pixels to a [`BitmapTexture`] whenever it asks for them.
///
/// Implementations may complete the callback immediately, later from another thread,
/// or never.
pub trait BitmapProvider: Send + Sync {
    /// Start producing the bitmap the texture should currently show
    fn provide_bitmap(&self, callback: BitmapCallback);
}

#[derive(Debug, Default)]
struct Inbox {
    generation: AtomicU64,
    delivered: Mutex<Option<(u64, Bitmap)>>,
}

// `generation` only changes while `delivered` is locked, so a delivery checked under
// the lock can never overwrite a newer one.
impl Inbox {
    fn delivered(&self) -> MutexGuard<'_, Option<(u64, Bitmap)>> {
        // The slot only ever holds plain data, so a poisoned lock is still usable.
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store `bitmap` if `generation` is still current. Returns whether it was kept.
    fn deliver(&self, generation: u64, bitmap: Bitmap) -> bool {
        let mut delivered = self.delivered();
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        *delivered = Some((generation, bitmap));
        true
    }

    /// Start a new request, forgetting anything delivered for the old one
    fn advance(&self) {
        let mut delivered = self.delivered();
        self.generation.fetch_add(1, Ordering::AcqRel);
        *delivered = None;
    }
}

/// Completion handle given to a [`BitmapProvider`].
///
/// It can be sent to any thread. Delivering through a callback whose request has since
/// been superseded is harmless: the bitmap is dropped.
#[derive(Debug)]
pub struct BitmapCallback {
    generation: u64,
    inbox: Arc<Inbox>,
}

impl BitmapCallback {
    /// Which request this callback answers
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Has the texture moved on to a newer request?
    pub fn is_stale(&self) -> bool {
        self.inbox.generation.load(Ordering::Acquire) != self.generation
    }

    /// Hand the loaded bitmap back to the texture. It is uploaded on the render thread
    /// during the next [`BitmapTexture::texture`] call.
    pub fn on_bitmap_loaded(self, bitmap: Bitmap) {
        if !self.inbox.deliver(self.generation, bitmap) {
            log::debug!(
                "[HOTSPOT_TEXTURE] Dropping stale bitmap for request {}",
                self.generation
            );
        }
    }
}

/// A GPU texture whose contents come from a [`BitmapProvider`].
///
/// The texture is ready once the bitmap for its latest request has been uploaded.
/// [`BitmapTexture::notify_changed`] starts a new request and drops readiness until it
/// completes.
pub struct BitmapTexture {
    provider: Box<dyn BitmapProvider>,
    inbox: Arc<Inbox>,
    texture: Option<TextureHandle>,
    ready: bool,
    has_content: bool,
}

impl fmt::Debug for BitmapTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitmapTexture")
            .field("texture", &self.texture)
            .field("generation", &self.generation())
            .field("ready", &self.ready)
            .finish()
    }
}

impl BitmapTexture {
    /// Create a texture. Nothing touches the GPU until [`BitmapTexture::create`].
    pub fn new(provider: impl BitmapProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            inbox: Default::default(),
            texture: None,
            ready: false,
            has_content: false,
        }
    }

    /// Allocate the GPU texture and request the first bitmap
    pub fn create(&mut self, gpu: &mut dyn Gpu) -> HotspotResult<()> {
        self.texture = Some(gpu.create_texture()?);
        self.request();
        Ok(())
    }

    /// The content source changed: forget the current request and start a new one.
    pub fn notify_changed(&mut self) {
        if self.texture.is_none() {
            return;
        }
        self.inbox.advance();
        self.ready = false;
        self.request();
    }

    /// Upload a freshly delivered bitmap if there is one, then bind the texture to
    /// `program` if it is ready.
    pub fn texture(&mut self, gpu: &mut dyn Gpu, program: ProgramHandle) -> HotspotResult<()> {
        let Some(texture) = self.texture else {
            return Ok(());
        };

        let delivered = self.inbox.delivered().take();
        if let Some((generation, bitmap)) = delivered {
            if generation == self.generation() {
                gpu.upload_texture(texture, &bitmap)?;
                log::debug!(
                    "[HOTSPOT_TEXTURE] Uploaded {}x{} bitmap for request {}",
                    bitmap.width(),
                    bitmap.height(),
                    generation
                );
                self.ready = true;
                self.has_content = true;
            }
        }

        if self.ready {
            gpu.bind_texture(program, texture);
        }
        Ok(())
    }

    /// Has the latest requested bitmap been uploaded?
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Has any bitmap ever been uploaded?
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Has [`BitmapTexture::create`] been called (and not undone by `destroy`)?
    pub fn is_created(&self) -> bool {
        self.texture.is_some()
    }

    /// Number of the current request. Starts at zero and grows with every
    /// [`BitmapTexture::notify_changed`].
    pub fn generation(&self) -> u64 {
        self.inbox.generation.load(Ordering::Acquire)
    }

    /// Release the GPU texture. Loads still in flight become stale.
    pub fn destroy(&mut self, gpu: &mut dyn Gpu) {
        if let Some(texture) = self.texture.take() {
            gpu.delete_texture(texture);
        }
        self.inbox.advance();
        self.ready = false;
    }

    fn request(&self) {
        let callback = BitmapCallback {
            generation: self.generation(),
            inbox: self.inbox.clone(),
        };
        self.provider.provide_bitmap(callback);
    }
}
