use std::{
    fs,
    path::{Path, PathBuf},
    sync::{mpsc, Mutex},
};

use crate::{
    plugins::ImageLoadProvider,
    rendering::{Bitmap, BitmapCallback},
    HotspotError, HotspotResult,
};

#[derive(Debug)]
struct LoadRequest {
    path: PathBuf,
    callback: BitmapCallback,
}

/// An [`ImageLoadProvider`] that decodes image files on a background thread.
///
/// Image references are paths, optionally prefixed with `file://`. Relative paths are
/// resolved against the loader's root directory. Files that can't be read or decoded
/// are logged and their callback is dropped, so the texture simply never becomes ready.
///
/// The worker thread exits once the loader is dropped.
#[derive(Debug)]
pub struct FileImageLoader {
    root: PathBuf,
    sender: Mutex<mpsc::Sender<LoadRequest>>,
}

impl FileImageLoader {
    /// Start a loader that resolves relative paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> HotspotResult<Self> {
        let (sender, receiver) = mpsc::channel::<LoadRequest>();

        std::thread::Builder::new()
            .name("hotspot-image-loader".into())
            .spawn(move || {
                log::debug!("[HOTSPOT_WORKER] Image loader starting..");
                while let Ok(request) = receiver.recv() {
                    load(request);
                }
                log::debug!("[HOTSPOT_WORKER] Image loader finished");
            })?;

        Ok(Self {
            root: root.into(),
            sender: Mutex::new(sender),
        })
    }

    /// The directory relative references are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, image_ref: &str) -> PathBuf {
        let path = Path::new(image_ref.strip_prefix("file://").unwrap_or(image_ref));
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ImageLoadProvider for FileImageLoader {
    fn on_provide_bitmap(&self, image_ref: &str, callback: BitmapCallback) {
        let request = LoadRequest {
            path: self.resolve(image_ref),
            callback,
        };
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = sender.send(request) {
            log::error!("[HOTSPOT_WORKER] Image loader is gone, dropping {:?}", e.0.path);
        }
    }
}

fn load(request: LoadRequest) {
    let LoadRequest { path, callback } = request;

    // The hotspot moved on to another image while this one was queued.
    if callback.is_stale() {
        log::debug!("[HOTSPOT_WORKER] Skipping stale request for {:?}", path);
        return;
    }

    match fs::read(&path)
        .map_err(HotspotError::from)
        .and_then(|bytes| Bitmap::decode(&bytes))
    {
        Ok(bitmap) => {
            log::debug!(
                "[HOTSPOT_WORKER] Loaded {:?} ({}x{})",
                path,
                bitmap.width(),
                bitmap.height()
            );
            callback.on_bitmap_loaded(bitmap);
        }
        Err(e) => log::warn!("[HOTSPOT_WORKER] Unable to load {:?}: {:?}", path, e),
    }
}
