use crate::{
    plugins::{Hotspot, Plugin},
    rendering::{Director, Gpu},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PluginState {
    /// Waiting for `init_in_gl` on the next frame
    Pending,
    Initialized,
    /// `init_in_gl` failed. Skipped until the GPU context is recreated.
    Failed,
}

struct PluginEntry {
    plugin: Box<dyn Plugin>,
    state: PluginState,
}

/// The list of plugins a renderer draws, in order.
///
/// Plugins may be added or evicted at any time between frames; GPU work for them is
/// deferred to the next [`PluginManager::before_renderer`], which runs on the render
/// thread.
#[derive(Default)]
pub struct PluginManager {
    plugins: Vec<PluginEntry>,
    evicted: Vec<PluginEntry>,
}

impl PluginManager {
    /// Create an empty `PluginManager`
    pub fn new() -> Self {
        Default::default()
    }

    /// Append a plugin. It is initialised on the next frame.
    pub fn add(&mut self, plugin: impl Plugin + 'static) {
        self.add_boxed(Box::new(plugin));
    }

    /// Append an already boxed plugin
    pub fn add_boxed(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.push(PluginEntry {
            plugin,
            state: PluginState::Pending,
        });
    }

    /// Number of plugins still in the list
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Evict every removable plugin. Their GPU resources are released on the next
    /// frame. Returns how many were evicted.
    ///
    /// Evicted hotspots drop out of [`PluginManager::hotspots`] at once; a
    /// [`super::Picker`] gazing at one forgets it without sending `on_gaze_exit`.
    pub fn remove_all(&mut self) -> usize {
        let (evicted, kept): (Vec<_>, Vec<_>) = self
            .plugins
            .drain(..)
            .partition(|entry| entry.plugin.removable());
        self.plugins = kept;
        let count = evicted.len();
        self.evicted.extend(evicted);
        count
    }

    /// The hit-testable plugins, in draw order
    pub fn hotspots(&self) -> Vec<&dyn Hotspot> {
        self.plugins
            .iter()
            .filter_map(|entry| entry.plugin.as_hotspot())
            .collect()
    }

    /// Start a frame: tear down evicted plugins, initialise new ones, then forward
    /// `before_renderer` to everything that is ready.
    pub fn before_renderer(&mut self, total_width: u32, total_height: u32, gpu: &mut dyn Gpu) {
        for mut entry in self.evicted.drain(..) {
            if entry.state == PluginState::Initialized {
                entry.plugin.destroy_in_gl(gpu);
            }
        }

        for entry in self.plugins.iter_mut() {
            if entry.state == PluginState::Pending {
                entry.state = match entry.plugin.init_in_gl(gpu) {
                    Ok(()) => PluginState::Initialized,
                    Err(e) => {
                        log::error!("[HOTSPOT_PLUGINS] Unable to initialise plugin: {:?}", e);
                        PluginState::Failed
                    }
                };
            }
            if entry.state == PluginState::Initialized {
                entry.plugin.before_renderer(total_width, total_height);
            }
        }
    }

    /// Draw eye `index` with every initialised plugin, in order
    pub fn renderer(
        &mut self,
        index: usize,
        width: u32,
        height: u32,
        director: &mut dyn Director,
        gpu: &mut dyn Gpu,
    ) {
        for entry in self.plugins.iter_mut() {
            if entry.state == PluginState::Initialized {
                entry.plugin.renderer(index, width, height, director, gpu);
            }
        }
    }

    /// The GPU context is going away: release everything. Plugins stay in the list and
    /// are initialised again on the first frame of the next context.
    pub fn destroy_in_gl(&mut self, gpu: &mut dyn Gpu) {
        for mut entry in self.evicted.drain(..) {
            if entry.state == PluginState::Initialized {
                entry.plugin.destroy_in_gl(gpu);
            }
        }
        for entry in self.plugins.iter_mut() {
            if entry.state == PluginState::Initialized {
                entry.plugin.destroy_in_gl(gpu);
            }
            entry.state = PluginState::Pending;
        }
    }
}
