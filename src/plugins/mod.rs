//! Plugin system for Rustpress
//!
//! Plugins are value objects carrying callbacks for the extension
//! points they care about. Registering a plugin moves its callbacks
//! into the per-hook queues, which are processed in registration
//! order.

pub mod hooks;

use log::info;

pub use hooks::{
    extends_page_hook, on_initialized_hook, ExtendsPageHook, HookItem, HookQueue,
    OnInitializedHook,
};

use crate::utils::error::{BoxResult, PressError};

/// A plugin and the hook callbacks it contributes
#[derive(Default)]
pub struct Plugin {
    pub name: String,
    pub extends_page: Option<ExtendsPageHook>,
    pub on_initialized: Option<OnInitializedHook>,
}

impl Plugin {
    /// Create a plugin with no hooks
    pub fn new(name: impl Into<String>) -> Self {
        Plugin {
            name: name.into(),
            extends_page: None,
            on_initialized: None,
        }
    }

    /// Attach an `extendsPage` callback
    pub fn with_extends_page(mut self, hook: ExtendsPageHook) -> Self {
        self.extends_page = Some(hook);
        self
    }

    /// Attach an `onInitialized` callback
    pub fn with_on_initialized(mut self, hook: OnInitializedHook) -> Self {
        self.on_initialized = Some(hook);
        self
    }
}

/// The named hook queues plugins register against
pub struct Hooks {
    pub extends_page: HookQueue<ExtendsPageHook>,
    pub on_initialized: HookQueue<OnInitializedHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Hooks {
            extends_page: HookQueue::new("extendsPage"),
            on_initialized: HookQueue::new("onInitialized"),
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Hooks::new()
    }
}

/// Hook registry exposed to plugins and to the page factory
pub struct PluginApi {
    pub hooks: Hooks,
    /// Plugin names in registration order
    registered: Vec<String>,
}

impl PluginApi {
    pub fn new() -> Self {
        PluginApi {
            hooks: Hooks::new(),
            registered: Vec::new(),
        }
    }

    /// Register a plugin, moving its callbacks into the hook queues
    pub fn register(&mut self, plugin: Plugin) -> BoxResult<()> {
        if self.registered.iter().any(|n| n == &plugin.name) {
            return Err(
                PressError::Plugin(format!("Plugin '{}' is already registered", plugin.name))
                    .into(),
            );
        }

        info!("Registering plugin: {}", plugin.name);

        if let Some(hook) = plugin.extends_page {
            self.hooks.extends_page.add(plugin.name.clone(), hook);
        }
        if let Some(hook) = plugin.on_initialized {
            self.hooks.on_initialized.add(plugin.name.clone(), hook);
        }

        self.registered.push(plugin.name);
        Ok(())
    }

    /// Names of all registered plugins in registration order
    pub fn plugin_names(&self) -> &[String] {
        &self.registered
    }
}

impl Default for PluginApi {
    fn default() -> Self {
        PluginApi::new()
    }
}
