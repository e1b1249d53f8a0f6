//! Hook queues for the plugin system

use futures_util::future::BoxFuture;
use log::{debug, error};

use crate::app::App;
use crate::page::Page;
use crate::utils::error::BoxResult;

/// Callback invoked after a page has been constructed, allowing a
/// plugin to mutate it before it is handed to the caller
pub type ExtendsPageHook =
    Box<dyn for<'a> Fn(&'a mut Page, &'a App) -> BoxFuture<'a, BoxResult<()>> + Send + Sync>;

/// Callback invoked once the app has created all pages
pub type OnInitializedHook =
    Box<dyn for<'a> Fn(&'a mut App) -> BoxFuture<'a, BoxResult<()>> + Send + Sync>;

/// Wrap a closure into an `extendsPage` hook
pub fn extends_page_hook<F>(hook: F) -> ExtendsPageHook
where
    F: for<'a> Fn(&'a mut Page, &'a App) -> BoxFuture<'a, BoxResult<()>> + Send + Sync + 'static,
{
    Box::new(hook)
}

/// Wrap a closure into an `onInitialized` hook
pub fn on_initialized_hook<F>(hook: F) -> OnInitializedHook
where
    F: for<'a> Fn(&'a mut App) -> BoxFuture<'a, BoxResult<()>> + Send + Sync + 'static,
{
    Box::new(hook)
}

/// A registered hook callback with the plugin that owns it
pub struct HookItem<H> {
    pub plugin_name: String,
    pub hook: H,
}

/// An ordered list of callbacks for one named extension point
pub struct HookQueue<H> {
    name: &'static str,
    items: Vec<HookItem<H>>,
}

impl<H> HookQueue<H> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Vec::new(),
        }
    }

    /// The extension point name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append a callback, preserving registration order
    pub fn add(&mut self, plugin_name: impl Into<String>, hook: H) {
        let plugin_name = plugin_name.into();
        debug!("Registering hook '{}' for plugin '{}'", self.name, plugin_name);
        self.items.push(HookItem { plugin_name, hook });
    }

    pub fn items(&self) -> &[HookItem<H>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl HookQueue<ExtendsPageHook> {
    /// Invoke all callbacks in registration order against one page
    pub async fn process(&self, page: &mut Page, app: &App) -> BoxResult<()> {
        debug!(
            "Processing hook '{}' with {} callbacks",
            self.name,
            self.items.len()
        );

        for item in &self.items {
            if let Err(e) = (item.hook)(page, app).await {
                error!(
                    "Error in hook '{}' from plugin '{}': {}",
                    self.name, item.plugin_name, e
                );
                return Err(e);
            }
        }

        Ok(())
    }
}

impl HookQueue<OnInitializedHook> {
    /// Invoke all callbacks in registration order against the app
    pub async fn process(&self, app: &mut App) -> BoxResult<()> {
        debug!(
            "Processing hook '{}' with {} callbacks",
            self.name,
            self.items.len()
        );

        for item in &self.items {
            if let Err(e) = (item.hook)(app).await {
                error!(
                    "Error in hook '{}' from plugin '{}': {}",
                    self.name, item.plugin_name, e
                );
                return Err(e);
            }
        }

        Ok(())
    }
}
