//! Application context for page creation

pub mod dir;
pub mod options;

pub use dir::AppDir;
pub use options::{AppOptions, LocaleOptions, DEFAULT_LANG};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::page::{create_page, render_page_component, render_page_data, Page, PageOptions};
use crate::plugins::{HookQueue, Plugin, PluginApi};
use crate::utils::error::{BoxResult, PressError};
use crate::utils::path::get_extension;

/// The application context: options, directory resolution, the hook
/// registry and the created pages
pub struct App {
    pub options: AppOptions,
    pub dir: AppDir,
    pub plugin_api: PluginApi,
    pub pages: Vec<Page>,
}

impl App {
    /// Create an application context from options
    pub fn new(options: AppOptions) -> BoxResult<Self> {
        options.validate()?;
        let dir = AppDir::from_options(&options);

        Ok(App {
            options,
            dir,
            plugin_api: PluginApi::new(),
            pages: Vec::new(),
        })
    }

    /// Register a plugin's hooks
    pub fn use_plugin(&mut self, plugin: Plugin) -> BoxResult<()> {
        self.plugin_api.register(plugin)
    }

    /// Scan the source directory and create a page per markdown file
    ///
    /// Fails when two source files resolve to the same route path.
    pub async fn init(&mut self) -> BoxResult<()> {
        info!("Initializing app from {}", self.dir.source_root().display());

        let files = collect_page_files(self.dir.source_root())?;
        debug!("Found {} page source files", files.len());

        let mut pages = Vec::with_capacity(files.len());
        let mut seen_paths: HashSet<String> = HashSet::new();

        for file in files {
            // Walked paths include the source prefix; the factory
            // resolves source-relative paths itself
            let file = file
                .strip_prefix(self.dir.source_root())
                .map(Path::to_path_buf)
                .unwrap_or(file);

            let page = create_page(
                self,
                PageOptions {
                    file_path: Some(file),
                    ..PageOptions::default()
                },
            )
            .await?;

            if !seen_paths.insert(page.path.clone()) {
                return Err(PressError::Page(format!(
                    "duplicate page path '{}' from {}",
                    page.path,
                    page.file_path
                        .as_deref()
                        .unwrap_or_else(|| Path::new("?"))
                        .display()
                ))
                .into());
            }

            pages.push(page);
        }

        self.pages = pages;

        // The queue is taken out for the call so hooks can mutate the app
        let queue = std::mem::replace(
            &mut self.plugin_api.hooks.on_initialized,
            HookQueue::new("onInitialized"),
        );
        let result = queue.process(self).await;
        self.plugin_api.hooks.on_initialized = queue;
        result?;

        info!("Created {} pages", self.pages.len());
        Ok(())
    }

    /// Write the generated component and data files for all pages
    pub async fn prepare(&self) -> BoxResult<()> {
        for page in &self.pages {
            write_generated_file(&page.component_file_path, render_page_component(page))?;
            write_generated_file(&page.data_file_path, render_page_data(page)?)?;
        }

        debug!("Prepared {} pages into {}", self.pages.len(), self.dir.temp_root().display());
        Ok(())
    }
}

/// Collect markdown source files under the source directory
fn collect_page_files(source: &Path) -> BoxResult<Vec<PathBuf>> {
    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_path(e.path()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && matches!(get_extension(path).as_deref(), Some("md" | "markdown")) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Skip dotfiles, underscore-prefixed entries and the .rustpress dir
fn is_excluded_path(path: &Path) -> bool {
    if let Some(file_name) = path.file_name() {
        let name = file_name.to_string_lossy();
        if name.starts_with('.') && name != "." && name != ".." {
            return true;
        }
        if name.starts_with('_') {
            return true;
        }
    }

    false
}

fn write_generated_file(path: &Path, content: String) -> BoxResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
