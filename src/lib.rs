//! Rustpress core: the page engine of a VuePress-compatible site
//! generator.
//!
//! The crate builds in-memory [`Page`] records from source files or
//! synthetic definitions, derives their generated artifact paths, and
//! runs registered plugin hooks so the pages can be extended before
//! rendering.
//!
//! ```no_run
//! use rustpress::{create_page, App, AppOptions, PageOptions};
//!
//! # async fn example() -> rustpress::BoxResult<()> {
//! let app = App::new(AppOptions::new("docs"))?;
//! let page = create_page(
//!     &app,
//!     PageOptions {
//!         path: Some("/".to_string()),
//!         ..PageOptions::default()
//!     },
//! )
//! .await?;
//! assert_eq!(page.html_file_path, app.dir.dest("index.html"));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod front_matter;
pub mod markdown;
pub mod page;
pub mod plugins;
pub mod utils;

pub use app::{App, AppDir, AppOptions, LocaleOptions};
pub use front_matter::Frontmatter;
pub use markdown::{PageHeader, PageLink};
pub use page::{create_page, Page, PageData, PageOptions};
pub use plugins::{Plugin, PluginApi};
pub use utils::error::{BoxResult, PressError};
