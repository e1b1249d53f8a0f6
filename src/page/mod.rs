//! Page construction
//!
//! The factory takes a page definition (a route path, a source file,
//! or raw content), builds the page record with its metadata and
//! derived artifact paths, and runs the `extendsPage` hook before
//! handing the page to the caller.

mod create;
mod model;
mod options;
mod paths;
mod render;

pub use create::create_page;
pub use model::{Page, PageData};
pub use options::PageOptions;
pub use paths::{html_file_path_relative, infer_route_path, normalize_route_path};
pub use render::{render_page_component, render_page_data};
