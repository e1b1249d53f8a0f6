use std::path::{Path, PathBuf};

use crate::utils::path::normalize_path;
use super::options::AppOptions;

/// Resolves relative artifact paths against the application
/// directory roots
#[derive(Debug, Clone)]
pub struct AppDir {
    source: PathBuf,
    dest: PathBuf,
    temp: PathBuf,
    cache: PathBuf,
}

impl AppDir {
    /// Derive the directory roots from app options
    pub fn from_options(options: &AppOptions) -> Self {
        let source = normalize_path(&options.source);
        let dest = options
            .dest
            .clone()
            .unwrap_or_else(|| source.join(".rustpress").join("dist"));
        let temp = options
            .temp
            .clone()
            .unwrap_or_else(|| source.join(".rustpress").join(".temp"));
        let cache = options
            .cache
            .clone()
            .unwrap_or_else(|| source.join(".rustpress").join(".cache"));

        AppDir {
            source,
            dest: normalize_path(dest),
            temp: normalize_path(temp),
            cache: normalize_path(cache),
        }
    }

    /// Resolve a path relative to the source directory
    pub fn source<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        normalize_path(self.source.join(rel))
    }

    /// Resolve a path relative to the output directory
    pub fn dest<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        normalize_path(self.dest.join(rel))
    }

    /// Resolve a path relative to the temp directory
    pub fn temp<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        normalize_path(self.temp.join(rel))
    }

    /// Resolve a path relative to the cache directory
    pub fn cache<P: AsRef<Path>>(&self, rel: P) -> PathBuf {
        normalize_path(self.cache.join(rel))
    }

    pub fn source_root(&self) -> &Path {
        &self.source
    }

    pub fn dest_root(&self) -> &Path {
        &self.dest
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp
    }

    pub fn cache_root(&self) -> &Path {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roots() {
        let options = AppOptions::new("/site/docs");
        let dir = AppDir::from_options(&options);

        assert_eq!(dir.dest("index.html"), PathBuf::from("/site/docs/.rustpress/dist/index.html"));
        assert_eq!(
            dir.temp("pages/index.html.vue"),
            PathBuf::from("/site/docs/.rustpress/.temp/pages/index.html.vue")
        );
        assert_eq!(dir.cache_root(), Path::new("/site/docs/.rustpress/.cache"));
    }

    #[test]
    fn test_overridden_roots() {
        let mut options = AppOptions::new("/site/docs");
        options.dest = Some(PathBuf::from("/out"));
        let dir = AppDir::from_options(&options);

        assert_eq!(dir.dest("a/b.html"), PathBuf::from("/out/a/b.html"));
        assert_eq!(dir.source("guide/intro.md"), PathBuf::from("/site/docs/guide/intro.md"));
    }
}
