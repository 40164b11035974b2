// this_file: crates/placard-fontdb/src/resolver.rs

//! Candidate-list font resolution with graceful fallback.
//!
//! [`resolve_font`] is the pure rule: walk the candidates in order and
//! take the first one that exists and loads. The caller supplies both the
//! existence probe and the loader, so the rule can be exercised without
//! touching the filesystem. [`FontResolver`] binds it to real files and
//! keeps a one-time byte cache.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use placard_core::{
    error::{FontLoadError, Result},
    FontHandle,
};

use crate::{BuiltinFont, Font, FontPlan, FontSet};

/// Maximum font file size (50MB) to prevent resource exhaustion.
pub const MAX_FONT_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Returns the first candidate that `exists` and that `load` accepts,
/// or the built-in font when none do.
///
/// Never fails. A candidate that exists but cannot be loaded is logged
/// and skipped, so a later candidate still gets its chance.
pub fn resolve_font<P, E, L>(candidates: &[P], size: f32, exists: E, mut load: L) -> FontHandle
where
    P: AsRef<Path>,
    E: Fn(&Path) -> bool,
    L: FnMut(&Path, f32) -> Result<FontHandle>,
{
    for candidate in candidates {
        let path = candidate.as_ref();
        if !exists(path) {
            log::debug!("Font candidate {} does not exist", path.display());
            continue;
        }

        match load(path, size) {
            Ok(font) => {
                log::debug!("Resolved {} at {}px", path.display(), size);
                return font;
            },
            Err(e) => {
                log::warn!("Skipping font candidate {}: {}", path.display(), e);
            },
        }
    }

    log::warn!(
        "None of {} font candidate(s) could be loaded at {}px; using built-in font",
        candidates.len(),
        size
    );
    Arc::new(BuiltinFont::for_size(size))
}

/// Filesystem-backed resolver
///
/// File bytes are cached by canonical path, so a file shared by several
/// roles is read once no matter how many sizes it is loaded at.
pub struct FontResolver {
    cache: Mutex<HashMap<PathBuf, Arc<Vec<u8>>>>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve one candidate list against the real filesystem
    pub fn resolve<P: AsRef<Path>>(&self, candidates: &[P], size: f32) -> FontHandle {
        resolve_font(candidates, size, Path::is_file, |path, size| {
            self.load(path, size)
        })
    }

    /// Resolve every role of a plan into a font set
    pub fn resolve_plan(&self, plan: &FontPlan) -> FontSet {
        let mut set = FontSet::new();
        for (role, spec) in plan.iter() {
            let font = self.resolve(&spec.candidates, spec.size);
            log::info!(
                "Font role '{}': {} ({}px)",
                role,
                font.name(),
                spec.size
            );
            set.insert(role, font);
        }
        set
    }

    /// Number of distinct font files read so far
    pub fn cached_files(&self) -> usize {
        self.cache.lock().len()
    }

    fn load(&self, path: &Path, size: f32) -> Result<FontHandle> {
        let data = self.read_cached(path)?;
        let font = Font::from_data(data, path.display().to_string(), size)?;
        Ok(Arc::new(font))
    }

    fn read_cached(&self, path: &Path) -> Result<Arc<Vec<u8>>> {
        // Try to canonicalize the path for reliable deduplication
        let cache_key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if let Some(data) = self.cache.lock().get(&cache_key) {
            return Ok(data.clone());
        }

        let metadata = fs::metadata(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        if metadata.len() > MAX_FONT_FILE_SIZE {
            log::warn!(
                "{} is {} bytes, over the {} byte limit",
                path.display(),
                metadata.len(),
                MAX_FONT_FILE_SIZE
            );
            return Err(FontLoadError::InvalidData.into());
        }

        let data = Arc::new(
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?,
        );
        self.cache.lock().insert(cache_key, data.clone());
        Ok(data)
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_core::{
        traits::FontRef,
        types::{Point, TextExtent, TextMask},
    };
    use std::cell::RefCell;

    struct NamedFont(String);

    impl FontRef for NamedFont {
        fn name(&self) -> &str {
            &self.0
        }
        fn size(&self) -> f32 {
            12.0
        }
        fn line_height(&self) -> f32 {
            12.0
        }
        fn measure(&self, _text: &str) -> TextExtent {
            TextExtent::new(0.0, 12.0)
        }
        fn rasterize(&self, _text: &str, _origin: Point) -> Option<TextMask> {
            None
        }
    }

    fn named_loader(path: &Path, _size: f32) -> Result<FontHandle> {
        Ok(Arc::new(NamedFont(path.display().to_string())))
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let candidates = ["/a.ttf", "/b.ttf", "/c.ttf"];
        let font = resolve_font(
            &candidates,
            12.0,
            |p| p != Path::new("/a.ttf"),
            named_loader,
        );
        assert_eq!(font.name(), "/b.ttf");
        assert!(!font.is_fallback());
    }

    #[test]
    fn test_no_existing_candidate_yields_builtin() {
        let candidates = ["/missing/one.ttf", "/missing/two.ttf"];
        let font = resolve_font(&candidates, 15.0, |_| false, named_loader);
        assert!(font.is_fallback());
        assert_eq!(font.name(), "builtin");
        assert_eq!(font.size(), 15.0);
    }

    #[test]
    fn test_empty_candidate_list_yields_builtin() {
        let candidates: [&str; 0] = [];
        let font = resolve_font(&candidates, 11.0, |_| true, named_loader);
        assert!(font.is_fallback());
    }

    #[test]
    fn test_unloadable_candidate_is_skipped() {
        let tried = RefCell::new(Vec::new());
        let candidates = ["/broken.ttf", "/good.ttf"];
        let font = resolve_font(&candidates, 12.0, |_| true, |path, size| {
            tried.borrow_mut().push(path.to_path_buf());
            if path == Path::new("/broken.ttf") {
                Err(FontLoadError::InvalidData.into())
            } else {
                named_loader(path, size)
            }
        });
        assert_eq!(font.name(), "/good.ttf");
        assert_eq!(tried.borrow().len(), 2);
    }

    #[test]
    fn test_loader_not_called_for_missing_paths() {
        let calls = RefCell::new(0);
        let candidates = ["/x.ttf"];
        let _ = resolve_font(&candidates, 12.0, |_| false, |path, size| {
            *calls.borrow_mut() += 1;
            named_loader(path, size)
        });
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_resolver_falls_back_on_real_filesystem() {
        let resolver = FontResolver::new();
        let font = resolver.resolve(&["/no/such/dir/Times New Roman.ttf"], 28.0);
        assert!(font.is_fallback());
        assert_eq!(resolver.cached_files(), 0);
    }

    #[test]
    fn test_resolver_skips_non_font_file() {
        let path = std::env::temp_dir().join(format!(
            "placard_not_a_font_{}.ttf",
            std::process::id()
        ));
        fs::write(&path, b"definitely not a font").unwrap();

        let resolver = FontResolver::new();
        let font = resolver.resolve(&[&path], 12.0);
        assert!(font.is_fallback());
        assert_eq!(resolver.cached_files(), 1);

        fs::remove_file(&path).ok();
    }
}
