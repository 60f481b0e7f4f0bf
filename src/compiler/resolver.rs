//! Request-to-source resolution.
//!
//! # Responsibilities
//! - Map `/css/*.css` request paths onto the stylesheet source tree
//! - Decide output style (`.min.css` suffix, forced minification)
//! - Hide partial files unless exposure is enabled
//! - Reject traversal outside the source root
//!
//! # Design Decisions
//! - Pure string/path logic, no filesystem access
//! - `None` means "not ours": the request falls through to the inner service
//! - No regex; suffix/prefix checks keep matching O(n)

use std::path::PathBuf;

use crate::config::Syntax;

/// Output formatting for compiled CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Human-readable formatting.
    Expanded,

    /// Minified formatting.
    Compressed,
}

impl OutputStyle {
    pub(crate) fn to_grass(self) -> grass::OutputStyle {
        match self {
            OutputStyle::Expanded => grass::OutputStyle::Expanded,
            OutputStyle::Compressed => grass::OutputStyle::Compressed,
        }
    }

    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputStyle::Expanded => "expanded",
            OutputStyle::Compressed => "compressed",
        }
    }
}

/// Outcome of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Source file to compile.
    pub source_path: PathBuf,

    /// Output formatting for the response.
    pub style: OutputStyle,
}

/// Maps request paths onto the stylesheet source tree.
#[derive(Debug, Clone)]
pub struct Resolver {
    source_root: PathBuf,
    mode: Syntax,
    force_minified: bool,
    expose_partials: bool,
}

impl Resolver {
    /// Create a resolver over the given source root.
    pub fn new(
        source_root: PathBuf,
        mode: Syntax,
        force_minified: bool,
        expose_partials: bool,
    ) -> Self {
        Self {
            source_root,
            mode,
            force_minified,
            expose_partials,
        }
    }

    /// Resolve a request path, or `None` when the request is not ours.
    ///
    /// A `name.min.css` request resolves to the same source file as its
    /// `name.css` sibling, with compressed output.
    pub fn resolve(&self, request_path: &str) -> Option<Resolution> {
        let relative = request_path.strip_prefix("/css/")?;
        if !relative.ends_with(".css") {
            return None;
        }
        if relative.split('/').any(|segment| segment == "..") {
            return None;
        }

        // rsplit always yields at least one item
        let filename = relative.rsplit('/').next()?;
        if !self.expose_partials && filename.starts_with('_') {
            return None;
        }

        let minified = relative.ends_with(".min.css");
        let style = if self.force_minified || minified {
            OutputStyle::Compressed
        } else {
            OutputStyle::Expanded
        };

        let stem = if minified {
            relative.strip_suffix(".min.css")?
        } else {
            relative.strip_suffix(".css")?
        };
        if stem.is_empty() || stem.ends_with('/') {
            return None;
        }

        let source_path = self
            .source_root
            .join(format!("{}{}", stem, self.mode.extension()));
        Some(Resolution { source_path, style })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(mode: Syntax) -> Resolver {
        Resolver::new(PathBuf::from("styles"), mode, false, false)
    }

    #[test]
    fn test_resolves_scss_source() {
        let resolution = resolver(Syntax::Scss).resolve("/css/site.css").unwrap();
        assert_eq!(resolution.source_path, PathBuf::from("styles/site.scss"));
        assert_eq!(resolution.style, OutputStyle::Expanded);
    }

    #[test]
    fn test_resolves_sass_source() {
        let resolution = resolver(Syntax::Sass).resolve("/css/site.css").unwrap();
        assert_eq!(resolution.source_path, PathBuf::from("styles/site.sass"));
    }

    #[test]
    fn test_nested_paths_keep_directories() {
        let resolution = resolver(Syntax::Scss)
            .resolve("/css/pages/admin/login.css")
            .unwrap();
        assert_eq!(
            resolution.source_path,
            PathBuf::from("styles/pages/admin/login.scss")
        );
    }

    #[test]
    fn test_min_suffix_compresses_and_resolves_same_source() {
        let resolver = resolver(Syntax::Scss);
        let plain = resolver.resolve("/css/site.css").unwrap();
        let min = resolver.resolve("/css/site.min.css").unwrap();
        assert_eq!(plain.source_path, min.source_path);
        assert_eq!(min.style, OutputStyle::Compressed);
        assert_eq!(plain.style, OutputStyle::Expanded);
    }

    #[test]
    fn test_force_minified_compresses_plain_requests() {
        let resolver = Resolver::new(PathBuf::from("styles"), Syntax::Scss, true, false);
        let resolution = resolver.resolve("/css/site.css").unwrap();
        assert_eq!(resolution.style, OutputStyle::Compressed);
    }

    #[test]
    fn test_partials_hidden_by_default() {
        let resolver = resolver(Syntax::Scss);
        assert!(resolver.resolve("/css/_mixins.css").is_none());
        assert!(resolver.resolve("/css/lib/_mixins.css").is_none());
        assert!(resolver.resolve("/css/_mixins.min.css").is_none());
    }

    #[test]
    fn test_partials_served_when_exposed() {
        let resolver = Resolver::new(PathBuf::from("styles"), Syntax::Scss, false, true);
        let resolution = resolver.resolve("/css/_mixins.css").unwrap();
        assert_eq!(resolution.source_path, PathBuf::from("styles/_mixins.scss"));
    }

    #[test]
    fn test_foreign_paths_are_not_ours() {
        let resolver = resolver(Syntax::Scss);
        assert!(resolver.resolve("/js/app.js").is_none());
        assert!(resolver.resolve("/css/site.css.map").is_none());
        assert!(resolver.resolve("/cssx/site.css").is_none());
        assert!(resolver.resolve("/css/").is_none());
        assert!(resolver.resolve("/css/.css").is_none());
    }

    #[test]
    fn test_traversal_is_rejected() {
        let resolver = resolver(Syntax::Scss);
        assert!(resolver.resolve("/css/../secrets.css").is_none());
        assert!(resolver.resolve("/css/a/../../b.css").is_none());
    }

    #[test]
    fn test_dotted_directory_names_survive_extension_swap() {
        // Only the trailing extension is swapped, not every ".css" occurrence.
        let resolution = resolver(Syntax::Scss)
            .resolve("/css/v2.css.themes/dark.css")
            .unwrap();
        assert_eq!(
            resolution.source_path,
            PathBuf::from("styles/v2.css.themes/dark.scss")
        );
    }
}
