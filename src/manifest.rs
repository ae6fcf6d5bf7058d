//! A library manager backed by the libraries declared in the configuration.

use crate::config::Configuration;
use crate::pipeline::{ClientLibrary, LibraryManager, LookupOptions};
use crate::types::LibraryKind;
use anyhow::{Result, bail};
use std::collections::HashSet;

/// Resolves categories from a [`Configuration`].
///
/// Dependencies of a category are included ahead of it. Each library is included at most once
/// per lookup, even when several categories depend on it.
#[derive(Clone, Debug)]
pub struct ManifestLibraryManager {
    cfg: Configuration,
}

impl ManifestLibraryManager {
    pub fn new(cfg: Configuration) -> Self {
        Self { cfg }
    }

    fn visit<'a>(
        &'a self,
        category: &'a str,
        kind: LibraryKind,
        state: &mut Visit<'a>,
    ) -> Result<()> {
        let Some(library) = self.cfg.libraries.get(category) else {
            tracing::warn!(category, "unknown client library category");
            return Ok(());
        };
        if state.done.contains(category) {
            return Ok(());
        }
        if state.path.contains(&category) {
            bail!(
                "dependency cycle between client libraries: {} -> {category}",
                state.path.join(" -> ")
            );
        }

        state.path.push(category);
        for dependency in &library.dependencies {
            self.visit(dependency, kind, state)?;
        }
        state.path.pop();

        state.done.insert(category);
        if library.kinds.contains(&kind) {
            state.libraries.push(ClientLibrary::new(&library.path));
        }
        Ok(())
    }
}

#[derive(Default)]
struct Visit<'a> {
    /// Categories currently being resolved, outermost first
    path: Vec<&'a str>,
    done: HashSet<&'a str>,
    libraries: Vec<ClientLibrary>,
}

impl LibraryManager for ManifestLibraryManager {
    fn libraries(
        &self,
        categories: &[String],
        kind: LibraryKind,
        _options: LookupOptions,
    ) -> Result<Vec<ClientLibrary>> {
        let mut state = Visit::default();
        for category in categories {
            self.visit(category, kind, &mut state)?;
        }
        Ok(state.libraries)
    }

    fn is_minify_enabled(&self) -> bool {
        self.cfg.minify
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Library;

    fn library(path: &str, kinds: &[LibraryKind], dependencies: &[&str]) -> Library {
        Library {
            path: path.into(),
            kinds: kinds.to_vec(),
            dependencies: dependencies.iter().map(ToString::to_string).collect(),
        }
    }

    fn manager() -> ManifestLibraryManager {
        use LibraryKind::*;
        ManifestLibraryManager::new(Configuration {
            minify: true,
            libraries: [
                ("base", library("/libs/base", &[Css, Js], &[])),
                ("jquery", library("/libs/jquery", &[Js], &[])),
                ("site.theme", library("/apps/theme", &[Css], &["base"])),
                ("site.app", library("/apps/app", &[Css, Js], &["jquery", "base"])),
                ("loop.a", library("/apps/a", &[Js], &["loop.b"])),
                ("loop.b", library("/apps/b", &[Js], &["loop.a"])),
            ]
            .into_iter()
            .map(|(name, lib)| (name.to_string(), lib))
            .collect(),
        })
    }

    fn paths(categories: &[&str], kind: LibraryKind) -> Vec<String> {
        let categories: Vec<String> = categories.iter().map(ToString::to_string).collect();
        manager()
            .libraries(&categories, kind, LookupOptions::default())
            .expect("lookup should succeed")
            .iter()
            .map(|lib| lib.path().to_string())
            .collect()
    }

    #[test]
    fn dependencies_come_first() {
        assert_eq!(
            paths(&["site.app"], LibraryKind::Js),
            ["/libs/jquery", "/libs/base", "/apps/app"]
        );
        assert_eq!(
            paths(&["site.app"], LibraryKind::Css),
            ["/libs/base", "/apps/app"]
        );
    }

    #[test]
    fn libraries_are_included_once() {
        assert_eq!(
            paths(&["site.theme", "site.app", "base"], LibraryKind::Css),
            ["/libs/base", "/apps/theme", "/apps/app"]
        );
    }

    #[test]
    fn kinds_are_filtered() {
        assert!(paths(&["jquery"], LibraryKind::Css).is_empty());
        assert_eq!(paths(&["site.theme"], LibraryKind::Js), ["/libs/base"]);
    }

    #[test]
    fn unknown_categories_are_skipped() {
        assert_eq!(
            paths(&["missing", "jquery", ""], LibraryKind::Js),
            ["/libs/jquery"]
        );
    }

    #[test]
    fn cycles_fail() {
        let categories = vec!["loop.a".to_string()];
        let err = manager()
            .libraries(&categories, LibraryKind::Js, LookupOptions::default())
            .expect_err("cycle must be detected");
        assert_eq!(
            err.to_string(),
            "dependency cycle between client libraries: loop.a -> loop.b -> loop.a"
        );
    }

    #[test]
    fn minify_from_config() {
        assert!(manager().is_minify_enabled());
        assert!(!ManifestLibraryManager::new(Configuration::default()).is_minify_enabled());
    }
}
