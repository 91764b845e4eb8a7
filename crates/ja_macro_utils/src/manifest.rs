use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to find how generated code can name a
/// `ja_*` crate.
///
/// # Example
///
/// ```rust
/// # use ja_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("ja_resource"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is a dependency: `::name`. A dependency renamed with
///    `package = "name"` resolves to `::renamed`.
/// 2. `name` starts with `ja_` and the caller depends on the facade
///    `ja_core`: `::ja_core::short` (e.g. `ja_resource` -> `::ja_core::resource`).
/// 3. Same as 2 for a dependency aliased as `ja`: `::ja::short`.
/// 4. Steps 1-3 again over `dev-dependencies`.
/// 5. Otherwise `::name`.
///
/// A crate that runs its own derive in its tests should declare
/// `extern crate self as name;` so that the fallback path resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "ja_core";
const SHORT_FACADE_NAME: &str = "ja";
const CRATE_PREFIX: &str = "ja_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .unwrap_or_else(|| panic!("CARGO_MANIFEST_DIR should be auto-defined by cargo."));
        let mut path = PathBuf::from(dir);
        path.push("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    // Key under which `name` is declared, following `package = "..."` renames.
    fn dependency_key<'t>(deps: &'t Table, name: &'t str) -> Option<&'t str> {
        if deps.contains_key(name) {
            return Some(name);
        }
        deps.iter().find_map(|(key, item)| {
            let package = item.get("package")?.as_str()?;
            (package == name).then_some(key)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::parse_path(&format!("::{}", key.replace('-', "_"))));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        [FACADE_NAME, SHORT_FACADE_NAME]
            .into_iter()
            .find_map(|facade| Self::dependency_key(deps, facade))
            .map(|facade| Self::parse_path(&format!("::{}::{module}", facade.replace('-', "_"))))
    }

    /// Returns a [`syn::Path`] naming the crate `name` from the caller's
    /// point of view. See the type docs for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Runs `func` against the caller's manifest.
    ///
    /// Parsed manifests are cached per path and re-read when the file's
    /// modification time changes.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .unwrap_or_else(|err| panic!("Unable to stat {}: {err}", manifest_path.display()));

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn resolve(text: &str, name: &str) -> String {
        manifest(text)
            .get_crate_path(name)
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\nja_resource = { path = \"../ja_resource\" }\n";
        assert_eq!(resolve(text, "ja_resource"), "::ja_resource");
    }

    #[test]
    fn renamed_dependency() {
        let text = "[dependencies]\nres = { package = \"ja_resource\", path = \"x\" }\n";
        assert_eq!(resolve(text, "ja_resource"), "::res");
    }

    #[test]
    fn through_facade() {
        let text = "[dependencies]\nja_core = \"0.0.1\"\n";
        assert_eq!(resolve(text, "ja_resource"), "::ja_core::resource");

        let text = "[dev-dependencies]\nja = { package = \"ja_core\", version = \"0.0.1\" }\n";
        assert_eq!(resolve(text, "ja_query"), "::ja::query");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "ja_resource"), "::ja_resource");
    }
}
