//! uv.lock parser with dependency graph walking
//!
//! Only packages reachable from the root project's main dependencies are
//! emitted. The dev-dependency groups are never deserialized, so nothing
//! that is only reachable through them can leak into the output. Extras are
//! walked separately and emitted only for the packages main does not already
//! cover, each conditioned on `extra == "<name>"`.

use crate::{Dependency, Error, LockfileParser, ParseOptions, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Deserialize)]
struct UvLock {
    #[serde(default)]
    package: Vec<UvPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct UvPackage {
    name: String,
    version: Option<String>,
    source: Option<UvSource>,
    resolution_marker: Option<String>,
    #[serde(default)]
    dependencies: Vec<UvDependencyRef>,
    #[serde(default)]
    optional_dependencies: BTreeMap<String, Vec<UvDependencyRef>>,
}

/// Where a package comes from. Only registry packages become output rows;
/// git, path, directory, editable and virtual sources are graph nodes only.
#[derive(Debug, Default, Deserialize)]
struct UvSource {
    registry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UvDependencyRef {
    name: String,
}

impl UvPackage {
    fn is_registry(&self) -> bool {
        self.source
            .as_ref()
            .and_then(|s| s.registry.as_deref())
            .is_some_and(|r| !r.is_empty())
    }
}

/// Name -> entries, in catalog order. A name has several entries when the
/// resolution forked by environment.
type PackageIndex<'a> = HashMap<&'a str, Vec<&'a UvPackage>>;

fn build_index(packages: &[UvPackage]) -> PackageIndex<'_> {
    let mut index: PackageIndex<'_> = HashMap::new();
    for pkg in packages {
        index.entry(pkg.name.as_str()).or_default().push(pkg);
    }
    index
}

fn find_root<'a>(packages: &'a [UvPackage], project_name: &str) -> Result<&'a UvPackage> {
    packages
        .iter()
        .find(|pkg| pkg.name == project_name)
        .ok_or_else(|| Error::RootNotFound {
            project: project_name.to_string(),
        })
}

/// Collect every name transitively reachable from `seeds`.
///
/// Iterative with an explicit stack; each name is expanded once so cycles
/// and long chains are safe.
fn walk_deps<'a, I>(seeds: I, index: &PackageIndex<'a>) -> BTreeSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut visited = BTreeSet::new();
    let mut stack: Vec<&'a str> = seeds.into_iter().collect();

    while let Some(name) = stack.pop() {
        if !visited.insert(name) {
            continue;
        }

        for &entry in index.get(name).into_iter().flatten() {
            for dep in &entry.dependencies {
                if !visited.contains(dep.name.as_str()) {
                    stack.push(dep.name.as_str());
                }
            }
        }
    }

    visited
}

fn extra_marker(extra: Option<&str>, resolution_marker: Option<&str>) -> Option<String> {
    match (extra, resolution_marker) {
        (Some(extra), Some(marker)) => Some(format!("extra == \"{extra}\" and {marker}")),
        (Some(extra), None) => Some(format!("extra == \"{extra}\"")),
        (None, marker) => marker.map(String::from),
    }
}

/// Build records for `names` (already sorted), keeping every registry entry
/// of a name in catalog order.
fn collect_deps<'a>(
    names: impl IntoIterator<Item = &'a str>,
    index: &PackageIndex<'a>,
    extra: Option<&str>,
) -> Vec<Dependency> {
    let mut deps = Vec::new();

    for name in names {
        for &entry in index.get(name).into_iter().flatten() {
            if !entry.is_registry() {
                continue;
            }

            let Some(version) = entry.version.as_deref() else {
                tracing::warn!(package = %entry.name, "registry package has no version in uv.lock, skipping");
                continue;
            };

            deps.push(Dependency {
                name: entry.name.clone(),
                version: version.to_string(),
                markers: extra_marker(extra, entry.resolution_marker.as_deref()),
            });
        }
    }

    deps
}

/// uv.lock parser
pub struct UvLockParser;

impl UvLockParser {
    /// Create a new uv.lock parser
    pub fn new() -> Self {
        Self
    }
}

impl LockfileParser for UvLockParser {
    fn parse(&self, content: &str, options: &ParseOptions) -> Result<Vec<Dependency>> {
        let lock: UvLock = toml::from_str(content)?;
        let index = build_index(&lock.package);
        let root = find_root(&lock.package, &options.project_name)?;

        let reachable_main = walk_deps(root.dependencies.iter().map(|d| d.name.as_str()), &index);
        tracing::debug!(
            root = %root.name,
            reachable = reachable_main.len(),
            "walked main dependencies"
        );

        let mut deps = collect_deps(reachable_main.iter().copied(), &index, None);

        for extra in &options.include_extras {
            let Some(refs) = root.optional_dependencies.get(extra) else {
                tracing::debug!(extra = %extra, root = %root.name, "requested extra is not declared");
                continue;
            };

            let reachable_extra = walk_deps(refs.iter().map(|d| d.name.as_str()), &index);
            // Packages main already covers are emitted once, unconditioned
            let extra_only = reachable_extra.difference(&reachable_main).copied();
            deps.extend(collect_deps(extra_only, &index, Some(extra.as_str())));
        }

        Ok(deps)
    }
}

impl Default for UvLockParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str, extras: &[&str]) -> Result<Vec<Dependency>> {
        UvLockParser::new().parse(
            content,
            &ParseOptions::new("myapp").with_extras(extras.iter().copied()),
        )
    }

    #[test]
    fn test_simple() {
        let deps = parse(
            r#"
version = 1

[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [
    { name = "requests" },
    { name = "urllib3" },
]

[[package]]
name = "requests"
version = "2.31.0"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "urllib3"
version = "2.1.0"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("requests", "2.31.0"),
                Dependency::new("urllib3", "2.1.0"),
            ]
        );
    }

    #[test]
    fn test_resolution_marker() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "cffi" }]

[[package]]
name = "cffi"
version = "1.16.0"
source = { registry = "https://pypi.org/simple" }
resolution-marker = "platform_system != 'Windows'"
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![Dependency::new("cffi", "1.16.0").with_markers("platform_system != 'Windows'")]
        );
    }

    #[test]
    fn test_forked_versions_all_emitted() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "numpy" }]

[[package]]
name = "numpy"
version = "1.26.4"
source = { registry = "https://pypi.org/simple" }
resolution-marker = "python_version < '3.12'"

[[package]]
name = "numpy"
version = "2.1.0"
source = { registry = "https://pypi.org/simple" }
resolution-marker = "python_version >= '3.12'"
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("numpy", "1.26.4").with_markers("python_version < '3.12'"),
                Dependency::new("numpy", "2.1.0").with_markers("python_version >= '3.12'"),
            ]
        );
    }

    #[test]
    fn test_missing_root_is_error() {
        let err = parse(
            r#"
[[package]]
name = "requests"
version = "2.31.0"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, Error::RootNotFound { ref project } if project == "myapp"));
        assert_eq!(err.to_string(), "Root package 'myapp' not found in uv.lock");
    }

    #[test]
    fn test_non_registry_sources_traversed_not_emitted() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "my-lib" }, { name = "requests" }]

[[package]]
name = "my-lib"
version = "0.1.0"
source = { git = "https://github.com/org/my-lib.git" }
dependencies = [{ name = "attrs" }]

[[package]]
name = "attrs"
version = "23.2.0"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "requests"
version = "2.31.0"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("attrs", "23.2.0"),
                Dependency::new("requests", "2.31.0"),
            ]
        );
    }

    #[test]
    fn test_transitive_deps_sorted() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "flask" }]

[[package]]
name = "flask"
version = "3.0.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "werkzeug" }, { name = "jinja2" }]

[[package]]
name = "werkzeug"
version = "3.0.1"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "jinja2"
version = "3.1.3"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "markupsafe" }]

[[package]]
name = "markupsafe"
version = "2.1.4"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["flask", "jinja2", "markupsafe", "werkzeug"]);
        assert!(deps.iter().all(|d| d.markers.is_none()));
    }

    #[test]
    fn test_dev_dependencies_never_walked() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "flask" }]

[package.dev-dependencies]
dev = [{ name = "pytest" }]

[[package]]
name = "flask"
version = "3.0.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "packaging" }]

[[package]]
name = "pytest"
version = "8.0.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "packaging" }, { name = "pluggy" }]

[[package]]
name = "packaging"
version = "24.0"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "pluggy"
version = "1.4.0"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("flask", "3.0.0"),
                Dependency::new("packaging", "24.0"),
            ]
        );
    }

    const EXTRAS_LOCK: &str = r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "flask" }]

[package.optional-dependencies]
postgres = [{ name = "psycopg2" }]
redis = [{ name = "redis" }]

[[package]]
name = "flask"
version = "3.0.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "click" }]

[[package]]
name = "psycopg2"
version = "2.9.9"
source = { registry = "https://pypi.org/simple" }
resolution-marker = "sys_platform != 'win32'"
dependencies = [{ name = "click" }, { name = "libpq" }]

[[package]]
name = "libpq"
version = "1.0.0"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "click"
version = "8.1.7"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "redis"
version = "5.0.1"
source = { registry = "https://pypi.org/simple" }
"#;

    #[test]
    fn test_extras_excluded_by_default() {
        let deps = parse(EXTRAS_LOCK, &[]).unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("click", "8.1.7"),
                Dependency::new("flask", "3.0.0"),
            ]
        );
    }

    #[test]
    fn test_extra_markers_synthesized() {
        let deps = parse(EXTRAS_LOCK, &["postgres"]).unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("click", "8.1.7"),
                Dependency::new("flask", "3.0.0"),
                Dependency::new("libpq", "1.0.0").with_markers("extra == \"postgres\""),
                Dependency::new("psycopg2", "2.9.9")
                    .with_markers("extra == \"postgres\" and sys_platform != 'win32'"),
            ]
        );
    }

    #[test]
    fn test_shared_dep_emitted_once_under_main() {
        let deps = parse(EXTRAS_LOCK, &["postgres"]).unwrap();
        let clicks: Vec<_> = deps.iter().filter(|d| d.name == "click").collect();
        assert_eq!(clicks, vec![&Dependency::new("click", "8.1.7")]);
    }

    #[test]
    fn test_extras_emitted_in_caller_order() {
        let deps = parse(EXTRAS_LOCK, &["redis", "postgres"]).unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["click", "flask", "redis", "libpq", "psycopg2"]);
        assert_eq!(deps[2].markers.as_deref(), Some("extra == \"redis\""));
    }

    #[test]
    fn test_undeclared_extra_is_ignored() {
        let deps = parse(EXTRAS_LOCK, &["nope"]).unwrap();
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_project_name_selects_root() {
        let deps = parse(
            r#"
[[package]]
name = "lib-a"
version = "0.1.0"
source = { editable = "packages/lib-a" }
dependencies = [{ name = "six" }]

[[package]]
name = "myapp"
version = "1.0.0"
source = { editable = "." }
dependencies = [{ name = "flask" }]

[[package]]
name = "flask"
version = "3.0.0"
source = { registry = "https://pypi.org/simple" }

[[package]]
name = "six"
version = "1.16.0"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        assert_eq!(deps, vec![Dependency::new("flask", "3.0.0")]);
    }

    #[test]
    fn test_cycles_terminate() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
version = "1.0.0"
source = { virtual = "." }
dependencies = [{ name = "a" }]

[[package]]
name = "a"
version = "1.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "b" }]

[[package]]
name = "b"
version = "1.0"
source = { registry = "https://pypi.org/simple" }
dependencies = [{ name = "a" }, { name = "myapp" }]
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![Dependency::new("a", "1.0"), Dependency::new("b", "1.0")]
        );
    }

    #[test]
    fn test_dangling_reference_and_missing_fields_tolerated() {
        let deps = parse(
            r#"
[[package]]
name = "myapp"
dependencies = [{ name = "ghost" }, { name = "bare" }, { name = "nover" }]

[[package]]
name = "bare"
version = "1.0"

[[package]]
name = "nover"
source = { registry = "https://pypi.org/simple" }
"#,
            &[],
        )
        .unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_walk_deps_deep_chain() {
        let mut lock = String::from(
            "[[package]]\nname = \"myapp\"\ndependencies = [{ name = \"p0\" }]\n",
        );
        for i in 0..5_000 {
            lock.push_str(&format!(
                "[[package]]\nname = \"p{i}\"\nversion = \"1\"\nsource = {{ registry = \"r\" }}\ndependencies = [{{ name = \"p{}\" }}]\n",
                i + 1
            ));
        }
        let deps = parse(&lock, &[]).unwrap();
        assert_eq!(deps.len(), 5_000);
    }
}
