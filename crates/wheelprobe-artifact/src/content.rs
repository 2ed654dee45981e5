//! Python sources for a synthetic package.
//!
//! Import graph (every edge points at a generated module):
//!
//! ```text
//! pkg/__init__      -> pkg.core
//! pkg/core          -> pkg.utils
//! pkg/sub/__init__  -> pkg.sub.feature
//! pkg/sub/feature   -> pkg.core
//! ```
//!
//! Every module embeds the version as a string literal, so a renamed or
//! re-versioned copy is observable from inside the interpreter.

use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::model::ArtifactSpec;

/// One generated `.py` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    /// Archive path, e.g. `pkg/core.py`
    pub path: String,
    /// Dotted module name, e.g. `pkg.core`
    pub module: String,
    pub content: String,
    /// Dotted names of the package-internal modules this file imports
    pub imports: Vec<String>,
}

impl ModuleFile {
    fn new(path: String, module: String, content: String, imports: Vec<String>) -> Self {
        Self {
            path,
            module,
            content,
            imports,
        }
    }
}

/// Render every module for `spec`, in archive order.
pub fn generate_modules(spec: &ArtifactSpec) -> Vec<ModuleFile> {
    let pkg = spec.package_name.as_str();
    let mut modules = vec![init_module(spec), core_module(spec), utils_module(spec)];
    if spec.include_submodule {
        modules.push(ModuleFile::new(
            format!("{pkg}/sub/__init__.py"),
            format!("{pkg}.sub"),
            sub_init_source(pkg),
            vec![format!("{pkg}.sub.feature")],
        ));
        modules.push(feature_module(spec));
    }
    modules
}

fn init_module(spec: &ArtifactSpec) -> ModuleFile {
    let pkg = spec.package_name.as_str();
    let version = spec.version.as_str();
    let content = format!(
        r#""""Test package {pkg} version {version}."""

from {pkg}.core import main_func

__version__ = "{version}"

def get_version():
    """Return the package version."""
    return __version__
"#
    );
    ModuleFile::new(
        format!("{pkg}/__init__.py"),
        pkg.to_string(),
        content,
        vec![format!("{pkg}.core")],
    )
}

fn core_module(spec: &ArtifactSpec) -> ModuleFile {
    let pkg = spec.package_name.as_str();
    let version = spec.version.as_str();
    let content = format!(
        r#""""Core module for {pkg}."""

from {pkg}.utils import helper, get_utils_version

VERSION_TAG = "{version}"

def main_func():
    """Main function."""
    return f"main_func from {{VERSION_TAG}}"

def get_helper_version():
    """Get version from the helper module."""
    return get_utils_version()

def get_core_version():
    """Get this module's version tag."""
    return VERSION_TAG
"#
    );
    ModuleFile::new(
        format!("{pkg}/core.py"),
        format!("{pkg}.core"),
        content,
        vec![format!("{pkg}.utils")],
    )
}

fn utils_module(spec: &ArtifactSpec) -> ModuleFile {
    let pkg = spec.package_name.as_str();
    let version = spec.version.as_str();
    let content = format!(
        r#""""Utilities module for {pkg}."""

VERSION_TAG = "{version}"

def helper():
    """Helper function."""
    return f"helper from {{VERSION_TAG}}"

def get_utils_version():
    """Return this module's version tag."""
    return VERSION_TAG
"#
    );
    ModuleFile::new(
        format!("{pkg}/utils.py"),
        format!("{pkg}.utils"),
        content,
        Vec::new(),
    )
}

fn sub_init_source(pkg: &str) -> String {
    format!(
        r#""""Submodule for {pkg}."""

from {pkg}.sub.feature import Feature
"#
    )
}

fn feature_module(spec: &ArtifactSpec) -> ModuleFile {
    let pkg = spec.package_name.as_str();
    let version = spec.version.as_str();
    let content = format!(
        r#""""Feature module in subpackage."""

from {pkg}.core import get_core_version

VERSION_TAG = "{version}"

class Feature:
    """A feature class."""

    def __init__(self):
        self.version = VERSION_TAG

def core_version():
    """Get version from the core module (tests cross-module imports)."""
    return get_core_version()

def get_feature_version():
    """Get this module's version tag."""
    return VERSION_TAG
"#
    );
    ModuleFile::new(
        format!("{pkg}/sub/feature.py"),
        format!("{pkg}.sub.feature"),
        content,
        vec![format!("{pkg}.core")],
    )
}

/// Verify every internal import resolves to a generated module and the graph is acyclic.
pub fn check_graph(modules: &[ModuleFile]) -> Result<(), GraphError> {
    let edges: HashMap<&str, &[String]> = modules
        .iter()
        .map(|m| (m.module.as_str(), m.imports.as_slice()))
        .collect();

    for m in modules {
        for target in &m.imports {
            if !edges.contains_key(target.as_str()) {
                return Err(GraphError::MissingTarget {
                    from: m.module.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    let mut done: HashSet<&str> = HashSet::new();
    for m in modules {
        let mut on_path = HashSet::new();
        visit(m.module.as_str(), &edges, &mut on_path, &mut done)?;
    }
    Ok(())
}

fn visit<'a>(
    module: &'a str,
    edges: &HashMap<&'a str, &'a [String]>,
    on_path: &mut HashSet<&'a str>,
    done: &mut HashSet<&'a str>,
) -> Result<(), GraphError> {
    if done.contains(module) {
        return Ok(());
    }
    if !on_path.insert(module) {
        return Err(GraphError::Cycle(module.to_string()));
    }
    if let Some(&targets) = edges.get(module) {
        for target in targets {
            visit(target.as_str(), edges, on_path, done)?;
        }
    }
    on_path.remove(module);
    done.insert(module);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(modules: &[ModuleFile]) -> Vec<&str> {
        modules.iter().map(|m| m.path.as_str()).collect()
    }

    #[test]
    fn test_module_paths_with_submodule() {
        let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0"));
        assert_eq!(
            paths(&modules),
            vec![
                "mypkg/__init__.py",
                "mypkg/core.py",
                "mypkg/utils.py",
                "mypkg/sub/__init__.py",
                "mypkg/sub/feature.py",
            ]
        );
    }

    #[test]
    fn test_module_paths_without_submodule() {
        let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0").with_submodule(false));
        assert_eq!(
            paths(&modules),
            vec!["mypkg/__init__.py", "mypkg/core.py", "mypkg/utils.py"]
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let spec = ArtifactSpec::new("mypkg", "2.3.4");
        assert_eq!(generate_modules(&spec), generate_modules(&spec));
    }

    #[test]
    fn test_versions_differ_only_in_literal() {
        let a = generate_modules(&ArtifactSpec::new("mypkg", "1.0"));
        let b = generate_modules(&ArtifactSpec::new("mypkg", "2.0"));
        for (ma, mb) in a.iter().zip(b.iter()) {
            assert_eq!(ma.content.replace("1.0", "2.0"), mb.content);
        }
    }

    #[test]
    fn test_init_exposes_version_and_imports_core() {
        let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0"));
        let init = &modules[0].content;
        assert!(init.contains("from mypkg.core import main_func\n"));
        assert!(init.contains("__version__ = \"1.0\"\n"));
        assert!(init.contains("def get_version():\n"));
    }

    #[test]
    fn test_core_delegates_to_utils() {
        let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0"));
        let core = &modules[1].content;
        assert!(core.contains("from mypkg.utils import helper, get_utils_version\n"));
        assert!(core.contains("VERSION_TAG = \"1.0\"\n"));
        assert!(core.contains("    return get_utils_version()\n"));
        assert!(core.contains("return f\"main_func from {VERSION_TAG}\""));
        assert!(!modules[2].content.contains("from mypkg"));
    }

    #[test]
    fn test_feature_imports_upward_and_captures_version() {
        let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0"));
        let feature = &modules[4].content;
        assert!(feature.contains("from mypkg.core import get_core_version\n"));
        assert!(feature.contains("        self.version = VERSION_TAG\n"));
        assert!(modules[3]
            .content
            .contains("from mypkg.sub.feature import Feature\n"));
    }

    #[test]
    fn test_generated_graph_is_valid_dag() {
        for include in [true, false] {
            let modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0").with_submodule(include));
            assert_eq!(check_graph(&modules), Ok(()));
        }
    }

    #[test]
    fn test_check_graph_reports_missing_target() {
        let mut modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0").with_submodule(false));
        modules[0].imports.push("mypkg.sub.feature".to_string());
        assert_eq!(
            check_graph(&modules),
            Err(GraphError::MissingTarget {
                from: "mypkg".to_string(),
                target: "mypkg.sub.feature".to_string(),
            })
        );
    }

    #[test]
    fn test_check_graph_reports_cycle() {
        let mut modules = generate_modules(&ArtifactSpec::new("mypkg", "1.0").with_submodule(false));
        modules[2].imports.push("mypkg".to_string());
        assert!(matches!(check_graph(&modules), Err(GraphError::Cycle(_))));
    }
}
