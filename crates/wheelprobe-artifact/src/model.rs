/// Compatibility tag carried in both the wheel filename and the `WHEEL` record.
pub const WHEEL_TAG: &str = "py3-none-any";

/// Inputs that fully determine a synthetic wheel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactSpec {
    /// Top-level import name, also used as the distribution name
    pub package_name: String,
    pub version: String,
    /// Emit `sub/__init__.py` and `sub/feature.py`
    pub include_submodule: bool,
}

impl ArtifactSpec {
    /// Spec with the nested submodule included.
    pub fn new(package_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            version: version.into(),
            include_submodule: true,
        }
    }

    pub fn with_submodule(mut self, include_submodule: bool) -> Self {
        self.include_submodule = include_submodule;
        self
    }

    /// `{name}-{version}.dist-info`
    pub fn dist_info_dir(&self) -> String {
        format!("{}-{}.dist-info", self.package_name, self.version)
    }

    /// `{name}-{version}-py3-none-any.whl`
    pub fn wheel_filename(&self) -> String {
        format!("{}-{}-{}.whl", self.package_name, self.version, WHEEL_TAG)
    }
}
