//! Pack generated modules into a `py3-none-any` wheel.
//!
//! `RECORD` is written empty on purpose: these wheels are not hash-verifiable and
//! consumers must not treat them as such.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::content::generate_modules;
use crate::error::ArtifactError;
use crate::model::{ArtifactSpec, WHEEL_TAG};

/// Value of the `Generator` key in the `WHEEL` record.
pub const GENERATOR: &str = "test";

/// One file inside the wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    fn text(path: String, text: String) -> Self {
        Self {
            path,
            bytes: text.into_bytes(),
        }
    }
}

fn metadata_record(spec: &ArtifactSpec) -> String {
    format!(
        "Metadata-Version: 2.1\nName: {}\nVersion: {}\n",
        spec.package_name, spec.version
    )
}

fn wheel_record() -> String {
    format!(
        "Wheel-Version: 1.0\nGenerator: {}\nRoot-Is-Purelib: true\nTag: {}\n",
        GENERATOR, WHEEL_TAG
    )
}

/// Ordered entry list: modules first, then `METADATA`, `WHEEL`, `RECORD`.
pub fn plan_entries(spec: &ArtifactSpec) -> Vec<ArchiveEntry> {
    let dist_info = spec.dist_info_dir();
    let mut entries: Vec<ArchiveEntry> = generate_modules(spec)
        .into_iter()
        .map(|m| ArchiveEntry::text(m.path, m.content))
        .collect();
    entries.push(ArchiveEntry::text(
        format!("{dist_info}/METADATA"),
        metadata_record(spec),
    ));
    entries.push(ArchiveEntry::text(format!("{dist_info}/WHEEL"), wheel_record()));
    entries.push(ArchiveEntry::text(format!("{dist_info}/RECORD"), String::new()));
    entries
}

/// Write `{name}-{version}-py3-none-any.whl` into `out_dir`, replacing any existing file.
///
/// Entry timestamps are pinned to the zip epoch so the same spec yields the same bytes.
pub fn build_wheel(out_dir: &Path, spec: &ArtifactSpec) -> Result<PathBuf, ArtifactError> {
    let wheel_path = out_dir.join(spec.wheel_filename());
    let entries = plan_entries(spec);

    let io_err = |source| ArtifactError::Io {
        path: wheel_path.clone(),
        source,
    };
    let zip_err = |source| ArtifactError::Zip {
        path: wheel_path.clone(),
        source,
    };

    let file = File::create(&wheel_path).map_err(io_err)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    for entry in &entries {
        zip.start_file(entry.path.as_str(), options).map_err(zip_err)?;
        zip.write_all(&entry.bytes).map_err(io_err)?;
    }
    zip.finish().map_err(zip_err)?;

    tracing::debug!(
        wheel = %wheel_path.display(),
        entries = entries.len(),
        "built synthetic wheel"
    );
    Ok(wheel_path)
}

/// Entry names of an existing wheel, in archive order.
pub fn read_entries(wheel_path: &Path) -> Result<Vec<String>, ArtifactError> {
    let file = File::open(wheel_path).map_err(|source| ArtifactError::Io {
        path: wheel_path.to_path_buf(),
        source,
    })?;
    let zip_err = |source| ArtifactError::Zip {
        path: wheel_path.to_path_buf(),
        source,
    };
    let mut archive = ZipArchive::new(file).map_err(zip_err)?;
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let entry = archive.by_index(i).map_err(zip_err)?;
        names.push(entry.name().to_string());
    }
    Ok(names)
}
