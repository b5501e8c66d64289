//! Descriptor discovery
//!
//! Walks the source tree and turns every descriptor into a job whose
//! output directory mirrors the descriptor's position under the source
//! root.

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::UnpackConfig;
use crate::pvr::errors::{AtlasError, AtlasResult};
use super::job::SpriteJob;

/// Collects one job per descriptor under `config.source_root`
///
/// Jobs are sorted by descriptor path so runs are reproducible.
pub fn discover_jobs(config: &UnpackConfig) -> AtlasResult<Vec<SpriteJob>> {
    let root = &config.source_root;
    if !root.is_dir() {
        return Err(AtlasError::ConfigError(format!(
            "Source directory {} does not exist",
            root.display()
        )));
    }

    let mut descriptors = Vec::new();
    collect_descriptors(root, &config.descriptor_extension, &mut descriptors)?;
    descriptors.sort();
    debug!("Found {} descriptors under {}", descriptors.len(), root.display());

    descriptors
        .into_iter()
        .map(|path| {
            let output_dir = output_dir_for(&path, root, &config.output_root)?;
            Ok(SpriteJob::new(path, output_dir, config.frame_index))
        })
        .collect()
}

fn collect_descriptors(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> AtlasResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            collect_descriptors(&path, extension, out)?;
        } else if has_extension(&path, extension) {
            out.push(path);
        }
    }
    Ok(())
}

/// Case-insensitive extension match
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Output directory mirroring the descriptor's directory under the source root
///
/// `resources/ui/button.spr` with output root `out` maps to `out/ui`.
pub fn output_dir_for(descriptor: &Path, source_root: &Path, output_root: &Path) -> AtlasResult<PathBuf> {
    let parent = descriptor.parent().unwrap_or_else(|| Path::new(""));
    let relative = parent.strip_prefix(source_root).map_err(|_| {
        AtlasError::GenericError(format!(
            "{} is not under {}",
            descriptor.display(),
            source_root.display()
        ))
    })?;
    Ok(output_root.join(relative))
}
