//! Candidate file discovery under the content root.
//!
//! Each content item lives at `<root>/<segment>/<slug>/` where `<segment>` is
//! any immediate child directory of the root (in practice a year). Only a
//! fixed set of well-known files is scanned.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Primary document followed by its sidecar data files, in scan order.
pub const CANDIDATE_FILES: [&str; 3] = ["page.mdx", "bibliography.json", "margin-notes.json"];

/// Returns every existing candidate file for `slugs` under `root`.
///
/// Missing directories and missing sidecars are expected and skipped. The
/// result may contain duplicates when `slugs` repeats. Slugs that are not
/// plain relative paths (absolute, or containing `..`) are skipped so every
/// candidate stays under `root`.
pub fn collect_paths(root: &Path, slugs: &[String]) -> Vec<PathBuf> {
    let segments = segment_dirs(root);
    let mut paths = Vec::new();
    for slug in slugs {
        if !is_relative_slug(slug) {
            tracing::debug!("skipping slug outside content root: {:?}", slug);
            continue;
        }
        for segment in &segments {
            let dir = segment.join(slug);
            if !dir.is_dir() {
                continue;
            }
            for name in CANDIDATE_FILES {
                let fp = dir.join(name);
                if fp.exists() {
                    paths.push(fp);
                }
            }
        }
    }
    tracing::debug!(
        root = %root.display(),
        slugs = slugs.len(),
        files = paths.len(),
        "discovery finished"
    );
    paths
}

/// True if `slug` only has normal components, so joining it cannot leave the segment dir.
fn is_relative_slug(slug: &str) -> bool {
    let path = Path::new(slug);
    path.components().any(|c| matches!(c, Component::Normal(_)))
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Immediate subdirectories of `root`, sorted. Empty if `root` is unreadable.
fn segment_dirs(root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("content root {} not readable: {}", root.display(), e);
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}
