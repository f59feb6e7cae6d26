use crate::app::formatter::OutputGenerator;
use crate::app::models::{is_target_file, PermissionMode, RuntimeConfig, TraversalRequest, WalkOutcome};
use anyhow::{bail, Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;

pub struct Walker {
    follow_links: bool,
}

impl Walker {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            follow_links: config.follow_links,
        }
    }

    /// Applies `request.mode` to every matching file below `request.root`,
    /// writing one line per changed file to `out`.
    ///
    /// A root that does not exist is reported on `out` and yields
    /// [`WalkOutcome::MissingRoot`] rather than an error. Any listing or
    /// permission failure aborts the walk.
    pub fn walk<W: Write>(&self, request: &TraversalRequest, out: &mut W) -> Result<WalkOutcome> {
        let root = &request.root;
        if !root.exists() {
            writeln!(out, "{}", OutputGenerator::missing_root_line(root))?;
            log::debug!("nothing to walk, {} is missing", root.display());
            return Ok(WalkOutcome::MissingRoot);
        }
        if !root.is_dir() {
            bail!("Target path is not a directory: {}", root.display());
        }

        // Plain recursive listing: no ignore files, hidden entries included.
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(self.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut processed = 0;
        for result in walker {
            let entry = result.with_context(|| format!("Failed to walk {}", root.display()))?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                continue;
            }

            let path = entry.path();
            if !is_target_file(&entry.file_name().to_string_lossy()) {
                log::trace!("skipping {}", path.display());
                continue;
            }
            // Regular files only, or links resolving to one; chmod acts on the target.
            if !path.is_file() {
                log::trace!("skipping non-regular {}", path.display());
                continue;
            }

            apply_mode(path, request.mode)?;
            writeln!(out, "{}", OutputGenerator::processed_line(path, request.mode))?;
            processed += 1;
        }

        log::debug!("{} file(s) set to {} under {}", processed, request.mode, root.display());
        Ok(WalkOutcome::Completed { processed })
    }
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: PermissionMode) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(mode.bits());
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn apply_mode(path: &Path, mode: PermissionMode) -> Result<()> {
    let mut perms = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .permissions();
    perms.set_readonly(mode == PermissionMode::ReadOnly);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}
