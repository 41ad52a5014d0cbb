use std::path::{Path, PathBuf};

use crate::fsutil;

use super::detect::is_host_mount;

/// The ordered candidate views probed for each logical host file.
///
/// For a relative path such as `proc/cpuinfo`, candidates are tried in fixed
/// priority order:
///
/// 1. Under the init process's root indirection (`/proc/1/root`), which can
///    expose the true host view even without an explicit mount.
/// 2. Under the host-mount prefix, only when [`is_host_mount`] confirms a
///    genuine host bind-mount.
/// 3. Under the container's own root.
///
/// A candidate is used only when it is an existing regular file whose
/// content, after trimming, is non-empty. Read and permission failures are
/// swallowed and the next candidate tried; resolution itself never fails.
#[derive(Debug, Clone)]
pub struct Sources {
    init_root: PathBuf,
    host_mount: PathBuf,
    local_root: PathBuf,
}

impl Default for Sources {
    /// Builds the production source chain: `/proc/1/root`, then the host
    /// mount at `ROOTFS_MOUNT_PATH` (default `/rootfs`), then `/`.
    fn default() -> Self {
        let host_mount = std::env::var_os("ROOTFS_MOUNT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("/rootfs"));
        Self::new("/proc/1/root", host_mount, "/")
    }
}

impl Sources {
    pub fn new(
        init_root: impl Into<PathBuf>,
        host_mount: impl Into<PathBuf>,
        local_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            init_root: init_root.into(),
            host_mount: host_mount.into(),
            local_root: local_root.into(),
        }
    }

    /// Returns true if the host-mount prefix passes the marker check.
    pub fn host_mounted(&self) -> bool {
        is_host_mount(&self.host_mount)
    }

    /// Resolves the given logical relative path against the candidate views
    /// and returns the first trimmed, non-empty content found.
    ///
    /// # Arguments
    ///
    /// * `rel` - Relative path of the fact file, e.g. `proc/meminfo`.
    ///
    /// # Returns
    ///
    /// * `Some(content)` from the highest-priority readable candidate.
    /// * `None` when no candidate yields content.
    pub fn read(&self, rel: &str) -> Option<String> {
        let mut candidates = vec![self.init_root.join(rel)];
        if self.host_mounted() {
            candidates.push(self.host_mount.join(rel));
        }
        candidates.push(self.local_root.join(rel));

        for path in candidates {
            if let Some(content) = try_read(&path) {
                log::debug!("resolved `{rel}` from `{}`", path.display());
                return Some(content);
            }
        }

        log::debug!("no readable candidate for `{rel}`");
        None
    }

    /// Like [`read`](Self::read), but produces the caller-supplied fallback
    /// value when no candidate yields content. Never fails.
    pub fn read_or_else(&self, rel: &str, fallback: impl FnOnce() -> String) -> String {
        self.read(rel).unwrap_or_else(fallback)
    }

    /// Resolves the first of several logical paths that yields content.
    pub fn read_first(&self, rels: &[&str]) -> Option<String> {
        rels.iter().find_map(|rel| self.read(rel))
    }

    /// Root to run filesystem statistics against: the init-process view when
    /// it is reachable, else the local root.
    pub fn fs_root(&self) -> &Path {
        if self.init_root.is_dir() {
            &self.init_root
        } else {
            &self.local_root
        }
    }
}

/// Reads a single candidate, swallowing every failure.
fn try_read(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }
    match fsutil::read_trimmed(path) {
        Ok(content) if !content.is_empty() => Some(content),
        Ok(_) => None,
        Err(err) => {
            log::debug!("{err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources_in(dir: &Path) -> Sources {
        Sources::new(
            dir.join("init_root"),
            dir.join("rootfs"),
            dir.join("local"),
        )
    }

    fn write_fact(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn mark_host_mount(root: &Path) {
        for marker in ["proc", "sys", "etc"] {
            std::fs::create_dir_all(root.join(marker)).unwrap();
        }
    }

    #[test]
    fn test_init_root_wins_over_local() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        write_fact(&tempdir.path().join("init_root"), "proc/cpuinfo", "alpha");
        write_fact(&tempdir.path().join("local"), "proc/cpuinfo", "gamma");

        assert_eq!(sources.read("proc/cpuinfo").as_deref(), Some("alpha"));
    }

    #[test]
    fn test_host_mount_wins_over_local() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        let rootfs = tempdir.path().join("rootfs");
        mark_host_mount(&rootfs);
        write_fact(&rootfs, "proc/cpuinfo", "beta");
        write_fact(&tempdir.path().join("local"), "proc/cpuinfo", "gamma");

        assert!(sources.host_mounted());
        assert_eq!(sources.read("proc/cpuinfo").as_deref(), Some("beta"));
    }

    #[test]
    fn test_unmarked_host_mount_is_skipped() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        // host mount carries the file, but not the sys/etc markers
        write_fact(&tempdir.path().join("rootfs"), "proc/cpuinfo", "beta");
        write_fact(&tempdir.path().join("local"), "proc/cpuinfo", "gamma");

        assert!(!sources.host_mounted());
        assert_eq!(sources.read("proc/cpuinfo").as_deref(), Some("gamma"));
    }

    #[test]
    fn test_local_as_final_fallback() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        write_fact(&tempdir.path().join("local"), "proc/cpuinfo", "gamma");

        assert_eq!(sources.read("proc/cpuinfo").as_deref(), Some("gamma"));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        write_fact(&tempdir.path().join("init_root"), "proc/cpuinfo", "  \n\t\n");
        write_fact(&tempdir.path().join("local"), "proc/cpuinfo", "gamma");

        assert_eq!(sources.read("proc/cpuinfo").as_deref(), Some("gamma"));
    }

    #[test]
    fn test_no_candidate_yields_none() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());

        assert_eq!(sources.read("proc/cpuinfo"), None);
    }

    #[test]
    fn test_read_or_else_invokes_fallback() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());

        let content = sources.read_or_else("proc/cpuinfo", || "fallback".to_owned());
        assert_eq!(content, "fallback");
    }

    #[test]
    fn test_read_first_skips_missing_paths() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        write_fact(
            &tempdir.path().join("local"),
            "proc/sys/kernel/hostname",
            "some-host",
        );

        let content = sources.read_first(&["etc/hostname", "proc/sys/kernel/hostname"]);
        assert_eq!(content.as_deref(), Some("some-host"));
    }

    #[test]
    fn test_fs_root_prefers_init_root() {
        let tempdir = tempfile::tempdir().unwrap();
        let sources = sources_in(tempdir.path());
        assert_eq!(sources.fs_root(), tempdir.path().join("local"));

        std::fs::create_dir_all(tempdir.path().join("init_root")).unwrap();
        assert_eq!(sources.fs_root(), tempdir.path().join("init_root"));
    }
}
