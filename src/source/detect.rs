use std::path::Path;

/// Marker subdirectories a genuine host root mount carries.
const HOST_MARKERS: [&str; 3] = ["proc", "sys", "etc"];

/// Returns true if the given mount prefix looks like a full host root
/// filesystem rather than an empty or partial bind-mount.
///
/// The check requires the `proc`, `sys`, and `etc` subdirectories to exist
/// under the prefix. Existence-check failures count as absent and do **not**
/// cause this function to fail.
///
/// # Arguments
///
/// * `prefix` - Path under which the host root filesystem is expected to be
///   mounted (e.g., `/rootfs`).
///
/// # Returns
///
/// * `true` if all marker subdirectories exist.
/// * `false` otherwise.
pub fn is_host_mount(prefix: impl AsRef<Path>) -> bool {
    let prefix = prefix.as_ref();
    HOST_MARKERS.iter().all(|marker| {
        let path = prefix.join(marker);
        match path.try_exists() {
            Ok(exists) => exists && path.is_dir(),
            Err(err) => {
                log::debug!(
                    "failed to check host marker `{}`: {}",
                    path.display(),
                    err
                );
                false
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_marker_set() {
        let tempdir = tempfile::tempdir().unwrap();
        for marker in ["proc", "sys", "etc"] {
            std::fs::create_dir(tempdir.path().join(marker)).unwrap();
        }
        assert!(is_host_mount(tempdir.path()));
    }

    #[test]
    fn test_partial_marker_set() {
        let tempdir = tempfile::tempdir().unwrap();
        std::fs::create_dir(tempdir.path().join("proc")).unwrap();
        std::fs::create_dir(tempdir.path().join("sys")).unwrap();
        assert!(!is_host_mount(tempdir.path()));
    }

    #[test]
    fn test_empty_prefix() {
        let tempdir = tempfile::tempdir().unwrap();
        assert!(!is_host_mount(tempdir.path()));
    }

    #[test]
    fn test_missing_prefix() {
        assert!(!is_host_mount("/definitely/does/not/exist"));
    }

    #[test]
    fn test_marker_is_a_file() {
        let tempdir = tempfile::tempdir().unwrap();
        std::fs::create_dir(tempdir.path().join("proc")).unwrap();
        std::fs::create_dir(tempdir.path().join("sys")).unwrap();
        std::fs::write(tempdir.path().join("etc"), "not a directory").unwrap();
        assert!(!is_host_mount(tempdir.path()));
    }
}
