//! Candidate-source resolution for host fact files.
//!
//! Picks, per logical file, the most trustworthy of three filesystem views:
//! the init process's root indirection, a host bind-mount prefix, and the
//! container's own filesystem.
mod detect;
mod resolver;

pub use detect::is_host_mount;
pub use resolver::Sources;
