//! Host-level fact resolution from inside a container.
//!
//! Resolves CPU, memory, disk, OS identity, and network facts by probing
//! procfs-style files across three candidate views: the init process's
//! root indirection, a host bind-mount prefix, and the container's own
//! filesystem. When no host-level source is readable, the resolving
//! process's own view stands in, so a snapshot is always complete.
pub mod api;
pub mod disk;
pub mod facts;
pub mod fsutil;
pub mod local;
pub mod snapshot;
pub mod source;

use std::sync::Arc;

/// Runs the hostfacts snapshot server.
///
/// Builds the candidate-source chain from the environment, initializes the
/// local-facts fallback, and serves the snapshot route until shut down.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let sources = source::Sources::default();
    log::debug!("host mount detected: {}", sources.host_mounted());

    let local = Arc::new(local::SysinfoFacts::new());
    let collector = api::Collector::new(sources, local);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    log::info!("listening on {}", &addr);
    let api = api::APIServer::new(collector).await;
    api.listen(addr).await;

    Ok(())
}
