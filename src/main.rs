/// Entry point for the hostfacts snapshot server.
///
/// Probes host-level resource metrics from inside a container, preferring
/// the host filesystem view when one is reachable, and serves the snapshot
/// as JSON.
///
/// # Examples
///
/// ```bash
/// ROOTFS_MOUNT_PATH=/rootfs LISTEN_ADDR=0.0.0.0:3000 cargo run
/// ```
#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    hostfacts::run().await
}
