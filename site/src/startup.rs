//! Startup guard for the browser entry point.

use tracing::{error, info};

use crate::error::StartupError;

/// Id of the element the app mounts into.
pub const MOUNT_NODE_ID: &str = "root";

/// Look up the mount node and hand it to `mount`.
///
/// When the node is missing, `mount` is never called and nothing renders.
pub fn start<N, L, M>(lookup: L, mount: M) -> Result<(), StartupError>
where
    L: FnOnce(&str) -> Option<N>,
    M: FnOnce(N),
{
    let Some(node) = lookup(MOUNT_NODE_ID) else {
        error!(id = MOUNT_NODE_ID, "mount node not found, aborting startup");
        return Err(StartupError::MissingMountNode { id: MOUNT_NODE_ID });
    };
    mount(node);
    info!(id = MOUNT_NODE_ID, "portfolio mounted");
    Ok(())
}
