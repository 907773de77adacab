pub mod check;
pub mod play;

use std::path::Path;

use wc_core::World;
use wc_core::content::capital_wasteland;

/// Load a world file, or the bundled world when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read world {}: {e}", path.display()))?;
            World::from_json(&json).map_err(|e| format!("invalid world {}: {e}", path.display()))
        }
        None => capital_wasteland().map_err(|e| format!("bundled world is broken: {e}")),
    }
}
