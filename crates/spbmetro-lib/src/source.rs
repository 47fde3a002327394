use std::env;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};
use crate::map::{load_map, parse_map, MetroMap};

/// Environment variable consulted when no explicit map path is given.
pub const MAP_ENV_VAR: &str = "SPBMETRO_MAP";

/// Full Saint Petersburg network bundled with the library.
const EMBEDDED_MAP: &str = include_str!("../data/map.json");

static EMBEDDED: Lazy<std::result::Result<MetroMap, String>> =
    Lazy::new(|| parse_map(EMBEDDED_MAP).map_err(|err| err.to_string()));

/// Load the bundled Saint Petersburg network.
pub fn embedded_map() -> Result<MetroMap> {
    EMBEDDED
        .clone()
        .map_err(|message| Error::InvalidMap { message })
}

/// Resolve and load the network map.
///
/// The resolution order:
/// 1. Explicit `path` argument when provided.
/// 2. `SPBMETRO_MAP` environment variable.
/// 3. The embedded default network.
pub fn ensure_map(path: Option<&Path>) -> Result<MetroMap> {
    if let Some(explicit) = path {
        return load_map(explicit);
    }

    if let Some(env_path) = env::var_os(MAP_ENV_VAR) {
        return load_map(Path::new(&env_path));
    }

    debug!("using embedded default map");
    embedded_map()
}
