//! Platform Commands

use socialmedia_core::{BlockKind, PlatformRegistry};

use crate::config::CliConfig;
use crate::display;

/// Lists the platforms a block kind offers.
pub fn list(config: &CliConfig, kind: BlockKind) {
    display::display_platforms(&PlatformRegistry::for_kind(kind), &config.catalog());
}
