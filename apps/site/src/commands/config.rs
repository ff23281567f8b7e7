//! # Config Commands
//!
//! Commands for retrieving site configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current site configuration.
///
/// ## When Used
/// - Page load (booking button label, company details)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
