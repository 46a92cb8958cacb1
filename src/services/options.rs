//! Custom option overrides, exported as a flat `name -> bool` object.

use crate::models::CustomOption;
use crate::state::SceneHost;
use indexmap::IndexMap;

/// Flatten the host's override list into the exported object, keeping list order.
///
/// A name listed twice keeps its last value.
pub fn overrides_map(options: &[CustomOption]) -> IndexMap<String, bool> {
    options
        .iter()
        .map(|option| (option.name.clone(), option.value))
        .collect()
}

/// Rebuild the host's override list, one entry per name.
pub fn apply_overrides<H: SceneHost + ?Sized>(overrides: &IndexMap<String, bool>, host: &mut H) {
    host.clear_custom_options();
    for (name, value) in overrides {
        host.add_custom_option(CustomOption::new(name.clone(), *value));
    }
}
