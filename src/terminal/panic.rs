use super::setup::emergency_restore;
use std::panic;

/// Chain a hook that restores the terminal before the existing panic hook
/// prints its report. Install after `color_eyre::install()` so the report
/// keeps its formatting.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
