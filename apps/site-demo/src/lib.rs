use sitelift::{CarouselOptions, RevealPolicy, SiteLauncher};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
use wasm_bindgen::prelude::*;

#[cfg_attr(not(all(target_arch = "wasm32", feature = "web")), allow(dead_code))]
fn create_site() -> SiteLauncher {
    SiteLauncher::new()
        .with_carousel("why", CarouselOptions::rail())
        .with_reveal(RevealPolicy::new("#contact", 0.25, true))
        .with_log_level(log::Level::Info)
}

/// Web entry point
#[cfg_attr(all(target_arch = "wasm32", feature = "web"), wasm_bindgen(start))]
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn wasm_entry_point() {
    create_site().run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_mounts_the_default_behaviors() {
        let settings = create_site().build();
        assert_eq!(settings.carousels.len(), 3);
        assert_eq!(settings.modals, ["privacy", "terms"]);
        assert_eq!(settings.reveals.len(), 3);
        assert_eq!(settings.reveals[2].selector, "#contact");
    }
}
