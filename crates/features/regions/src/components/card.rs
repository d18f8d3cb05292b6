use atlas_domain::constants::{HIDE_CAPITAL, SHOW_CAPITAL};
use atlas_domain::region::Region;
use dioxus::prelude::*;

/// A single region: name, flag, and a capital that is revealed on demand.
///
/// The card is stateless; `on_toggle` receives the region name and the owner decides
/// what `capital_visible` becomes.
#[component]
pub fn RegionCard(
    region: Region,
    capital_visible: bool,
    on_toggle: EventHandler<String>,
) -> Element {
    let flag_alt = region.flag_alt();
    let label = if capital_visible { HIDE_CAPITAL } else { SHOW_CAPITAL };
    let name = region.name.clone();

    rsx! {
        article { class: "region-card",
            h2 { class: "region-name", "{region.name}" }
            img { class: "region-flag", src: "{region.flag_url}", alt: "{flag_alt}" }
            if capital_visible {
                p { class: "region-capital", "{region.capital}" }
            }
            button {
                class: "capital-toggle",
                "aria-expanded": "{capital_visible}",
                onclick: move |_| on_toggle.call(name.clone()),
                "{label}"
            }
        }
    }
}
