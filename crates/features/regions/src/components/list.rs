use super::RegionCard;
use crate::visibility::CapitalVisibility;
use atlas_domain::region::Region;
use dioxus::prelude::*;

/// Renders one [`RegionCard`] per region, in API order.
///
/// Capital visibility is owned here and scoped to `generation`: when the parent hands
/// over a new list, every card starts hidden again.
#[component]
pub fn RegionList(
    regions: Vec<Region>,
    generation: u64,
    #[props(default)] loading: bool,
) -> Element {
    let mut visibility = use_signal(CapitalVisibility::default);

    rsx! {
        section { class: "region-list", "aria-busy": "{loading}",
            for region in regions.iter() {
                RegionCard {
                    key: "{region.name}",
                    region: region.clone(),
                    capital_visible: visibility.read().is_visible(generation, &region.name),
                    on_toggle: move |name: String| {
                        visibility.write().toggle(generation, &name);
                    },
                }
            }
        }
    }
}
