use super::{CategoryPicker, RegionList};
use crate::controller;
use crate::source::HttpRegionSource;
use crate::state::AppState;
use atlas_domain::config::ClientConfig;
use atlas_domain::region::Category;
use dioxus::prelude::*;

/// Root view: category picker on top, region cards below.
///
/// Reads a [`ClientConfig`] from context when the host provides one and falls back to
/// the defaults otherwise. Provinces are requested on mount.
#[component]
pub fn RegionsApp() -> Element {
    let config = try_use_context::<ClientConfig>().unwrap_or_default();
    let source = use_hook(|| HttpRegionSource::new(&config.api));
    let mut state = use_signal(|| AppState::new(config.fetch.stale_policy));

    let select = use_callback(move |category: Category| {
        let ticket = state.write().select(category);
        let source = source.clone();
        spawn(async move {
            let outcome = controller::fetch(&source, ticket).await;
            let resolution = state.write().resolve(ticket, outcome);
            controller::report(ticket, resolution);
        });
    });

    use_effect(move || select.call(Category::Provinces));

    let view = state.read();

    rsx! {
        main { class: "atlas",
            h1 { class: "atlas-title", "Provinces and Territories of Canada" }
            CategoryPicker { selected: view.selected(), on_select: select }
            RegionList {
                regions: view.regions().to_vec(),
                generation: view.generation(),
                loading: view.is_loading(),
            }
        }
    }
}
