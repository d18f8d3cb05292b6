#![cfg(feature = "client")]

use atlas_domain::region::{Category, Region};
use atlas_regions::components::{CategoryPicker, RegionCard, RegionList, RegionsApp};
use atlas_regions::{AppState, RegionsError, Resolution};
use dioxus::dioxus_core::{ElementId, Event, Mutation};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData, set_event_converter,
};
use std::any::Any;
use std::rc::Rc;

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// A live `RegionList` that can be clicked. `toggles[i]` is the capital button of card `i`.
struct Harness {
    dom: VirtualDom,
    toggles: Vec<ElementId>,
}

impl Harness {
    fn mount(root: fn() -> Element) -> Self {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new(root);
        let toggles = dom
            .rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(id),
                _ => None,
            })
            .collect();

        Self { dom, toggles }
    }

    fn click(&mut self, card: usize) {
        let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        self.dom.runtime().handle_event("click", event, self.toggles[card]);
        _ = self.dom.render_immediate_to_vec();
    }

    fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

fn ontario_and_quebec_list() -> Element {
    rsx! { RegionList { regions: vec![ontario(), quebec()], generation: 1 } }
}

fn ontario() -> Region {
    Region::new(
        "Ontario",
        "Toronto",
        "https://upload.wikimedia.org/wikipedia/commons/8/88/Flag_of_Ontario.svg",
    )
}

fn quebec() -> Region {
    Region::new(
        "Quebec",
        "Quebec City",
        "https://upload.wikimedia.org/wikipedia/commons/5/5f/Flag_of_Quebec.svg",
    )
}

fn territories() -> Vec<Region> {
    vec![
        Region::new("Yukon", "Whitehorse", "https://example.org/Flag_of_Yukon.svg"),
        Region::new(
            "Northwest Territories",
            "Yellowknife",
            "https://example.org/Flag_of_Northwest_Territories.svg",
        ),
        Region::new("Nunavut", "Iqaluit", "https://example.org/Flag_of_Nunavut.svg"),
    ]
}

#[test]
fn hidden_card_shows_name_flag_and_show_label() {
    fn root() -> Element {
        rsx! { RegionCard { region: ontario(), capital_visible: false, on_toggle: move |_: String| {} } }
    }

    let html = render(root);

    assert!(html.contains("Ontario"));
    assert!(html.contains("Flag_of_Ontario.svg"));
    assert!(html.contains("<img"));
    assert!(html.contains("Show Capital"));
    assert!(!html.contains("Hide Capital"));
    assert!(!html.contains("Toronto"));
}

#[test]
fn visible_card_shows_capital_and_hide_label() {
    fn root() -> Element {
        rsx! { RegionCard { region: ontario(), capital_visible: true, on_toggle: move |_: String| {} } }
    }

    let html = render(root);

    assert!(html.contains("Toronto"));
    assert!(html.contains("Hide Capital"));
    assert!(!html.contains("Show Capital"));
}

#[test]
fn card_without_flag_url_still_renders_labelled_image() {
    fn root() -> Element {
        rsx! {
            RegionCard {
                region: Region::new("Ontario", "Toronto", ""),
                capital_visible: false,
                on_toggle: move |_: String| {},
            }
        }
    }

    let html = render(root);

    assert!(html.contains("Ontario"));
    assert_eq!(html.matches("<img").count(), 1);
    assert!(html.contains("alt=\"Ontario's Flag\""));
}

#[test]
fn list_renders_one_card_per_region_with_capitals_hidden() {
    fn root() -> Element {
        rsx! { RegionList { regions: vec![ontario(), quebec()], generation: 1 } }
    }

    let html = render(root);

    assert_eq!(html.matches("<article").count(), 2);
    assert_eq!(html.matches("Show Capital").count(), 2);
    assert!(html.contains("Flag_of_Ontario.svg"));
    assert!(html.contains("Flag_of_Quebec.svg"));
    assert!(!html.contains("Toronto"));
    assert!(!html.contains("Quebec City"));
}

#[test]
fn list_preserves_api_order() {
    fn root() -> Element {
        rsx! { RegionList { regions: territories(), generation: 3 } }
    }

    let html = render(root);

    assert_eq!(html.matches("<article").count(), 3);
    let yukon = html.find("Yukon").expect("Yukon rendered");
    let nwt = html.find("Northwest Territories").expect("NWT rendered");
    let nunavut = html.find("Nunavut").expect("Nunavut rendered");
    assert!(yukon < nwt && nwt < nunavut);
}

#[test]
fn empty_list_renders_no_cards() {
    fn root() -> Element {
        rsx! { RegionList { regions: Vec::new(), generation: 0 } }
    }

    let html = render(root);

    assert_eq!(html.matches("<article").count(), 0);
}

#[test]
fn picker_offers_both_categories() {
    fn root() -> Element {
        rsx! { CategoryPicker { selected: None, on_select: move |_: Category| {} } }
    }

    let html = render(root);

    assert_eq!(html.matches("<button").count(), 2);
    let provinces_at = html.find("Provinces").expect("Provinces button");
    let territories_at = html.find("Territories").expect("Territories button");
    assert!(provinces_at < territories_at);
}

#[test]
fn initial_app_render_has_picker_and_no_capitals() {
    let html = render(RegionsApp);

    assert!(html.contains("Provinces"));
    assert!(html.contains("Territories"));
    assert!(!html.contains("Hide Capital"));
    assert_eq!(html.matches("<article").count(), 0);
}

#[test]
fn show_capital_click_reveals_capital_and_second_click_hides_it() {
    let mut list = Harness::mount(ontario_and_quebec_list);
    assert_eq!(list.toggles.len(), 2);

    list.click(0);
    let html = list.html();
    assert!(html.contains("Toronto"));
    assert_eq!(html.matches("Hide Capital").count(), 1);
    assert_eq!(html.matches("Show Capital").count(), 1);

    list.click(0);
    let html = list.html();
    assert!(!html.contains("Toronto"));
    assert_eq!(html.matches("Show Capital").count(), 2);
    assert!(!html.contains("Hide Capital"));
}

#[test]
fn toggling_one_card_leaves_the_others_alone() {
    let mut list = Harness::mount(ontario_and_quebec_list);

    list.click(1);
    let html = list.html();

    assert!(html.contains("Quebec City"));
    assert!(!html.contains("Toronto"));
    let hide_at = html.find("Hide Capital").expect("Quebec toggle relabelled");
    let show_at = html.find("Show Capital").expect("Ontario toggle unchanged");
    assert!(show_at < hide_at);
}

#[test]
fn both_cards_can_show_their_capitals_at_once() {
    let mut list = Harness::mount(ontario_and_quebec_list);

    list.click(0);
    list.click(1);
    let html = list.html();

    assert!(html.contains("Toronto"));
    assert!(html.contains("Quebec City"));
    assert_eq!(html.matches("Hide Capital").count(), 2);
}

#[derive(Clone)]
struct Snapshot {
    regions: Vec<Region>,
    generation: u64,
}

#[allow(clippy::needless_pass_by_value)]
fn snapshot_list(snapshot: Snapshot) -> Element {
    rsx! { RegionList { regions: snapshot.regions, generation: snapshot.generation } }
}

#[test]
fn rejected_fetch_renders_previous_cards_without_error_text() {
    let mut state = AppState::default();
    let provinces = state.select(Category::Provinces);
    state.resolve(provinces, Ok(vec![ontario(), quebec()]));
    let territories = state.select(Category::Territories);
    let outcome = state.resolve(territories, Err(RegionsError::from("connection refused")));
    assert_eq!(outcome, Resolution::Failed);

    let snapshot = Snapshot { regions: state.regions().to_vec(), generation: state.generation() };
    let mut dom = VirtualDom::new_with_props(snapshot_list, snapshot);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains("Ontario"));
    assert!(html.contains("Quebec"));
    assert_eq!(html.matches("Show Capital").count(), 2);
    assert!(!html.contains("connection refused"));
    assert!(!html.to_lowercase().contains("error"));
}
