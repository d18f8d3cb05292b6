use atlas_domain::region::Category;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

/// One button per [`Category`]. Clicking a button always reports it, even if it is
/// already selected.
#[component]
pub fn CategoryPicker(selected: Option<Category>, on_select: EventHandler<Category>) -> Element {
    rsx! {
        nav {
            class: "category-picker",
            role: "radiogroup",
            "aria-label": "Region category",
            for category in Category::iter() {
                button {
                    key: "{category}",
                    class: if selected == Some(category) { "category selected" } else { "category" },
                    role: "radio",
                    "aria-checked": if selected == Some(category) { "true" } else { "false" },
                    onclick: move |_| on_select.call(category),
                    {category.label()}
                }
            }
        }
    }
}
