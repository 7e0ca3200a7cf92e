//! Category filter bar - pure view with callbacks

use dioxus::prelude::*;
use photonav_common::CategoryFilter;

/// Row of category buttons. Hidden when `All` is the only choice.
#[component]
pub fn CategoryFilterBar(
    categories: Vec<CategoryFilter>,
    selected: CategoryFilter,
    on_select: EventHandler<CategoryFilter>,
) -> Element {
    if categories.len() <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "w-full px-4 mb-8",
            div { class: "flex flex-wrap justify-center gap-2 max-w-4xl mx-auto",
                for category in categories {
                    {
                        let is_selected = category == selected;
                        let label = category.display_name().to_string();
                        let key = category.as_str().to_string();
                        let button_class = if is_selected {
                            "bg-blue-600 text-white"
                        } else {
                            "bg-gray-100 text-gray-700 hover:bg-gray-200"
                        };
                        rsx! {
                            button {
                                key: "{key}",
                                class: "px-4 py-2 rounded-full text-sm font-medium transition-colors {button_class}",
                                "aria-pressed": "{is_selected}",
                                onclick: move |_| on_select.call(category.clone()),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
