//! Small shared view pieces

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600" }
            p { class: "ml-4 text-gray-600", "{message}" }
        }
    }
}

/// Generic error box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "max-w-2xl mx-auto bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded mb-4",
            p { "{message}" }
        }
    }
}

/// Placeholder shown while the gallery has no photos at all
#[component]
pub fn EmptyGallery() -> Element {
    rsx! {
        div { class: "w-full px-4",
            div { class: "text-center py-12 mb-16 max-w-2xl mx-auto",
                div { class: "flex justify-center mb-4",
                    ImageIcon { class: "w-16 h-16 text-gray-400" }
                }
                h3 { class: "text-xl font-medium text-gray-900 mb-2", "Gallery Coming Soon" }
                p { class: "text-gray-600 mb-6",
                    "We're currently building our photo gallery. Check back soon to see our latest work."
                }
                a {
                    href: "/contact",
                    class: "inline-flex items-center px-6 py-3 bg-blue-600 text-white font-medium rounded-md hover:bg-blue-700 transition-colors duration-200",
                    "Start Your Project"
                }
            }
        }
    }
}
