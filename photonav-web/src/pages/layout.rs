use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        header { class: "border-b border-gray-200 mb-8",
            nav { class: "max-w-7xl mx-auto px-4 h-16 flex items-center gap-6",
                Link { to: Route::Gallery {}, class: "text-lg font-semibold text-gray-900", "Gallery" }
                a { href: "/contact", class: "text-gray-600 hover:text-gray-900", "Contact" }
            }
        }
        main { Outlet::<Route> {} }
    }
}
