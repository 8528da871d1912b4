use dominator::{Dom, html, link};
use futures_signals::signal::SignalExt;

use super::{Route, icons};

pub struct Navbar {}

impl Navbar {
    fn render_link(route: Route, name: &str, icon: Dom) -> Dom {
        html!("li", {
            .children(&mut [
                link!(route.url(), {
                    .class_signal("active", Route::signal().map(move |x| x == route))
                    .style("display", "flex")
                    .style("align-items", "center")
                    .style("gap", "10px")
                    .children(&mut [
                        icon,
                        html!("span", {
                            .text(name)
                        })
                    ])
                })
            ])
        })
    }

    pub fn render() -> Dom {
        html!("nav", {
            .children(&mut [
                html!("h1", {
                    .text("Quotes Admin")
                }),
                html!("ul", {
                    .children(&mut [
                        Self::render_link(Route::Dashboard, "Dashboard", icons::dashboard(20)),
                        Self::render_link(Route::Categories, "Categories", icons::library(20)),
                        Self::render_link(Route::Quotes, "Quotes", icons::quote(20)),
                    ])
                })
            ])
        })
    }
}
