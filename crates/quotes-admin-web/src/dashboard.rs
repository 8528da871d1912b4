use std::rc::Rc;

use dominator::{Dom, clone, html};
use futures_signals::signal::{Signal, SignalExt};
use quotes_admin_lib::{api::Api, dashboard::DashboardStats};

use crate::utils::AsyncLoader;

pub struct Dashboard {
    stats: Rc<DashboardStats>,
    loader: AsyncLoader,
}

impl Dashboard {
    pub fn new(api: Rc<dyn Api>) -> Rc<Self> {
        Rc::new(Self {
            stats: DashboardStats::new(api),
            loader: AsyncLoader::new(),
        })
    }

    fn fetch_stats(dashboard: Rc<Self>) {
        dashboard.loader.load(clone!(dashboard => async move {
            if let Err(e) = dashboard.stats.load().await {
                error!("error fetching stats: {e}");
            }
        }));
    }

    fn render_stat(title: &str, count: impl Signal<Item = usize> + 'static, color: &str) -> Dom {
        html!("div", {
            .class("stat-card")
            .style("padding", "20px")
            .style("background-color", "white")
            .style("border-radius", "8px")
            .style("box-shadow", "0 2px 4px rgba(0,0,0,0.1)")
            .children(&mut [
                html!("h3", {
                    .text(title)
                }),
                html!("p", {
                    .style("font-size", "2rem")
                    .style("font-weight", "bold")
                    .style("color", color)
                    .text_signal(count.map(|n| n.to_string()))
                })
            ])
        })
    }

    pub fn render(dashboard: Rc<Self>) -> Dom {
        Self::fetch_stats(dashboard.clone());

        html!("div", {
            .children(&mut [
                html!("h2", {
                    .text("Dashboard")
                }),
                html!("div", {
                    .class("stats-grid")
                    .style("display", "grid")
                    .style("grid-template-columns", "repeat(auto-fit, minmax(200px, 1fr))")
                    .style("gap", "20px")
                    .style("margin-top", "20px")
                    .children(&mut [
                        Self::render_stat("Total Quotes", dashboard.stats.quotes.signal(), "#007bff"),
                        Self::render_stat("Categories", dashboard.stats.categories.signal(), "#28a745"),
                    ])
                })
            ])
        })
    }
}
