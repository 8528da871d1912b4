use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, events, html, with_node};
use futures_signals::{signal::SignalExt, signal_vec::SignalVecExt};
use quotes_admin_lib::{api::Api, categories::CategoryManager, dialog::Dialog, model::Category};
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::{common::icons, utils::AsyncLoader};

const ICON_LIBRARY_URL: &str = "https://pictogrammers.com/library/mdi/";

pub struct Categories {
    manager: Rc<CategoryManager>,
    loader: AsyncLoader,
    saving: AsyncLoader,
}

impl Categories {
    pub fn new(api: Rc<dyn Api>, dialog: Rc<dyn Dialog>) -> Rc<Self> {
        Rc::new(Self {
            manager: CategoryManager::new(api, dialog),
            loader: AsyncLoader::new(),
            saving: AsyncLoader::new(),
        })
    }

    fn fetch_categories(categories: Rc<Self>) {
        categories.loader.load(clone!(categories => async move {
            if let Err(e) = categories.manager.load().await {
                error!("error fetching categories: {e}");
            }
        }));
    }

    fn save_category(categories: Rc<Self>) {
        categories.saving.load(clone!(categories => async move {
            if let Err(e) = categories.manager.submit().await {
                error!("error saving category: {e}");
            }
        }));
    }

    fn delete_category(categories: Rc<Self>, id: String) {
        AsyncLoader::new().load(async move {
            if let Err(e) = categories.manager.delete(&id).await {
                error!("error deleting category: {e}");
            }
        });
    }

    fn render_form(categories: Rc<Self>) -> Dom {
        let manager = categories.manager.clone();
        html!("form" => HtmlFormElement, {
            .style("background-color", "white")
            .style("padding", "20px")
            .style("border-radius", "8px")
            .style("margin-bottom", "30px")
            .style("display", "flex")
            .style("gap", "10px")
            .style("align-items", "flex-end")
            .with_node!(form => {
                .children(&mut [
                    html!("div", {
                        .style("flex", "1")
                        .children(&mut [
                            html!("label", {
                                .style("display", "block")
                                .style("margin-bottom", "5px")
                                .text("Name")
                            }),
                            html!("input" => HtmlInputElement, {
                                .attr("type", "text")
                                .attr("required", "")
                                .style("width", "100%")
                                .prop_signal("value", manager.name.signal_cloned())
                                .with_node!(input => {
                                    .event(clone!(manager => move |_: events::Input| {
                                        manager.name.set(input.value());
                                    }))
                                })
                            }),
                        ])
                    }),
                    html!("div", {
                        .style("flex", "1")
                        .children(&mut [
                            html!("label", {
                                .style("display", "block")
                                .style("margin-bottom", "5px")
                                .text("Icon Name (Material Icons)")
                            }),
                            html!("input" => HtmlInputElement, {
                                .attr("type", "text")
                                .attr("required", "")
                                .attr("placeholder", "e.g. fire, rocket, heartbeat")
                                .style("width", "100%")
                                .prop_signal("value", manager.icon.signal_cloned())
                                .with_node!(input => {
                                    .event(clone!(manager => move |_: events::Input| {
                                        manager.icon.set(input.value());
                                    }))
                                })
                            }),
                            html!("small", {
                                .style("font-size", "11px")
                                .style("color", "#666")
                                .text("Browse icons: ")
                                .children(&mut [
                                    html!("a", {
                                        .attr("href", ICON_LIBRARY_URL)
                                        .attr("target", "_blank")
                                        .attr("rel", "noopener noreferrer")
                                        .text("Material Design Icons")
                                    })
                                ])
                            }),
                        ])
                    }),
                    html!("button", {
                        .attr("type", "submit")
                        .class("primary")
                        .attr_signal("disabled", categories.saving.is_loading().map(|loading| loading.then_some("")))
                        .event_with_options(&EventOptions::preventable(), clone!(categories, form => move |e: events::Click| {
                            e.prevent_default();
                            if form.report_validity() {
                                Self::save_category(categories.clone());
                            }
                        }))
                        .children(&mut [
                            icons::plus(18),
                            html!("span", {
                                .text_signal(manager.editing.signal_ref(|id| if id.is_some() { "Update" } else { "Add" }))
                            })
                        ])
                    }),
                    html!("button", {
                        .attr("type", "button")
                        .visible_signal(manager.editing.signal_ref(|id| id.is_some()))
                        .text("Cancel")
                        .event(clone!(manager => move |_: events::Click| {
                            manager.cancel_edit();
                        }))
                    }),
                ])
            })
        })
    }

    fn render_row(categories: Rc<Self>, cat: Category) -> Dom {
        html!("tr", {
            .style("border-top", "1px solid #eee")
            .children(&mut [
                html!("td", {
                    .style("padding", "12px")
                    .style("font-size", "14px")
                    .style("color", "#007bff")
                    .style("font-weight", "bold")
                    .text(&cat.icon)
                }),
                html!("td", {
                    .style("padding", "12px")
                    .text(&cat.name)
                }),
                html!("td", {
                    .style("padding", "12px")
                    .style("text-align", "center")
                    .children(&mut [
                        html!("button", {
                            .class("icon-button")
                            .style("margin-right", "10px")
                            .style("color", "#007bff")
                            .event(clone!(categories, cat => move |_: events::Click| {
                                categories.manager.begin_edit(&cat);
                            }))
                            .children(&mut [icons::edit(18)])
                        }),
                        html!("button", {
                            .class("icon-button")
                            .style("color", "#dc3545")
                            .event(clone!(categories, cat => move |_: events::Click| {
                                Self::delete_category(categories.clone(), cat.id.clone());
                            }))
                            .children(&mut [icons::trash(18)])
                        }),
                    ])
                }),
            ])
        })
    }

    fn render_table(categories: Rc<Self>) -> Dom {
        html!("div", {
            .style("background-color", "white")
            .style("border-radius", "8px")
            .style("overflow", "hidden")
            .children(&mut [
                html!("table", {
                    .style("width", "100%")
                    .style("border-collapse", "collapse")
                    .children(&mut [
                        html!("thead", {
                            .style("background-color", "#f1f3f5")
                            .children(&mut [
                                html!("tr", {
                                    .children(&mut [
                                        html!("th", { .style("text-align", "left").style("padding", "12px").text("Icon Name") }),
                                        html!("th", { .style("text-align", "left").style("padding", "12px").text("Name") }),
                                        html!("th", { .style("text-align", "center").style("padding", "12px").text("Actions") }),
                                    ])
                                })
                            ])
                        }),
                        html!("tbody", {
                            .children_signal_vec(categories.manager.categories.signal_vec_cloned().map(clone!(categories => move |cat| {
                                Self::render_row(categories.clone(), cat)
                            })))
                        }),
                    ])
                })
            ])
        })
    }

    pub fn render(categories: Rc<Self>) -> Dom {
        Self::fetch_categories(categories.clone());

        html!("div", {
            .children(&mut [
                html!("h2", {
                    .text("Manage Categories")
                }),
                Self::render_form(categories.clone()),
                Self::render_table(categories),
            ])
        })
    }
}
