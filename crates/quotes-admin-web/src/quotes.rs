use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, events, html, with_node};
use futures_signals::{signal::SignalExt, signal_vec::SignalVecExt};
use quotes_admin_lib::{
    api::Api,
    config::UploadConfig,
    dialog::Dialog,
    model::Quote,
    quotes::QuotesManager,
    upload::{MediaKind, MediaUploader},
};
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::{common::icons, utils::AsyncLoader};

fn media_icon(kind: MediaKind, size: u32) -> Dom {
    match kind {
        MediaKind::Image => icons::image(size),
        MediaKind::Video => icons::video(size),
        MediaKind::Audio => icons::music(size),
    }
}

pub struct Quotes {
    manager: Rc<QuotesManager>,
    loader: AsyncLoader,
    saving: AsyncLoader,
}

impl Quotes {
    pub fn new(
        api: Rc<dyn Api>,
        dialog: Rc<dyn Dialog>,
        uploader: Rc<dyn MediaUploader>,
        upload_config: UploadConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            manager: QuotesManager::new(api, dialog, uploader, upload_config),
            loader: AsyncLoader::new(),
            saving: AsyncLoader::new(),
        })
    }

    fn fetch_all(quotes: Rc<Self>) {
        quotes.loader.load(clone!(quotes => async move {
            if let Err(e) = quotes.manager.load_quotes().await {
                error!("error fetching quotes: {e}");
            }
            if let Err(e) = quotes.manager.load_categories().await {
                error!("error fetching categories: {e}");
            }
        }));
    }

    fn save_quote(quotes: Rc<Self>) {
        quotes.saving.load(clone!(quotes => async move {
            if let Err(e) = quotes.manager.submit().await {
                error!("error uploading quote: {e}");
            }
        }));
    }

    fn delete_quote(quotes: Rc<Self>, id: String) {
        AsyncLoader::new().load(async move {
            if let Err(e) = quotes.manager.delete(&id).await {
                error!("error deleting quote: {e}");
            }
        });
    }

    fn render_category_select(quotes: Rc<Self>) -> Dom {
        let manager = quotes.manager.clone();
        html!("div", {
            .children(&mut [
                html!("label", {
                    .style("display", "block")
                    .style("margin-bottom", "5px")
                    .text("Category")
                }),
                html!("select" => HtmlSelectElement, {
                    .style("width", "100%")
                    .children_signal_vec(manager.categories.signal_vec_cloned().map(clone!(manager => move |cat| html!("option", {
                        .attr("value", &cat.id)
                        .text(&cat.name)
                        .attr_signal("selected", manager.category.signal_ref(move |selected| {
                            (selected.as_deref() == Some(cat.id.as_str())).then_some("true")
                        }))
                    }))))
                    .with_node!(select => {
                        .event(clone!(manager => move |_: events::Change| {
                            manager.category.set(Some(select.value()));
                        }))
                    })
                }),
            ])
        })
    }

    fn render_slot(quotes: Rc<Self>, kind: MediaKind) -> Dom {
        let slot = quotes.manager.slot(kind).clone();
        html!("div", {
            .children(&mut [
                html!("label", {
                    .style("display", "block")
                    .style("margin-bottom", "5px")
                    .text(&format!("{} (Optional)", kind.label()))
                }),
            ])
            .child_signal(slot.signal().map(clone!(quotes => move |url| Some(match url {
                Some(url) => html!("div", {
                    .style("display", "flex")
                    .style("align-items", "center")
                    .style("gap", "10px")
                    .children(&mut [
                        match kind {
                            MediaKind::Image => html!("img", {
                                .attr("src", &url)
                                .attr("alt", "Preview")
                                .style("width", "50px")
                                .style("height", "50px")
                                .style("object-fit", "cover")
                                .style("border-radius", "4px")
                            }),
                            _ => html!("span", {
                                .style("font-size", "12px")
                                .style("color", "#666")
                                .text(&format!("{} selected", kind.label()))
                            }),
                        },
                        html!("button", {
                            .attr("type", "button")
                            .class("link-danger")
                            .text("Remove")
                            .event(clone!(quotes => move |_: events::Click| {
                                quotes.manager.remove_media(kind);
                            }))
                        }),
                    ])
                }),
                None => html!("button", {
                    .attr("type", "button")
                    .class("upload")
                    .event(clone!(quotes => move |_: events::Click| {
                        quotes.manager.acquire_media(kind);
                    }))
                    .children(&mut [
                        media_icon(kind, 16),
                        html!("span", {
                            .text(&format!(" Upload {}", kind.label()))
                        }),
                    ])
                }),
            }))))
        })
    }

    fn render_form(quotes: Rc<Self>) -> Dom {
        let manager = quotes.manager.clone();
        html!("form" => HtmlFormElement, {
            .style("background-color", "white")
            .style("padding", "20px")
            .style("border-radius", "8px")
            .style("margin-bottom", "30px")
            .with_node!(form => {
                .children(&mut [
                    html!("div", {
                        .class("form-grid")
                        .children(&mut [
                            Self::render_category_select(quotes.clone()),
                            html!("div", {
                                .children(&mut [
                                    html!("label", {
                                        .style("display", "block")
                                        .style("margin-bottom", "5px")
                                        .text("Author")
                                    }),
                                    html!("input" => HtmlInputElement, {
                                        .attr("type", "text")
                                        .attr("required", "")
                                        .style("width", "100%")
                                        .prop_signal("value", manager.author.signal_cloned())
                                        .with_node!(input => {
                                            .event(clone!(manager => move |_: events::Input| {
                                                manager.author.set(input.value());
                                            }))
                                        })
                                    }),
                                ])
                            }),
                        ])
                    }),
                    html!("div", {
                        .style("margin-top", "15px")
                        .children(&mut [
                            html!("label", {
                                .style("display", "block")
                                .style("margin-bottom", "5px")
                                .text("Text Content")
                            }),
                            html!("textarea" => HtmlTextAreaElement, {
                                .attr("placeholder", "Optional text for the quote...")
                                .style("width", "100%")
                                .style("min-height", "80px")
                                .prop_signal("value", manager.text.signal_cloned())
                                .with_node!(textarea => {
                                    .event(clone!(manager => move |_: events::Input| {
                                        manager.text.set(textarea.value());
                                    }))
                                })
                            }),
                        ])
                    }),
                    html!("div", {
                        .class("form-grid")
                        .style("margin-top", "15px")
                        .children(MediaKind::ALL.map(|kind| Self::render_slot(quotes.clone(), kind)))
                    }),
                    html!("button", {
                        .attr("type", "submit")
                        .class("primary")
                        .style("margin-top", "20px")
                        .attr_signal("disabled", quotes.saving.is_loading().map(|loading| loading.then_some("")))
                        .event_with_options(&EventOptions::preventable(), clone!(quotes, form => move |e: events::Click| {
                            e.prevent_default();
                            if form.report_validity() {
                                Self::save_quote(quotes.clone());
                            }
                        }))
                        .children(&mut [
                            icons::plus(18),
                            html!("span", {
                                .text("Upload Multi-Media Quote")
                            }),
                        ])
                    }),
                ])
            })
        })
    }

    fn render_card(quotes: Rc<Self>, quote: Quote) -> Dom {
        let mut badges = vec![];
        if quote.text().is_some() {
            badges.push(icons::file_text(14));
        }
        badges.extend(quote.media_kinds().into_iter().map(|kind| media_icon(kind, 14)));
        badges.push(html!("span", { .text("MULTI-MEDIA QUOTE") }));

        let mut body = vec![
            html!("div", {
                .style("display", "flex")
                .style("justify-content", "space-between")
                .style("margin-bottom", "10px")
                .children(&mut [
                    html!("span", {
                        .style("display", "flex")
                        .style("align-items", "center")
                        .style("gap", "5px")
                        .style("font-size", "12px")
                        .style("color", "#666")
                        .children(badges)
                    }),
                    html!("button", {
                        .class("icon-button")
                        .style("color", "#dc3545")
                        .event(clone!(quotes, quote => move |_: events::Click| {
                            Self::delete_quote(quotes.clone(), quote.id.clone());
                        }))
                        .children(&mut [icons::trash(16)])
                    }),
                ])
            }),
        ];

        if let Some(text) = quote.text() {
            body.push(html!("p", {
                .style("font-size", "1.1rem")
                .style("margin", "10px 0")
                .text(&format!("\"{text}\""))
            }));
        }
        if let Some(url) = quote.media(MediaKind::Image) {
            body.push(html!("img", {
                .attr("src", url)
                .attr("alt", "Quote")
                .style("width", "100%")
                .style("height", "200px")
                .style("object-fit", "cover")
                .style("border-radius", "4px")
                .style("margin", "10px 0")
            }));
        }
        if let Some(url) = quote.media(MediaKind::Video) {
            body.push(html!("video", {
                .attr("src", url)
                .attr("controls", "")
                .style("width", "100%")
                .style("height", "200px")
                .style("background-color", "#000")
                .style("border-radius", "4px")
                .style("margin", "10px 0")
            }));
        }
        if let Some(url) = quote.media(MediaKind::Audio) {
            body.push(html!("audio", {
                .attr("src", url)
                .attr("controls", "")
                .style("width", "100%")
                .style("margin-top", "10px")
            }));
        }
        body.push(html!("p", {
            .style("font-weight", "bold")
            .style("margin", "5px 0")
            .text(&format!("- {}", quote.author))
        }));
        body.push(html!("span", {
            .class("badge")
            .text(quote.category_name())
        }));

        html!("div", {
            .class("quote-card")
            .children(&mut [
                html!("div", {
                    .style("padding", "15px")
                    .children(body)
                })
            ])
        })
    }

    pub fn render(quotes: Rc<Self>) -> Dom {
        Self::fetch_all(quotes.clone());

        html!("div", {
            .children(&mut [
                html!("h2", {
                    .text("Manage Quotes")
                }),
                Self::render_form(quotes.clone()),
                html!("div", {
                    .class("quote-grid")
                    .children_signal_vec(quotes.manager.quotes.signal_vec_cloned().map(clone!(quotes => move |quote| {
                        Self::render_card(quotes.clone(), quote)
                    })))
                }),
            ])
        })
    }
}
