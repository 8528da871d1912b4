use std::rc::Rc;

use dominator::{Dom, clone, html};
use futures_signals::signal::SignalExt;
use quotes_admin_lib::{api::HttpApi, config::Config};

use crate::{
    categories::Categories,
    common::{Navbar, Route},
    dashboard::Dashboard,
    quotes::Quotes,
    uploader::CloudinaryUploader,
    utils::BrowserDialog,
};

/// Application shell. Holds the stateless services every page is built
/// with; each page owns its own state and is rebuilt on navigation.
pub struct App {
    config: Config,
    api: Rc<HttpApi>,
    dialog: Rc<BrowserDialog>,
    uploader: Rc<CloudinaryUploader>,
}

impl App {
    pub fn new(config: Config) -> Rc<Self> {
        Rc::new(App {
            api: Rc::new(HttpApi::new(config.api_url.clone())),
            dialog: Rc::new(BrowserDialog),
            uploader: Rc::new(CloudinaryUploader::default()),
            config,
        })
    }

    fn render_page(app: &Rc<Self>, route: Route) -> Dom {
        match route {
            Route::Dashboard => Dashboard::render(Dashboard::new(app.api.clone())),
            Route::Categories => {
                Categories::render(Categories::new(app.api.clone(), app.dialog.clone()))
            }
            Route::Quotes => Quotes::render(Quotes::new(
                app.api.clone(),
                app.dialog.clone(),
                app.uploader.clone(),
                app.config.upload.clone(),
            )),
            Route::NotFound => html!("div", {
                .text("not found")
            }),
        }
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("app-container")
            .children(&mut [
                Navbar::render(),
                html!("main", {
                    .class("content")
                    .child_signal(Route::signal().map(clone!(app => move |route| {
                        info!("navigate to {:?}", route);
                        Some(Self::render_page(&app, route))
                    })))
                }),
            ])
        })
    }
}
