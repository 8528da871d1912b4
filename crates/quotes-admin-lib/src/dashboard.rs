use std::rc::Rc;

use futures_signals::signal::Mutable;

use crate::{
    api::{Api, paths},
    error::Result,
    model::{categories_from, quotes_from},
};

pub struct DashboardStats {
    pub quotes: Mutable<usize>,
    pub categories: Mutable<usize>,
    api: Rc<dyn Api>,
}

impl DashboardStats {
    pub fn new(api: Rc<dyn Api>) -> Rc<Self> {
        Rc::new(Self {
            quotes: Mutable::new(0),
            categories: Mutable::new(0),
            api,
        })
    }

    /// Fetches both collections concurrently. Counts only change when both
    /// requests succeed.
    pub async fn load(&self) -> Result<()> {
        let quotes_path = paths::quotes();
        let categories_path = paths::categories();
        let (quotes, categories) = futures::try_join!(
            self.api.get(&quotes_path),
            self.api.get(&categories_path)
        )?;

        self.quotes.set(quotes_from(quotes).len());
        self.categories.set(categories_from(categories).len());
        Ok(())
    }
}
