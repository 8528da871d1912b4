use std::rc::Rc;

use futures_signals::{signal::Mutable, signal_vec::MutableVec};

use crate::{
    api::{Api, paths},
    dialog::{CONFIRM_DELETE, Dialog},
    error::{Error, Result},
    model::{Category, CategoryInput, categories_from},
};

/// State behind the category page: the fetched list and a single form that
/// either creates a category or, while `editing` holds an id, updates it.
pub struct CategoryManager {
    pub categories: MutableVec<Category>,
    pub name: Mutable<String>,
    pub icon: Mutable<String>,
    pub editing: Mutable<Option<String>>,
    api: Rc<dyn Api>,
    dialog: Rc<dyn Dialog>,
}

impl CategoryManager {
    pub fn new(api: Rc<dyn Api>, dialog: Rc<dyn Dialog>) -> Rc<Self> {
        Rc::new(Self {
            categories: MutableVec::new(),
            name: Mutable::new("".to_string()),
            icon: Mutable::new("".to_string()),
            editing: Mutable::new(None),
            api,
            dialog,
        })
    }

    pub async fn load(&self) -> Result<()> {
        let res = self.api.get(&paths::categories()).await?;
        self.categories
            .lock_mut()
            .replace_cloned(categories_from(res));
        Ok(())
    }

    fn input(&self) -> Result<CategoryInput> {
        let name = self.name.get_cloned();
        let icon = self.icon.get_cloned();
        if name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if icon.trim().is_empty() {
            return Err(Error::MissingField("icon"));
        }

        Ok(CategoryInput { name, icon })
    }

    pub async fn submit(&self) -> Result<()> {
        let body = serde_json::to_value(self.input()?)?;
        match self.editing.get_cloned() {
            Some(id) => {
                self.api.put(&paths::category(&id), &body).await?;
            }
            None => {
                self.api.post(&paths::categories(), &body).await?;
            }
        }

        self.reset_form();
        if let Err(e) = self.load().await {
            warn!("category saved, but reloading categories failed: {e}");
        }
        Ok(())
    }

    pub fn begin_edit(&self, category: &Category) {
        self.name.set(category.name.clone());
        self.icon.set(category.icon.clone());
        self.editing.set(Some(category.id.clone()));
    }

    pub fn cancel_edit(&self) {
        self.reset_form();
    }

    fn reset_form(&self) {
        self.name.set("".to_string());
        self.icon.set("".to_string());
        self.editing.set(None);
    }

    /// Returns `false` when the user declined the confirmation.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        if !self.dialog.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        self.api.delete(&paths::category(id)).await?;
        self.load().await?;
        Ok(true)
    }
}
