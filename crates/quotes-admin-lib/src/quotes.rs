use std::rc::Rc;

use futures_signals::{
    signal::{Mutable, Signal},
    signal_vec::MutableVec,
};

use crate::{
    api::{Api, paths},
    config::UploadConfig,
    dialog::{CONFIRM_DELETE, Dialog, EMPTY_CONTENT},
    error::{Error, Result},
    model::{Category, Quote, QuoteInput, categories_from, quotes_from},
    upload::{MediaKind, MediaUploader, UploadOutcome, UploadRequest},
};

/// One media field of the quote form: empty until an upload succeeds,
/// empty again after `clear`.
#[derive(Clone)]
pub struct MediaSlot {
    url: Mutable<Option<String>>,
}

impl MediaSlot {
    pub fn new() -> Self {
        Self {
            url: Mutable::new(None),
        }
    }

    pub fn set(&self, url: String) {
        self.url.set(Some(url));
    }

    pub fn clear(&self) {
        self.url.set(None);
    }

    pub fn url(&self) -> Option<String> {
        self.url.get_cloned()
    }

    pub fn signal(&self) -> impl Signal<Item = Option<String>> + use<> {
        self.url.signal_cloned()
    }
}

impl Default for MediaSlot {
    fn default() -> Self {
        Self::new()
    }
}

pub struct QuotesManager {
    pub quotes: MutableVec<Quote>,
    pub categories: MutableVec<Category>,
    pub text: Mutable<String>,
    pub author: Mutable<String>,
    pub category: Mutable<Option<String>>,
    pub image: MediaSlot,
    pub video: MediaSlot,
    pub audio: MediaSlot,
    upload_config: UploadConfig,
    api: Rc<dyn Api>,
    dialog: Rc<dyn Dialog>,
    uploader: Rc<dyn MediaUploader>,
}

impl QuotesManager {
    pub fn new(
        api: Rc<dyn Api>,
        dialog: Rc<dyn Dialog>,
        uploader: Rc<dyn MediaUploader>,
        upload_config: UploadConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            quotes: MutableVec::new(),
            categories: MutableVec::new(),
            text: Mutable::new("".to_string()),
            author: Mutable::new("".to_string()),
            category: Mutable::new(None),
            image: MediaSlot::new(),
            video: MediaSlot::new(),
            audio: MediaSlot::new(),
            upload_config,
            api,
            dialog,
            uploader,
        })
    }

    pub fn slot(&self, kind: MediaKind) -> &MediaSlot {
        match kind {
            MediaKind::Image => &self.image,
            MediaKind::Video => &self.video,
            MediaKind::Audio => &self.audio,
        }
    }

    pub async fn load_quotes(&self) -> Result<()> {
        let res = self.api.get(&paths::quotes()).await?;
        self.quotes.lock_mut().replace_cloned(quotes_from(res));
        Ok(())
    }

    pub async fn load_categories(&self) -> Result<()> {
        let res = self.api.get(&paths::categories()).await?;
        let categories = categories_from(res);
        if self.category.get_cloned().is_none() {
            if let Some(first) = categories.first() {
                self.category.set(Some(first.id.clone()));
            }
        }
        self.categories.lock_mut().replace_cloned(categories);
        Ok(())
    }

    /// Opens the uploader for `kind`; a successful upload fills the slot.
    pub fn acquire_media(&self, kind: MediaKind) {
        let slot = self.slot(kind).clone();
        let request = UploadRequest::new(&self.upload_config, kind);
        self.uploader.open(
            request,
            Box::new(move |outcome| match outcome {
                UploadOutcome::Success { secure_url } => {
                    info!("{} uploaded: {secure_url}", kind.label());
                    slot.set(secure_url);
                }
                UploadOutcome::Failed(reason) => {
                    warn!("{} upload failed: {reason}", kind.label());
                }
            }),
        );
    }

    pub fn remove_media(&self, kind: MediaKind) {
        self.slot(kind).clear();
    }

    fn input(&self) -> QuoteInput {
        QuoteInput {
            text: self.text.get_cloned(),
            author: self.author.get_cloned(),
            category: self.category.get_cloned().unwrap_or_default(),
            image_url: self.image.url().unwrap_or_default(),
            video_url: self.video.url().unwrap_or_default(),
            audio_url: self.audio.url().unwrap_or_default(),
        }
    }

    pub async fn submit(&self) -> Result<()> {
        let input = self.input();
        if input.author.trim().is_empty() {
            return Err(Error::MissingField("author"));
        }
        if !input.has_content() {
            self.dialog.alert(EMPTY_CONTENT);
            return Err(Error::EmptyContent);
        }

        self.api
            .post(&paths::quotes(), &serde_json::to_value(&input)?)
            .await?;

        // the category selection stays for the next quote
        self.text.set("".to_string());
        self.author.set("".to_string());
        for kind in MediaKind::ALL {
            self.slot(kind).clear();
        }

        if let Err(e) = self.load_quotes().await {
            warn!("quote saved, but reloading quotes failed: {e}");
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<bool> {
        if !self.dialog.confirm(CONFIRM_DELETE) {
            return Ok(false);
        }

        self.api.delete(&paths::quote(id)).await?;
        self.load_quotes().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{FakeApi, FakeUploader, ScriptedDialog};
    use serde_json::json;

    struct Fixture {
        api: Rc<FakeApi>,
        dialog: Rc<ScriptedDialog>,
        uploader: Rc<FakeUploader>,
        manager: Rc<QuotesManager>,
    }

    fn fixture(api: FakeApi) -> Fixture {
        let api = Rc::new(api);
        let dialog = Rc::new(ScriptedDialog::answering(true));
        let uploader = Rc::new(FakeUploader::default());
        let manager = QuotesManager::new(
            api.clone(),
            dialog.clone(),
            uploader.clone(),
            UploadConfig::default(),
        );

        Fixture {
            api,
            dialog,
            uploader,
            manager,
        }
    }

    fn motivation() -> FakeApi {
        FakeApi::new().with_category("c1", "Motivation", "fire")
    }

    #[test]
    fn test_media_slot_starts_empty() {
        let slot = MediaSlot::default();
        assert_eq!(slot.url(), None);

        slot.set("https://res.cloudinary.com/demo/a.png".to_string());
        slot.clear();
        assert_eq!(slot.url(), None);
    }

    #[tokio::test]
    async fn test_first_category_selected() {
        let f = fixture(motivation().with_category("c2", "Love", "heart"));
        f.manager.load_categories().await.unwrap();

        assert_eq!(f.manager.category.get_cloned(), Some("c1".to_string()));
    }

    #[tokio::test]
    async fn test_chosen_category_kept_on_reload() {
        let f = fixture(motivation().with_category("c2", "Love", "heart"));
        f.manager.category.set(Some("c2".to_string()));
        f.manager.load_categories().await.unwrap();

        assert_eq!(f.manager.category.get_cloned(), Some("c2".to_string()));
        assert_eq!(f.manager.categories.lock_ref().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_content_rejected_locally() {
        let f = fixture(motivation());
        f.manager.load_categories().await.unwrap();
        f.api.clear_calls();

        f.manager.author.set("Seneca".to_string());
        assert!(matches!(f.manager.submit().await, Err(Error::EmptyContent)));

        assert!(f.api.calls().is_empty());
        assert_eq!(f.dialog.alerts(), vec![EMPTY_CONTENT.to_string()]);
    }

    #[tokio::test]
    async fn test_text_only_submit() {
        let f = fixture(motivation());
        f.manager.load_categories().await.unwrap();
        f.api.clear_calls();

        f.manager.author.set("Seneca".to_string());
        f.manager.text.set("Luck is what happens when preparation meets opportunity".to_string());
        f.manager.submit().await.unwrap();

        let writes = f.api.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].path, "/quotes");
        assert_eq!(
            writes[0].body,
            Some(json!({
                "text": "Luck is what happens when preparation meets opportunity",
                "author": "Seneca",
                "category": "c1",
                "imageUrl": "",
                "videoUrl": "",
                "audioUrl": ""
            }))
        );

        assert_eq!(f.manager.text.get_cloned(), "");
        assert_eq!(f.manager.author.get_cloned(), "");
        assert_eq!(f.manager.category.get_cloned(), Some("c1".to_string()));

        let quotes = f.manager.quotes.lock_ref();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].category_name(), "Motivation");
    }

    #[tokio::test]
    async fn test_missing_author_not_sent() {
        let f = fixture(motivation());
        f.manager.text.set("hello".to_string());

        assert!(matches!(f.manager.submit().await, Err(Error::MissingField("author"))));
        assert!(f.api.calls().is_empty());
        assert!(f.dialog.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_upload_success_fills_slot() {
        let f = fixture(motivation());
        f.uploader.push(UploadOutcome::Success {
            secure_url: "https://res.cloudinary.com/demo/video/upload/v1/clip.mp4".to_string(),
        });

        f.manager.acquire_media(MediaKind::Video);

        assert_eq!(
            f.manager.video.url().as_deref(),
            Some("https://res.cloudinary.com/demo/video/upload/v1/clip.mp4")
        );
        assert_eq!(f.manager.image.url(), None);
        let requests = f.uploader.requests();
        assert_eq!(requests[0].constraints.resource_type, "video");
        assert_eq!(requests[0].constraints.allowed_formats, vec!["mp4", "mov"]);
    }

    #[tokio::test]
    async fn test_upload_failure_leaves_slot_empty() {
        let f = fixture(motivation());
        f.uploader.push(UploadOutcome::Failed("file too large".to_string()));

        f.manager.acquire_media(MediaKind::Audio);

        assert_eq!(f.manager.audio.url(), None);
        assert_eq!(f.uploader.requests()[0].constraints.resource_type, "auto");
    }

    #[tokio::test]
    async fn test_media_only_submit() {
        let f = fixture(motivation());
        f.manager.load_categories().await.unwrap();
        f.uploader.push(UploadOutcome::Success {
            secure_url: "https://res.cloudinary.com/demo/a.mp3".to_string(),
        });
        f.manager.acquire_media(MediaKind::Audio);
        f.manager.author.set("Anon".to_string());
        f.manager.submit().await.unwrap();

        assert_eq!(
            f.api.writes()[0].body.as_ref().unwrap()["audioUrl"],
            "https://res.cloudinary.com/demo/a.mp3"
        );
        assert_eq!(f.manager.audio.url(), None);
        assert_eq!(f.manager.quotes.lock_ref()[0].media_kinds(), vec![MediaKind::Audio]);
    }

    #[tokio::test]
    async fn test_removed_image_not_submitted() {
        let f = fixture(motivation());
        f.manager.load_categories().await.unwrap();
        f.uploader.push(UploadOutcome::Success {
            secure_url: "https://res.cloudinary.com/demo/a.png".to_string(),
        });
        f.manager.acquire_media(MediaKind::Image);
        f.manager.remove_media(MediaKind::Image);
        assert_eq!(f.manager.image.url(), None);

        f.manager.author.set("Anon".to_string());
        f.manager.text.set("words".to_string());
        f.manager.submit().await.unwrap();

        assert_eq!(f.api.writes()[0].body.as_ref().unwrap()["imageUrl"], "");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let f = fixture(motivation());
        f.api.fail("/quotes");
        f.manager.author.set("Anon".to_string());
        f.manager.text.set("words".to_string());

        assert!(f.manager.submit().await.is_err());
        assert_eq!(f.manager.text.get_cloned(), "words");
        assert_eq!(f.manager.author.get_cloned(), "Anon");
    }

    #[tokio::test]
    async fn test_quotes_field_not_a_list() {
        let f = fixture(motivation().with_quote("q1", "hello", "c1"));
        f.manager.load_quotes().await.unwrap();
        assert_eq!(f.manager.quotes.lock_ref().len(), 1);

        f.api.respond_with("/quotes", json!({"quotes": null}));
        f.manager.load_quotes().await.unwrap();
        assert!(f.manager.quotes.lock_ref().is_empty());
    }

    #[tokio::test]
    async fn test_unpopulated_category_still_listed() {
        let f = fixture(motivation());
        f.api.respond_with(
            "/quotes",
            json!({"quotes": [
                {"_id": "q1", "author": "A", "category": {"_id": "c1", "name": "Motivation"}},
                {"_id": "q2", "author": "B", "category": "c1"},
                {"_id": "q3", "author": null, "category": {"_id": "c1", "name": null}},
            ]}),
        );
        f.manager.load_quotes().await.unwrap();

        let quotes = f.manager.quotes.lock_ref();
        let ids: Vec<&str> = quotes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3"]);
        assert_eq!(quotes[0].category_name(), "Motivation");
        assert_eq!(quotes[1].category_name(), "");
    }

    #[tokio::test]
    async fn test_saved_despite_failed_reload() {
        let f = fixture(motivation());
        f.manager.load_categories().await.unwrap();
        f.api.fail_reads("/quotes");
        f.manager.author.set("Anon".to_string());
        f.manager.text.set("words".to_string());

        f.manager.submit().await.unwrap();

        assert_eq!(f.api.writes().len(), 1);
        assert_eq!(f.manager.text.get_cloned(), "");
        assert_eq!(f.manager.author.get_cloned(), "");
        assert!(f.manager.quotes.lock_ref().is_empty());

        f.api.recover("/quotes");
        f.manager.load_quotes().await.unwrap();
        assert_eq!(f.manager.quotes.lock_ref().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_confirmed_and_declined() {
        let f = fixture(motivation().with_quote("q1", "hello", "c1"));
        f.manager.load_quotes().await.unwrap();

        f.dialog.set_answer(false);
        assert!(!f.manager.delete("q1").await.unwrap());
        assert!(f.api.writes().is_empty());

        f.dialog.set_answer(true);
        assert!(f.manager.delete("q1").await.unwrap());
        assert!(f.manager.quotes.lock_ref().is_empty());
    }
}
