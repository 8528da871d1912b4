use std::cell::RefCell;

use anyhow::anyhow;
use quotes_admin_lib::upload::{MediaUploader, UploadCallback, UploadOutcome, UploadRequest};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type UploadWidget;

    #[wasm_bindgen(catch, js_namespace = cloudinary, js_name = createUploadWidget)]
    fn create_upload_widget(
        options: &JsValue,
        callback: &Closure<dyn FnMut(JsValue, JsValue)>,
    ) -> Result<UploadWidget, JsValue>;

    #[wasm_bindgen(method)]
    fn open(this: &UploadWidget);
}

type WidgetCallback = Closure<dyn FnMut(JsValue, JsValue)>;

fn get_string(target: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn outcome(error: JsValue, result: JsValue) -> Option<UploadOutcome> {
    if !error.is_null() && !error.is_undefined() {
        let reason = get_string(&error, "message")
            .or_else(|| error.as_string())
            .unwrap_or_else(|| format!("{:?}", error));
        return Some(UploadOutcome::Failed(reason));
    }

    if get_string(&result, "event").as_deref() != Some("success") {
        return None;
    }

    let info = js_sys::Reflect::get(&result, &JsValue::from_str("info")).ok()?;
    match get_string(&info, "secure_url") {
        Some(secure_url) => Some(UploadOutcome::Success { secure_url }),
        None => Some(UploadOutcome::Failed("upload reported no secure_url".to_string())),
    }
}

/// Cloudinary upload widget loaded by the host page as `window.cloudinary`.
#[derive(Default)]
pub struct CloudinaryUploader {
    // callback of the last opened widget, replaced on each open
    callback: RefCell<Option<WidgetCallback>>,
}

impl CloudinaryUploader {
    fn try_open(&self, request: &UploadRequest, mut on_outcome: UploadCallback) -> Result<(), anyhow::Error> {
        let options = js_sys::JSON::parse(&serde_json::to_string(request)?)
            .map_err(|e| anyhow!("error building widget options: {:?}", e))?;

        let callback = Closure::wrap(Box::new(move |error: JsValue, result: JsValue| {
            if let Some(outcome) = outcome(error, result) {
                on_outcome(outcome);
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        let widget = create_upload_widget(&options, &callback)
            .map_err(|e| anyhow!("upload widget unavailable: {:?}", e))?;
        widget.open();

        self.callback.replace(Some(callback));
        Ok(())
    }
}

impl MediaUploader for CloudinaryUploader {
    fn open(&self, request: UploadRequest, on_outcome: UploadCallback) {
        if let Err(e) = self.try_open(&request, on_outcome) {
            error!("{e}");
        }
    }
}
