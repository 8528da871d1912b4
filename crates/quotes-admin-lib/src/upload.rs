use serde::Serialize;

use crate::config::UploadConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Image, MediaKind::Video, MediaKind::Audio];

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
        }
    }

    pub fn constraints(&self) -> UploadConstraints {
        let (resource_type, formats): (&str, &[&str]) = match self {
            MediaKind::Image => ("image", &["png", "jpg", "jpeg"]),
            MediaKind::Video => ("video", &["mp4", "mov"]),
            // audio has no dedicated resource type on the upload service
            MediaKind::Audio => ("auto", &["mp3", "wav", "m4a"]),
        };

        UploadConstraints {
            resource_type: resource_type.to_string(),
            allowed_formats: formats.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConstraints {
    pub resource_type: String,
    #[serde(rename = "clientAllowedFormats")]
    pub allowed_formats: Vec<String>,
}

/// Options handed to the upload widget, serialized with the widget's own
/// option names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub cloud_name: String,
    pub upload_preset: String,
    pub sources: Vec<String>,
    pub multiple: bool,
    #[serde(flatten)]
    pub constraints: UploadConstraints,
}

impl UploadRequest {
    pub fn new(config: &UploadConfig, kind: MediaKind) -> Self {
        Self {
            cloud_name: config.cloud_name.clone(),
            upload_preset: config.upload_preset.clone(),
            sources: config.sources.clone(),
            multiple: false,
            constraints: kind.constraints(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success { secure_url: String },
    Failed(String),
}

pub type UploadCallback = Box<dyn FnMut(UploadOutcome)>;

/// External media acquisition. The uploader owns progress, retries and
/// cancellation, and reports each terminal outcome through `on_outcome`.
pub trait MediaUploader {
    fn open(&self, request: UploadRequest, on_outcome: UploadCallback);
}
