use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            cloud_name: default_cloud_name(),
            upload_preset: default_upload_preset(),
            sources: default_sources(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub upload: UploadConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            upload: UploadConfig::default(),
        }
    }
}

fn default_api_url() -> String {
    "/api".to_string()
}

fn default_cloud_name() -> String {
    "dnumjy38k".to_string()
}

fn default_upload_preset() -> String {
    "q8cifouw".to_string()
}

fn default_sources() -> Vec<String> {
    ["local", "url", "camera", "google_drive"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Config {
    /// Parses an override document; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
