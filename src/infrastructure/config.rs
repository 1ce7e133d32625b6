use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upload_folder: PathBuf,
    pub pdf_folder: PathBuf,
    pub cors_allowed_origins: Vec<String>,
    /// Request body cap for admin uploads
    pub max_upload_bytes: usize,
    pub gemini: GeminiConfig,
}

/// Settings for the hosted generative model
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

        let upload_folder = env::var("UPLOAD_FOLDER")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("uploads"));
        let pdf_folder = env::var("PDF_FOLDER")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("pdfs"));

        let base_url = env::var("GEMINI_BASE_URL")
            .ok()
            .and_then(|raw| match url::Url::parse(&raw) {
                Ok(_) => Some(raw.trim_end_matches('/').to_string()),
                Err(e) => {
                    tracing::warn!("Ignoring invalid GEMINI_BASE_URL '{}': {}", raw, e);
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://manuscripts.db?mode=rwc".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            static_dir,
            upload_folder,
            pdf_folder,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            max_upload_bytes: env::var("MAX_UPLOAD_MB")
                .ok()
                .and_then(|mb| mb.parse::<usize>().ok())
                .and_then(|mb| mb.checked_mul(1024 * 1024))
                .unwrap_or(64 * 1024 * 1024),
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into()),
                base_url,
                timeout: env::var("GEMINI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(Duration::from_secs(30)),
            },
        }
    }
}
