use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;
use walkdir::WalkDir;

use stockmeta::application::ports::CredentialStore;
use stockmeta::application::services::{AssetCatalog, BatchOrchestrator, KeyRotation};
use stockmeta::application::{ActivityLog, ConfigHandle};
use stockmeta::domain::{
    mime_for_extension, CredentialSet, GenerationConfig, GenerationMode, Platform, SourceFile,
};
use stockmeta::infrastructure::encoding::PayloadEncoder;
use stockmeta::infrastructure::export::export_archive;
use stockmeta::infrastructure::llm::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use stockmeta::infrastructure::observability::{init_tracing, TracingConfig};
use stockmeta::infrastructure::persistence::CredentialFileStore;
use stockmeta::infrastructure::preview::render_thumbnail;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg", "ai", "eps"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default());

    let mut args = std::env::args().skip(1);
    let input_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let output_path =
        PathBuf::from(args.next().unwrap_or_else(|| "stockmeta_export.zip".to_string()));

    let config = ConfigHandle::new(config_from_env());
    let credentials = load_credentials().await?;
    if credentials.is_empty() {
        anyhow::bail!(
            "no credentials configured; set STOCKMETA_API_KEYS or save credentials to the settings file"
        );
    }

    let mut catalog = AssetCatalog::new();
    for entry in WalkDir::new(&input_dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !SUPPORTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
            tracing::debug!(path = %path.display(), "Skipping unsupported file");
            continue;
        }

        let data = tokio::fs::read(path).await?;
        let preview = render_thumbnail(&data);
        let file_name = entry.file_name().to_string_lossy().to_string();
        let mime = mime_for_extension(extension).to_string();
        catalog.add(SourceFile::new(file_name, mime, Bytes::from(data)), preview);
    }

    if catalog.is_empty() {
        anyhow::bail!("no supported files found in {}", input_dir.display());
    }
    tracing::info!(count = catalog.len(), dir = %input_dir.display(), "Files loaded");

    let catalog = Arc::new(Mutex::new(catalog));

    let base_url =
        std::env::var("STOCKMETA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let model = std::env::var("STOCKMETA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

    let activity = ActivityLog::new();
    let generator = Arc::new(GeminiClient::new(&base_url, &model));
    let rotation = KeyRotation::new(generator, activity.clone());
    let orchestrator = Arc::new(BatchOrchestrator::new(
        Arc::new(PayloadEncoder::new()),
        rotation,
        activity.clone(),
    ));

    {
        let orchestrator = Arc::clone(&orchestrator);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Stop requested; the in-flight item will finish first");
                orchestrator.stop();
            }
        });
    }

    let outcome = orchestrator.run(&catalog, &credentials, &config).await?;
    tracing::info!(
        success = outcome.success_count,
        failed = outcome.failed_count,
        stopped = outcome.stopped,
        "Batch complete"
    );

    let guard = catalog.lock().await;
    let archive = export_archive(guard.assets(), config.current().platform)?;
    tokio::fs::write(&output_path, archive).await?;
    tracing::info!(path = %output_path.display(), "Export written");

    Ok(())
}

async fn load_credentials() -> anyhow::Result<CredentialSet> {
    if let Ok(raw) = std::env::var("STOCKMETA_API_KEYS") {
        return Ok(CredentialSet::from_values(raw.split(',')));
    }

    let path = CredentialFileStore::default_path()
        .ok_or_else(|| anyhow::anyhow!("no user config directory available"))?;
    Ok(CredentialFileStore::new(path).load().await?)
}

fn config_from_env() -> GenerationConfig {
    let mut config = GenerationConfig::default();

    if let Some(platform) = env_parsed::<Platform>("STOCKMETA_PLATFORM") {
        config.platform = platform;
    }
    if let Some(mode) = env_parsed::<GenerationMode>("STOCKMETA_MODE") {
        config.mode = mode;
    }
    if let Some(n) = env_parsed::<usize>("STOCKMETA_TITLE_LENGTH") {
        config.title_length = n;
    }
    if let Some(n) = env_parsed::<usize>("STOCKMETA_KEYWORDS_COUNT") {
        config.keywords_count = n;
    }
    if let Some(n) = env_parsed::<usize>("STOCKMETA_DESCRIPTION_LENGTH") {
        config.description_length = n;
    }
    if let Ok(v) = std::env::var("STOCKMETA_KEEP_DUP_KEYWORDS") {
        config.auto_remove_dup_keywords = v != "1";
    }
    if let Ok(v) = std::env::var("STOCKMETA_BULK_KEYWORDS") {
        config.bulk_keyword_enabled = !v.trim().is_empty();
        config.bulk_keyword_text = v;
    }
    if let Ok(v) = std::env::var("STOCKMETA_TITLE_PREFIX") {
        config.prefix_enabled = !v.trim().is_empty();
        config.prefix_text = v;
    }
    if let Ok(v) = std::env::var("STOCKMETA_TITLE_SUFFIX") {
        config.suffix_enabled = !v.trim().is_empty();
        config.suffix_text = v;
    }

    config.clamped()
}

fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
