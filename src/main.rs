//! Reference terminal presentation adapter.
//!
//! Wires the core together, loads the board and renders it once. Markup,
//! event binding and debouncing belong to richer adapters; this one just
//! proves the boundary contract.

use std::sync::Arc;

use log::info;

use loker::modules::jobs::application::LoadOutcome;
use loker::modules::jobs::domain::value_objects::BoardView;
use loker::modules::jobs::infrastructure::{FileJobCache, HttpJobSource};
use loker::modules::jobs::JobBoardService;
use loker::modules::settings::{Theme, ThemeStore};
use loker::shared::config::AppConfig;
use loker::shared::utils::{format_rupiah, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;

    let source = Arc::new(HttpJobSource::new(&config)?);
    let cache = Arc::new(FileJobCache::new(&config.cache_dir, config.cache_ttl));
    let themes = ThemeStore::new(&config.cache_dir);

    let service = JobBoardService::new(
        source,
        cache,
        themes,
        default_theme(),
        config.seed_on_failure,
    );

    let outcome = service.load().await;
    match &outcome {
        LoadOutcome::Fetched(jobs) => info!("Loaded {} jobs from the network", jobs.len()),
        LoadOutcome::CacheHit(jobs) => info!("Loaded {} jobs from cache", jobs.len()),
        LoadOutcome::StaleCache(jobs) => info!("Network down, showing {} stale jobs", jobs.len()),
        LoadOutcome::Seeded(jobs) => info!("Network down, showing {} seed jobs", jobs.len()),
        LoadOutcome::Unavailable(e) => info!("No data available: {}", e),
        LoadOutcome::SkippedInFlight => {}
    }

    // Optional search term as the first argument
    if let Some(term) = std::env::args().nth(1) {
        service.set_search_term(term).await;
    }

    println!("Tema: {}\n", service.current_theme().await);

    match service.board_view().await {
        BoardView::Loading => println!("Memuat..."),
        BoardView::Failed { message } => println!("{}", message),
        BoardView::NoMatches => println!("Tidak ada lowongan yang cocok"),
        BoardView::Jobs(jobs) => {
            for job in jobs {
                let badge = if job.verified { " [Terverifikasi]" } else { "" };
                println!("{}{}", job.title, badge);
                println!("  Bayaran: Rp{}", format_rupiah(job.pay));
                println!("  Kategori: {}", job.category);
                if !job.link.is_empty() {
                    println!("  Link: {}", job.link);
                }
                println!();
            }
        }
    }

    Ok(())
}

/// The environment-preferred color scheme; overridable for terminals that
/// cannot report one
fn default_theme() -> Theme {
    std::env::var("LOKER_DEFAULT_THEME")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}
