use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::modules::jobs::domain::entities::{ingest, Job};
use crate::modules::jobs::domain::query;
use crate::modules::jobs::domain::repository::{JobCache, JobSource};
use crate::modules::jobs::domain::value_objects::{
    BoardView, CategoryFilter, JobQuery, SortOrder, VisibleJobs,
};
use crate::modules::jobs::infrastructure::seed::seed_jobs;
use crate::modules::settings::{Theme, ThemeStore};
use crate::shared::errors::AppError;

/// Inline message shown when a fetch fails with no fallback data at all
pub const LOAD_FAILED_MESSAGE: &str = "Gagal memuat data";

/// Where the canonical set came from on the last load.
///
/// Callers branch exhaustively instead of relying on error flow; only
/// `Unavailable` leaves the board without data.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// Fresh network data, written to the cache
    Fetched(Vec<Job>),
    /// TTL-valid cache entry, no network call issued
    CacheHit(Vec<Job>),
    /// Network failed; an expired cache entry was reused
    StaleCache(Vec<Job>),
    /// Network failed with no cache entry; built-in seed set
    Seeded(Vec<Job>),
    /// Network failed and no fallback was configured
    Unavailable(AppError),
    /// A fetch was already in flight; this request was ignored
    SkippedInFlight,
}

#[derive(Debug, Clone, PartialEq)]
enum BoardPhase {
    Loading,
    Ready,
    Failed(String),
}

struct BoardState {
    canonical: Vec<Job>,
    query: JobQuery,
    phase: BoardPhase,
    theme: Theme,
}

/// Application service owning the job board state
///
/// Holds the canonical set (replaced wholesale by the fetch pipeline,
/// never mutated in place) and the live query. The visible subset is a
/// pure function of both, recomputed on demand by `board_view`.
///
/// All methods take `&self`; interior state sits behind a `RwLock`. The
/// fetch pipeline is the only suspension point, and a try-lock guard
/// keeps at most one fetch in flight: a refresh arriving while one is
/// pending is ignored rather than queued.
pub struct JobBoardService {
    source: Arc<dyn JobSource>,
    cache: Arc<dyn JobCache>,
    themes: ThemeStore,
    seed_on_failure: bool,
    state: RwLock<BoardState>,
    fetch_guard: Mutex<()>,
}

impl JobBoardService {
    pub fn new(
        source: Arc<dyn JobSource>,
        cache: Arc<dyn JobCache>,
        themes: ThemeStore,
        default_theme: Theme,
        seed_on_failure: bool,
    ) -> Self {
        let theme = themes.load(default_theme);

        Self {
            source,
            cache,
            themes,
            seed_on_failure,
            state: RwLock::new(BoardState {
                canonical: Vec::new(),
                query: JobQuery::default(),
                phase: BoardPhase::Loading,
                theme,
            }),
            fetch_guard: Mutex::new(()),
        }
    }

    /// Startup load: a TTL-valid cache entry short-circuits the network.
    /// Within the TTL window repeated visits incur zero network cost.
    pub async fn load(&self) -> LoadOutcome {
        self.run_guarded(false).await
    }

    /// Forced refresh: always goes to the network, falling back per the
    /// usual chain on failure.
    pub async fn refresh(&self) -> LoadOutcome {
        self.run_guarded(true).await
    }

    async fn run_guarded(&self, force: bool) -> LoadOutcome {
        let Ok(_guard) = self.fetch_guard.try_lock() else {
            debug!("Fetch already in flight, ignoring request");
            return LoadOutcome::SkippedInFlight;
        };

        self.run_pipeline(force).await
    }

    async fn run_pipeline(&self, force: bool) -> LoadOutcome {
        if !force {
            if let Some(jobs) = self.cache.read().await {
                info!("Using cached canonical set ({} records)", jobs.len());
                self.apply_canonical(jobs.clone()).await;
                return LoadOutcome::CacheHit(jobs);
            }
        }

        match self.source.fetch_jobs().await {
            Ok(rows) => {
                let jobs = ingest(rows);
                info!("Fetched canonical set ({} active records)", jobs.len());

                // Only genuine network data enters the cache
                if let Err(e) = self.cache.write(&jobs).await {
                    warn!("Failed to cache fetched jobs: {}", e);
                }

                self.apply_canonical(jobs.clone()).await;
                LoadOutcome::Fetched(jobs)
            }
            Err(error) => {
                warn!("Fetch failed: {}", error);

                // Stale cache beats the seed set: it is real data, just old
                if let Some(jobs) = self.cache.read_stale().await {
                    info!("Falling back to stale cache ({} records)", jobs.len());
                    self.apply_canonical(jobs.clone()).await;
                    return LoadOutcome::StaleCache(jobs);
                }

                if self.seed_on_failure {
                    let jobs = seed_jobs();
                    info!("Falling back to seed set ({} records)", jobs.len());
                    self.apply_canonical(jobs.clone()).await;
                    return LoadOutcome::Seeded(jobs);
                }

                self.apply_failure().await;
                LoadOutcome::Unavailable(error)
            }
        }
    }

    async fn apply_canonical(&self, jobs: Vec<Job>) {
        let mut state = self.state.write().await;
        state.canonical = jobs;
        state.phase = BoardPhase::Ready;
    }

    async fn apply_failure(&self) {
        let mut state = self.state.write().await;
        state.phase = BoardPhase::Failed(LOAD_FAILED_MESSAGE.to_string());
    }

    /// Sets the live search term. The boundary is expected to debounce
    /// keystrokes; this always applies the latest term immediately.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        let mut state = self.state.write().await;
        state.query.search_term = term.into();
    }

    /// Sets the category filter from its wire form (`"all"` clears it)
    pub async fn set_category(&self, category: &str) {
        let mut state = self.state.write().await;
        state.query.category = CategoryFilter::parse(category);
    }

    /// Flips the pay sort order and returns the new one
    pub async fn toggle_sort(&self) -> SortOrder {
        let mut state = self.state.write().await;
        state.query.sort = state.query.sort.toggled();
        state.query.sort
    }

    /// Flips the theme, persists it and returns the new one.
    /// Persistence failures are logged, not surfaced; the in-memory
    /// preference still changes.
    pub async fn toggle_theme(&self) -> Theme {
        let mut state = self.state.write().await;
        state.theme = state.theme.toggled();

        if let Err(e) = self.themes.save(state.theme) {
            warn!("Failed to persist theme preference: {}", e);
        }

        state.theme
    }

    pub async fn current_theme(&self) -> Theme {
        self.state.read().await.theme
    }

    pub async fn current_query(&self) -> JobQuery {
        self.state.read().await.query.clone()
    }

    /// The single artifact a presentation adapter renders from
    pub async fn board_view(&self) -> BoardView {
        let state = self.state.read().await;

        match &state.phase {
            BoardPhase::Loading => BoardView::Loading,
            BoardPhase::Failed(message) => BoardView::Failed {
                message: message.clone(),
            },
            BoardPhase::Ready => match query::visible_jobs(&state.canonical, &state.query) {
                VisibleJobs::Matches(jobs) => BoardView::Jobs(jobs),
                VisibleJobs::NoMatches => BoardView::NoMatches,
            },
        }
    }

    /// Detail lookup by the record's stable id
    pub async fn job_by_id(&self, id: &str) -> Option<Job> {
        let state = self.state.read().await;
        state.canonical.iter().find(|job| job.id == id).cloned()
    }

    /// Distinct category tags of the canonical set, for filter dropdowns
    pub async fn categories(&self) -> Vec<String> {
        let state = self.state.read().await;
        query::categories(&state.canonical)
    }
}
