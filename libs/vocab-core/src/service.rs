//! UI-facing facade wiring the catalog, the stores, and the scheduler.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::mastery::{self, LevelMastery};
use crate::progress::ProgressStore;
use crate::repository::KvRepository;
use crate::scheduler;
use crate::settings::SettingsStore;
use crate::stats::StatsTracker;
use crate::store::KeyValue;
use crate::types::{AppSettings, Noun, NounProgress, UserStats};

/// Result of recording one answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRecord {
    pub progress: NounProgress,
    pub stats: UserStats,
}

/// One catalog entry together with its progress, for listing views.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub noun: Noun,
    pub progress: Option<NounProgress>,
}

/// Single entry point for a UI: owns the immutable catalog, the persisted
/// stores, and the random source. All operations are synchronous; callers
/// holding one instance across threads must serialize access themselves.
pub struct ReviewService<S> {
    catalog: Vec<Noun>,
    repo: KvRepository<S>,
    rng: ChaCha8Rng,
}

impl<S: KeyValue> ReviewService<S> {
    /// Production wiring: entropy-seeded draws.
    pub fn new(catalog: Vec<Noun>, store: S) -> Self {
        Self {
            catalog,
            repo: KvRepository::new(store),
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic wiring for tests and reproduction.
    pub fn with_seed(catalog: Vec<Noun>, store: S, seed: u64) -> Self {
        Self {
            catalog,
            repo: KvRepository::new(store),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &[Noun] {
        &self.catalog
    }

    pub fn find_noun(&self, noun_id: &str) -> Option<&Noun> {
        self.catalog.iter().find(|noun| noun.id == noun_id)
    }

    /// Pick the next noun to show, avoiding `last_shown` where possible.
    pub fn next_noun(&mut self, last_shown: Option<&str>, now: DateTime<Utc>) -> Result<&Noun> {
        let progress = self.repo.progress_map();
        let settings = self.repo.settings();
        scheduler::select_next(
            &self.catalog,
            &progress,
            &settings,
            last_shown,
            now,
            &mut self.rng,
        )
        .ok_or(CoreError::EmptyCatalog)
    }

    /// Record one answer against both the per-noun record and the aggregate
    /// stats. Unknown ids are accepted: a record for a noun that later left
    /// the catalog is harmless, so the id is not checked here.
    pub fn submit_answer(
        &mut self,
        noun_id: &str,
        was_correct: bool,
        now: DateTime<Utc>,
    ) -> Result<AnswerRecord> {
        let progress = self.repo.record_answer(noun_id, was_correct, now)?;
        let stats = self.repo.record(was_correct, now.date_naive())?;
        Ok(AnswerRecord { progress, stats })
    }

    pub fn settings(&self) -> AppSettings {
        self.repo.settings()
    }

    /// Replace the level selection. An empty selection is rejected here;
    /// the store itself does not validate.
    pub fn update_settings(&mut self, settings: AppSettings) -> Result<AppSettings> {
        if settings.selected_levels.is_empty() {
            return Err(CoreError::EmptyLevelSelection);
        }
        self.repo.set_settings(&settings)?;
        Ok(settings)
    }

    pub fn stats(&self) -> UserStats {
        self.repo.stats()
    }

    /// Read-only listing of every catalog entry with its progress.
    pub fn catalog_progress(&self) -> Vec<CatalogEntry> {
        let mut progress = self.repo.progress_map();
        self.catalog
            .iter()
            .map(|noun| CatalogEntry {
                noun: noun.clone(),
                progress: progress.remove(&noun.id),
            })
            .collect()
    }

    /// Per-level mastery breakdown for the stats screen.
    pub fn level_mastery(&self) -> Vec<LevelMastery> {
        mastery::level_mastery(&self.catalog, &self.repo.progress_map())
    }
}
