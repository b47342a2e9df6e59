//! Caching and pacing for open-class taggers.
//!
//! An open-class tagger may be slow, rate limited, or both. [`CachedTagger`]
//! wraps one with a response cache keyed by `"{language}:{lowercased word}"`
//! and a minimum interval between upstream calls. Answers, including "no
//! opinion", are cached until they expire. Expired answers are swept
//! whenever a new one is stored. Failures are not cached, so the
//! next request for the same word tries again.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use syntree_foundation::{LanguageCode, PosTag};
use syntree_parser::{OpenClassTagger, TaggerError};
use tracing::{debug, trace};

/// Configuration for a [`CachedTagger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Upstream calls allowed per minute. Zero disables pacing.
    pub requests_per_minute: u32,
    /// How long a cached answer stays valid.
    pub cache_ttl: Duration,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            requests_per_minute: 60,
            cache_ttl: Duration::from_secs(24 * 60 * 60),
        }
    }
}

impl TaggerConfig {
    /// Builder method to set the request rate.
    #[must_use]
    pub fn with_requests_per_minute(mut self, requests_per_minute: u32) -> Self {
        self.requests_per_minute = requests_per_minute;
        self
    }

    /// Builder method to set the cache lifetime.
    #[must_use]
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Minimum spacing between upstream calls.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        if self.requests_per_minute == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(60) / self.requests_per_minute
        }
    }
}

/// Counters kept by a [`CachedTagger`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaggerStats {
    /// Requests answered from the cache.
    pub cache_hits: u64,
    /// Requests forwarded upstream.
    pub upstream_calls: u64,
    /// Upstream calls that failed.
    pub failures: u64,
}

#[derive(Debug, Default)]
struct State {
    cache: HashMap<String, (Instant, Option<PosTag>)>,
    last_call: Option<Instant>,
    stats: TaggerStats,
}

/// An open-class tagger with a response cache and request pacing.
#[derive(Debug)]
pub struct CachedTagger<T> {
    inner: T,
    config: TaggerConfig,
    state: Mutex<State>,
}

impl<T: OpenClassTagger> CachedTagger<T> {
    /// Wraps a tagger.
    #[must_use]
    pub fn new(inner: T, config: TaggerConfig) -> Self {
        Self {
            inner,
            config,
            state: Mutex::new(State::default()),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TaggerConfig {
        &self.config
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> TaggerStats {
        self.lock().stats
    }

    /// Number of live and expired entries held.
    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.lock().cache.len()
    }

    /// Drops every cached answer.
    pub fn clear_cache(&self) {
        self.lock().cache.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state stays consistent across a panic in the inner tagger.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fingerprint(word: &str, language: LanguageCode) -> String {
        format!("{}:{}", language.code(), word.to_lowercase())
    }
}

impl<T: OpenClassTagger> OpenClassTagger for CachedTagger<T> {
    fn tag(&self, word: &str, language: LanguageCode) -> Result<Option<PosTag>, TaggerError> {
        let key = Self::fingerprint(word, language);
        // Held across the upstream call so calls stay serialized and paced.
        let mut state = self.lock();

        if let Some((stored, answer)) = state.cache.get(&key).copied() {
            if stored.elapsed() < self.config.cache_ttl {
                state.stats.cache_hits += 1;
                trace!(key = %key, "tagger cache hit");
                return Ok(answer);
            }
            state.cache.remove(&key);
        }

        if let Some(last) = state.last_call {
            let wait = self.config.min_interval().saturating_sub(last.elapsed());
            if !wait.is_zero() {
                debug!(wait = ?wait, "pacing tagger request");
                thread::sleep(wait);
            }
        }

        state.last_call = Some(Instant::now());
        state.stats.upstream_calls += 1;
        match self.inner.tag(word, language) {
            Ok(answer) => {
                let ttl = self.config.cache_ttl;
                state.cache.retain(|_, (stored, _)| stored.elapsed() < ttl);
                state.cache.insert(key, (Instant::now(), answer));
                Ok(answer)
            }
            Err(err) => {
                state.stats.failures += 1;
                Err(err)
            }
        }
    }
}
