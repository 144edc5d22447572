//! Group autocomplete engine

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::{DirectoryApi, Group};
use crate::session::Credential;

/// Terms shorter than this never trigger a remote search
pub const MIN_TERM_LEN: usize = 3;

/// Shown instead of the common list when the forge is unreachable
const PLACEHOLDER_GROUPS: [(u64, &str, &str); 6] = [
    (1, "engineering", "org/engineering"),
    (2, "platform", "org/platform"),
    (3, "frontend", "org/frontend"),
    (4, "backend", "org/backend"),
    (5, "infrastructure", "org/infrastructure"),
    (6, "qa", "org/qa"),
];

/// A search the caller should run once the quiet period elapses
///
/// Carries the sequence number it was issued under; the engine refuses to
/// apply results for any sequence number that is no longer the latest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub seq: u64,
    pub term: String,
}

/// What became of an executed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Results applied, from cache or the forge
    Applied,
    /// A newer keystroke won; the result was discarded
    Superseded,
    /// The remote call failed; results cleared, nothing cached
    Failed,
}

/// Candidate list for a single-select group field
///
/// All state is owned by one session and mutated only through `&mut self`;
/// there is nothing to lock. Remote failures degrade to empty or
/// placeholder results and never escape as errors.
pub struct GroupAutocomplete {
    debounce: Duration,
    search_limit: usize,
    common: Vec<Group>,
    degraded: bool,
    term: String,
    results: Vec<Group>,
    searching: bool,
    cache: HashMap<String, Vec<Group>>,
    seq: u64,
    selected: Option<Group>,
}

impl GroupAutocomplete {
    pub fn new(debounce: Duration, search_limit: usize) -> Self {
        Self {
            debounce,
            search_limit,
            common: Vec::new(),
            degraded: false,
            term: String::new(),
            results: Vec::new(),
            searching: false,
            cache: HashMap::new(),
            seq: 0,
            selected: None,
        }
    }

    /// Quiet period a driver should wait before executing a pending search
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Whether the common list is the built-in placeholder fallback
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn common(&self) -> &[Group] {
        &self.common
    }

    pub fn selected(&self) -> Option<&Group> {
        self.selected.as_ref()
    }

    /// Fetch the baseline common-groups list, once, at startup
    ///
    /// On failure the engine falls back to a fixed placeholder list and
    /// flags itself degraded so the caller can warn the user. No retry,
    /// no background refresh.
    pub async fn load_common(
        &mut self,
        api: &dyn DirectoryApi,
        credential: &Credential,
        limit: usize,
    ) {
        match api.common_groups(credential, limit).await {
            Ok(groups) => {
                debug!(count = groups.len(), "loaded common groups");
                self.common = groups;
                self.degraded = false;
            }
            Err(e) => {
                warn!(error = %e, "common groups unavailable, using placeholder list");
                self.common = PLACEHOLDER_GROUPS
                    .iter()
                    .map(|(id, name, path)| Group::new(*id, *name, *path))
                    .collect();
                self.degraded = true;
            }
        }
    }

    /// Record a keystroke
    ///
    /// The term updates synchronously and the sequence number advances,
    /// invalidating any in-flight search. Short terms clear the results
    /// and return `None`; the caller must cancel its armed debounce.
    /// Otherwise the returned `PendingSearch` replaces whatever the caller
    /// had armed before (trailing-edge debounce, not throttle).
    pub fn on_term_changed(&mut self, term: &str) -> Option<PendingSearch> {
        self.term = term.to_string();
        self.seq = self.seq.wrapping_add(1);

        if self.term.chars().count() < MIN_TERM_LEN {
            self.results.clear();
            self.searching = false;
            return None;
        }

        self.searching = true;
        Some(PendingSearch {
            seq: self.seq,
            term: self.term.clone(),
        })
    }

    /// Run a debounced search once its quiet period has elapsed
    ///
    /// Cached terms are served without a remote call. A result belonging
    /// to a stale sequence number is discarded without touching state,
    /// regardless of network ordering.
    pub async fn execute_search(
        &mut self,
        pending: &PendingSearch,
        api: &dyn DirectoryApi,
        credential: &Credential,
    ) -> SearchOutcome {
        if pending.seq != self.seq {
            return SearchOutcome::Superseded;
        }

        if let Some(cached) = self.cache.get(&pending.term) {
            debug!(term = %pending.term, "search served from cache");
            self.results = cached.clone();
            self.searching = false;
            return SearchOutcome::Applied;
        }

        let fetched = api
            .search_groups(credential, &pending.term, self.search_limit)
            .await;

        if pending.seq != self.seq {
            debug!(term = %pending.term, "discarding superseded search response");
            return SearchOutcome::Superseded;
        }

        self.searching = false;
        match fetched {
            Ok(groups) => {
                // First write for a term wins; entries are never replaced.
                self.cache
                    .entry(pending.term.clone())
                    .or_insert_with(|| groups.clone());
                self.results = groups;
                SearchOutcome::Applied
            }
            Err(e) => {
                warn!(term = %pending.term, error = %e, "group search failed");
                self.results.clear();
                SearchOutcome::Failed
            }
        }
    }

    /// The ranked, de-duplicated candidate list for the current state
    ///
    /// Short terms show the common list as-is. Longer terms show common
    /// groups whose path contains the term (case-insensitive) ahead of the
    /// search results, de-duplicated by id with the common entry winning.
    pub fn display_set(&self) -> Vec<Group> {
        if self.term.chars().count() < MIN_TERM_LEN {
            return self.common.clone();
        }

        let needle = self.term.to_lowercase();
        let common_matches = self
            .common
            .iter()
            .filter(|g| g.path.to_lowercase().contains(&needle));

        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for group in common_matches.chain(self.results.iter()) {
            if seen.insert(group.id) {
                out.push(group.clone());
            }
        }
        out
    }

    /// Record the chosen group and return the display to the common list
    pub fn select(&mut self, group: &Group) {
        debug!(id = group.id, path = %group.path, "group selected");
        self.selected = Some(group.clone());
        self.term.clear();
        self.results.clear();
        self.searching = false;
        self.seq = self.seq.wrapping_add(1);
    }
}
