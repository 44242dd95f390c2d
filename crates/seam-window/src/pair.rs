//! Out-of-order pair matching
//!
//! `PairMatcher` pairs labeled elements as they arrive, independent of
//! arrival order. Each arrival is scanned against a cache of earlier
//! elements still waiting for a partner; accepted pairs come out with the
//! lower label first. Once input is exhausted the cache drains as
//! singletons, subject to the flush policy.

use std::iter::{Fuse, FusedIterator};

use seam_core::{FlushAll, FlushPolicy, Labeled, Matcher, SeqId};

use crate::cache::{MatchCache, MAX_USES};

/// One emitted tuple: a matched pair, or a singleton from the drain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair<T> {
    /// Lower-labeled member, or the lone element of a singleton.
    pub first: T,
    /// Higher-labeled member; absent for flushed singletons.
    pub second: Option<T>,
}

impl<T> Pair<T> {
    pub fn matched(first: T, second: T) -> Self {
        Pair {
            first,
            second: Some(second),
        }
    }

    pub fn singleton(first: T) -> Self {
        Pair {
            first,
            second: None,
        }
    }

    /// True when both slots are occupied.
    pub fn is_matched(&self) -> bool {
        self.second.is_some()
    }
}

/// Where a matcher run currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPhase {
    /// Consuming input and emitting matched pairs.
    Running,
    /// Input exhausted; draining the cache as singletons.
    Flushing,
    /// Cache empty; the run is over.
    Done,
}

/// Pairs labeled elements from `source` using a caller-supplied matcher.
///
/// Arrival order does not affect which pairs form, only the order they
/// are emitted in. Every pair is label-ordered; when labels are equal the
/// element that was cached first comes first. A run is single-use: once
/// it reports exhaustion it stays exhausted.
pub struct PairMatcher<I, M, P = FlushAll>
where
    I: Iterator,
{
    source: Fuse<I>,
    matcher: M,
    policy: P,
    cache: MatchCache<I::Item>,
    next_id: SeqId,
    pending: Option<Pair<I::Item>>,
    phase: MatchPhase,
}

impl<I, M> PairMatcher<I, M>
where
    I: Iterator,
    I::Item: Labeled + Clone,
    M: Matcher<<I::Item as Labeled>::Label>,
{
    /// A matcher over `source` that flushes every leftover element.
    pub fn new(source: I, matcher: M) -> Self {
        PairMatcher {
            source: source.fuse(),
            matcher,
            policy: FlushAll,
            cache: MatchCache::new(),
            next_id: SeqId::ZERO,
            pending: None,
            phase: MatchPhase::Running,
        }
    }
}

impl<I, M, P> PairMatcher<I, M, P>
where
    I: Iterator,
    I::Item: Labeled,
{
    /// Replaces the flush policy, consuming the matcher.
    pub fn with_flush_policy<Q>(self, policy: Q) -> PairMatcher<I, M, Q>
    where
        Q: FlushPolicy<<I::Item as Labeled>::Label>,
    {
        PairMatcher {
            source: self.source,
            matcher: self.matcher,
            policy,
            cache: self.cache,
            next_id: self.next_id,
            pending: self.pending,
            phase: self.phase,
        }
    }

    /// Current phase of the run.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Elements currently cached, awaiting a partner or the drain.
    pub fn cache_occupancy(&self) -> usize {
        self.cache.len()
    }
}

impl<I, M, P> PairMatcher<I, M, P>
where
    I: Iterator,
    I::Item: Labeled + Clone,
    M: Matcher<<I::Item as Labeled>::Label>,
{
    /// Runs one arrival through the cache scan. An arrival yields at most
    /// two pairs; the first is returned and the second parked for the
    /// next pull.
    fn absorb(&mut self, element: I::Item) -> Option<Pair<I::Item>> {
        let id = self.next_id;
        self.next_id = id.next();

        // Scan in insertion order, stopping once this arrival is full.
        let mut hits = Vec::new();
        for (cached_id, cached) in self.cache.iter() {
            if hits.len() == MAX_USES as usize {
                break;
            }
            if self.matcher.matches(element.label(), cached.label()) {
                hits.push(cached_id);
            }
        }

        let uses = hits.len() as u8;
        let mut first = None;
        for cached_id in hits {
            if let Some(partner) = self.cache.bump(cached_id) {
                // Label-ordered output; the cached element wins ties.
                let pair = if partner.label() <= element.label() {
                    Pair::matched(partner, element.clone())
                } else {
                    Pair::matched(element.clone(), partner)
                };
                match first {
                    None => first = Some(pair),
                    Some(_) => self.pending = Some(pair),
                }
            }
        }

        if uses < MAX_USES {
            self.cache.admit(id, element, uses);
        }
        first
    }
}

impl<I, M, P> Iterator for PairMatcher<I, M, P>
where
    I: Iterator,
    I::Item: Labeled + Clone,
    M: Matcher<<I::Item as Labeled>::Label>,
    P: FlushPolicy<<I::Item as Labeled>::Label>,
{
    type Item = Pair<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pending.take() {
                return Some(pair);
            }
            match self.phase {
                MatchPhase::Running => match self.source.next() {
                    Some(element) => {
                        if let Some(pair) = self.absorb(element) {
                            return Some(pair);
                        }
                    }
                    None => {
                        tracing::debug!(
                            "input exhausted; draining {} cached elements",
                            self.cache.len()
                        );
                        self.phase = MatchPhase::Flushing;
                    }
                },
                MatchPhase::Flushing => {
                    while let Some(element) = self.cache.pop_oldest() {
                        if self.policy.is_flushable(element.label()) {
                            return Some(Pair::singleton(element));
                        }
                        tracing::trace!(
                            "flush policy suppressed an element; {} still cached",
                            self.cache.len()
                        );
                    }
                    self.phase = MatchPhase::Done;
                }
                MatchPhase::Done => return None,
            }
        }
    }
}

impl<I, M, P> FusedIterator for PairMatcher<I, M, P>
where
    I: Iterator,
    I::Item: Labeled + Clone,
    M: Matcher<<I::Item as Labeled>::Label>,
    P: FlushPolicy<<I::Item as Labeled>::Label>,
{
}
