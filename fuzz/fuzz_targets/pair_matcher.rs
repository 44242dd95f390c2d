#![no_main]

use libfuzzer_sys::fuzz_target;

use seam_core::{Adjacent, Tagged};
use seam_window::{MatchPhase, Pair, PairMatcher};

// Narrow labels keep matches dense; the index makes each element's
// identity trackable across emitted tuples.
fuzz_target!(|labels: Vec<i8>| {
    let elements: Vec<Tagged<i64, usize>> = labels
        .into_iter()
        .enumerate()
        .map(|(idx, label)| Tagged::new(label as i64, idx))
        .collect();
    let total = elements.len();

    let mut matcher = PairMatcher::new(elements.into_iter(), Adjacent);
    let pairs: Vec<Pair<Tagged<i64, usize>>> = matcher.by_ref().collect();

    let mut appearances = vec![0usize; total];
    for pair in &pairs {
        appearances[pair.first.value] += 1;
        if let Some(second) = &pair.second {
            appearances[second.value] += 1;
            assert!(pair.first.label <= second.label, "pair emitted out of label order");
        }
    }

    for (idx, count) in appearances.iter().enumerate() {
        assert!(
            (1..=2).contains(count),
            "element {} appeared {} times",
            idx,
            count
        );
    }

    assert_eq!(matcher.cache_occupancy(), 0, "cache not fully drained");
    assert_eq!(matcher.phase(), MatchPhase::Done);
});
