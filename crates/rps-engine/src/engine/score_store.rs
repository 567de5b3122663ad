/// Key under which the score is persisted.
pub const SCORE_KEY: &str = "score";

/// Persistence for the win counter.
///
/// [`GameSession`](crate::GameSession) reads the score once on construction
/// and writes it after every win. Implementations own their I/O failures:
/// `load` falls back to 0 and `save` reports problems out of band.
pub trait ScoreStore {
    /// Returns the persisted score, or 0 if none is stored.
    fn load(&self) -> u64;

    /// Persists a new score.
    fn save(&mut self, score: u64);
}

impl<S> ScoreStore for &mut S
where
    S: ScoreStore + ?Sized,
{
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn save(&mut self, score: u64) {
        (**self).save(score);
    }
}

impl<S> ScoreStore for Box<S>
where
    S: ScoreStore + ?Sized,
{
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn save(&mut self, score: u64) {
        (**self).save(score);
    }
}

/// Decodes a string-encoded score.
///
/// Anything that is not a non-negative integer decodes to 0.
///
/// ```
/// use rps_engine::parse_score;
///
/// assert_eq!(parse_score("12"), 12);
/// assert_eq!(parse_score(" 3\n"), 3);
/// assert_eq!(parse_score("abc"), 0);
/// assert_eq!(parse_score("-1"), 0);
/// ```
#[must_use]
pub fn parse_score(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}

/// Score store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    score: Option<u64>,
    save_count: usize,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: None,
            save_count: 0,
        }
    }

    /// Creates a store that already holds `score`.
    #[must_use]
    pub const fn with_score(score: u64) -> Self {
        Self {
            score: Some(score),
            save_count: 0,
        }
    }

    /// Returns the stored score, if one was ever stored.
    #[must_use]
    pub const fn stored(&self) -> Option<u64> {
        self.score
    }

    /// Returns how many times [`ScoreStore::save`] was called.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u64 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u64) {
        self.score = Some(score);
        self.save_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_accepts_integers() {
        assert_eq!(parse_score("0"), 0);
        assert_eq!(parse_score("42"), 42);
        assert_eq!(parse_score("  7  "), 7);
        assert_eq!(parse_score("18446744073709551615"), u64::MAX);
    }

    #[test]
    fn test_parse_score_tolerates_garbage() {
        for value in ["", "   ", "abc", "-3", "2.5", "1e3", "12abc", "18446744073709551616"] {
            assert_eq!(parse_score(value), 0, "{value:?}");
        }
    }

    #[test]
    fn test_memory_store_empty_loads_zero() {
        let store = MemoryScoreStore::new();
        assert_eq!(store.load(), 0);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_memory_store_save() {
        let mut store = MemoryScoreStore::with_score(4);
        assert_eq!(store.load(), 4);
        store.save(5);
        assert_eq!(store.load(), 5);
        assert_eq!(store.save_count(), 1);
    }

    fn bump<S: ScoreStore>(mut store: S) {
        let score = store.load();
        store.save(score + 1);
    }

    #[test]
    fn test_store_through_mut_ref_and_box() {
        let mut store = MemoryScoreStore::with_score(8);
        bump(&mut store);
        assert_eq!(store.stored(), Some(9));

        let mut boxed: Box<dyn ScoreStore> = Box::new(store);
        bump(&mut boxed);
        assert_eq!(boxed.load(), 10);
    }
}
