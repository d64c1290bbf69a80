//! Score constants for position evaluation

/// Score scale shared by evaluation and search
pub struct Score;

impl Score {
    /// A completed network. Search adds the remaining depth on top so that
    /// quicker wins outrank slower ones.
    pub const WIN: i32 = 100_000;

    /// Bound used for alpha-beta windows; above any reachable score
    pub const INF: i32 = Self::WIN * 2;

    /// True for scores that can only come from a finished network
    #[inline]
    pub fn is_decisive(score: i32) -> bool {
        score.abs() >= Self::WIN
    }
}
