//! Level arithmetic
//!
//! Level is never stored independently of experience; both values below are
//! recomputed on every write.

/// Level reached with the given experience.
///
/// `floor((sqrt(2500 + 200 * experience) - 50) / 100)`
pub fn level_for(experience: i64) -> i64 {
    let experience = experience.max(0) as f64;
    let level = ((2500.0 + 200.0 * experience).sqrt() - 50.0) / 100.0;
    level.floor() as i64
}

/// Experience still needed to reach `level + 1`.
pub fn until_next_level(level: i64, experience: i64) -> i64 {
    50 * (level + 1) * (level + 2) - experience
}
