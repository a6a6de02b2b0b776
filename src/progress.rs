//! Progress mapping for countdown sessions.
//!
//! Converts elapsed/total second counts into a display fraction. Kept as a
//! free function so the timer and the renderer share one definition.

/// Returns the completed fraction of a session, clamped to `[0.0, 1.0]`.
///
/// A zero total maps to `0.0` so an unstarted (or misconfigured) session
/// never divides by zero.
pub fn fraction(elapsed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (elapsed as f64 / total as f64).min(1.0)
}
