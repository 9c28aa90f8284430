/// Errors surfaced by [`crate::ScrollTracker`] construction.
///
/// Steady-state operations (sampling, dispatch, navigation) never fail; this type only covers
/// conditions that make tracking impossible to begin with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No explicit surface was given and the host has no default viewport (e.g. a headless
    /// environment without a window).
    #[error("no scroll target was given and the host has no default viewport")]
    SurfaceUnavailable,
}
