//! Cache validity tracking for the drawable's derived artifacts.
//!
//! Two artifacts are cached: the resolved drawing rect (which carries the
//! sweep shader, since the shader is derived from it) and the ring outline
//! path. Every input → artifact invalidation edge is declared here, in one
//! place, instead of being scattered across the mutators:
//!
//! | input changed      | rect (+shader) | path |
//! |--------------------|----------------|------|
//! | bounds             | stale          | stale |
//! | colors             | stale          | stale |
//! | thickness ratio    |                | stale |
//! | starting angle     | stale          | stale |
//! | level / use_level  | stale          | stale |
//!
//! The starting angle stales both caches together: the shader's rotation
//! correction and the outline share the angle, and letting them drift apart
//! would misalign fill and geometry.

/// Validity of one cached artifact.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Validity {
    Valid,
    Stale,
}

impl Validity {
    #[inline]
    pub(crate) fn is_stale(self) -> bool {
        self == Validity::Stale
    }
}

/// Per-artifact validity, stale on construction.
#[derive(Debug, Copy, Clone)]
pub(crate) struct CacheTracker {
    rect: Validity,
    path: Validity,
}

impl CacheTracker {
    pub(crate) fn new() -> Self {
        Self {
            rect: Validity::Stale,
            path: Validity::Stale,
        }
    }

    // ── input edges ───────────────────────────────────────────────────────

    pub(crate) fn bounds_changed(&mut self) {
        self.rect = Validity::Stale;
        self.path = Validity::Stale;
    }

    pub(crate) fn colors_changed(&mut self) {
        self.rect = Validity::Stale;
        self.path = Validity::Stale;
    }

    pub(crate) fn thickness_changed(&mut self) {
        self.path = Validity::Stale;
    }

    pub(crate) fn angle_changed(&mut self) {
        self.rect = Validity::Stale;
        self.path = Validity::Stale;
    }

    pub(crate) fn sweep_changed(&mut self) {
        self.rect = Validity::Stale;
        self.path = Validity::Stale;
    }

    // ── queries and acknowledgements ──────────────────────────────────────

    #[inline]
    pub(crate) fn rect_stale(&self) -> bool {
        self.rect.is_stale()
    }

    #[inline]
    pub(crate) fn path_stale(&self) -> bool {
        self.path.is_stale()
    }

    pub(crate) fn rect_rebuilt(&mut self) {
        self.rect = Validity::Valid;
    }

    pub(crate) fn path_rebuilt(&mut self) {
        self.path = Validity::Valid;
    }
}
