use std::cell::RefCell;
use std::rc::Rc;

use crate::coords::{Rect, Transform2, Vec2};
use crate::host::{Canvas, ColorResolver, RedrawSink, Renderable, ResourceId};
use crate::paint::{Argb, ColorFilter, FillPaint, SweepGradient, modulate_alpha};
use crate::path::Path;

use super::cache::CacheTracker;
use super::geometry;
use super::state::{RingState, SharedState};

/// Whether this drawable's configuration handle is private to it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Ownership {
    Exclusive,
    Shared,
}

/// A circular progress drawable.
///
/// Owns the mutable caches (drawing rect, sweep shader, ring outline) over a
/// [`RingState`] configuration that may be shared with other instances. All
/// mutators flag the affected caches stale and notify the host's
/// [`RedrawSink`]; [`draw`](RingDrawable::draw) lazily rebuilds whatever went
/// stale before submitting the path.
///
/// Single-threaded: the caches are read-modify-write without locking, and
/// the shared state handle is an `Rc`.
pub struct RingDrawable {
    state: SharedState,
    ownership: Ownership,

    alpha: u8,
    color_filter: Option<ColorFilter>,
    starting_angle: f32,
    level: u32,

    /// Host-assigned drawing area; zero until the first `on_bounds_changed`.
    bounds: Rect,
    /// Resolved drawing rect (bounds minus inset; inset is currently 0).
    rect: Rect,
    gradient: Option<SweepGradient>,
    ring_path: Option<Path>,
    caches: CacheTracker,
    /// Paint base color; alpha modulation starts from its alpha channel.
    fill_color: Argb,

    redraw: Option<Rc<dyn RedrawSink>>,

    rect_builds: u32,
    path_builds: u32,
}

impl RingDrawable {
    /// Creates a drawable with a fresh default configuration
    /// (no colors, thickness ratio 8, use-level on, starting angle 90°).
    pub fn new() -> Self {
        let mut drawable = Self::with_state(RingState::new_shared(), Ownership::Exclusive);
        drawable.starting_angle = 90.0;
        drawable
    }

    /// Creates a drawable sharing an existing configuration.
    ///
    /// Mutations through any sharer are visible to all of them until this
    /// drawable calls [`divest`](RingDrawable::divest).
    pub fn from_shared(state: SharedState) -> Self {
        Self::with_state(state, Ownership::Shared)
    }

    fn with_state(state: SharedState, ownership: Ownership) -> Self {
        let mut drawable = Self {
            state,
            ownership,
            alpha: 0xFF,
            color_filter: None,
            starting_angle: 0.0,
            level: 10_000,
            bounds: Rect::default(),
            rect: Rect::default(),
            gradient: None,
            ring_path: None,
            caches: CacheTracker::new(),
            fill_color: Argb::TRANSPARENT,
            redraw: None,
            rect_builds: 0,
            path_builds: 0,
        };
        drawable.init_fill_from_state();
        drawable
    }

    /// Seeds the paint base color from the configuration: the solid color in
    /// solid mode, opaque black under a gradient (so alpha modulation starts
    /// from 255), transparent when neither is set.
    fn init_fill_from_state(&mut self) {
        let st = self.state.borrow();
        self.fill_color = if st.has_solid_color() {
            st.solid_color()
        } else if st.colors().is_none() {
            Argb::TRANSPARENT
        } else {
            Argb::BLACK
        };
    }

    fn request_redraw(&self) {
        if let Some(sink) = &self.redraw {
            sink.request_redraw();
        }
    }

    // ── host wiring ───────────────────────────────────────────────────────

    /// Installs (or removes) the invalidation sink the host listens on.
    pub fn set_redraw_sink(&mut self, sink: Option<Rc<dyn RedrawSink>>) {
        self.redraw = sink;
    }

    /// Called by the host whenever the drawing area changes. Discards the
    /// cached outline and stales everything derived from the bounds.
    pub fn on_bounds_changed(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.ring_path = None;
        self.caches.bounds_changed();
    }

    /// Called by the host when the progress level (0–10000) changes.
    ///
    /// Returns whether the change implies a visual difference (always true:
    /// even with `use_level` off, the level is kept for when it is turned
    /// back on).
    pub fn on_level_changed(&mut self, level: u32) -> bool {
        debug_assert!(level <= 10_000, "level out of range: {level}");
        self.level = level;
        self.caches.sweep_changed();
        self.request_redraw();
        true
    }

    // ── configuration mutators ────────────────────────────────────────────

    /// Replaces the gradient colors (two or more for a meaningful ramp) and
    /// leaves solid-color mode.
    ///
    /// Affects every drawable sharing this configuration; call
    /// [`divest`](RingDrawable::divest) first to mutate privately.
    pub fn set_colors(&mut self, colors: Vec<Argb>) {
        self.state.borrow_mut().set_colors(colors);
        self.caches.colors_changed();
        self.request_redraw();
    }

    /// Switches to a single fill color, discarding gradient colors.
    ///
    /// Affects every drawable sharing this configuration; call
    /// [`divest`](RingDrawable::divest) first to mutate privately.
    pub fn set_solid_color(&mut self, argb: Argb) {
        self.state.borrow_mut().set_solid_color(argb);
        self.fill_color = argb;
        self.caches.colors_changed();
        self.request_redraw();
    }

    /// Sets the ring thickness as a divisor of the rect width
    /// (thickness = width / ratio). Must be positive.
    pub fn set_thickness_ratio(&mut self, ratio: f32) {
        debug_assert!(ratio > 0.0, "thickness ratio must be positive, got {ratio}");
        self.state.borrow_mut().thickness_ratio = ratio;
        self.caches.thickness_changed();
        self.request_redraw();
    }

    /// When off, the ring ignores the level and always draws a full circle.
    pub fn set_use_level(&mut self, use_level: bool) {
        self.state.borrow_mut().use_level = use_level;
        self.caches.sweep_changed();
        self.request_redraw();
    }

    /// Sets the angle (degrees, clockwise from +X on screen) where the arc
    /// starts and the gradient's zero reference is rotated to.
    pub fn set_starting_angle(&mut self, degrees: f32) {
        self.starting_angle = degrees;
        self.caches.angle_changed();
        self.request_redraw();
    }

    /// Global opacity multiplier (0–255) on top of per-color alpha.
    /// Paint-only: no geometry goes stale.
    pub fn set_alpha(&mut self, alpha: u8) {
        if alpha != self.alpha {
            self.alpha = alpha;
            self.request_redraw();
        }
    }

    /// Attaches (or clears) a host color filter. Paint-only.
    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        if filter != self.color_filter {
            self.color_filter = filter;
            self.request_redraw();
        }
    }

    // ── resource-ID conveniences ──────────────────────────────────────────

    /// Resolves `ids` through the host and sets them as gradient colors.
    pub fn set_color_resources(&mut self, resolver: &dyn ColorResolver, ids: &[ResourceId]) {
        let colors = ids.iter().map(|&id| resolver.color(id)).collect();
        self.set_colors(colors);
    }

    /// Resolves `id` through the host and sets it as the solid color.
    pub fn set_solid_color_resource(&mut self, resolver: &dyn ColorResolver, id: ResourceId) {
        self.set_solid_color(resolver.color(id));
    }

    // ── sharing and divesture ─────────────────────────────────────────────

    /// Hands out the configuration handle for another drawable to share,
    /// marking this one as a sharer too.
    pub fn share_state(&mut self) -> SharedState {
        self.ownership = Ownership::Shared;
        Rc::clone(&self.state)
    }

    /// Forks a private copy of the configuration so further mutation does
    /// not affect other sharers. Idempotent: once exclusive, later calls do
    /// nothing.
    pub fn divest(&mut self) {
        if self.ownership == Ownership::Shared {
            let copy = self.state.borrow().clone();
            self.state = Rc::new(RefCell::new(copy));
            self.ownership = Ownership::Exclusive;
            self.init_fill_from_state();
            log::debug!("divested shared ring state into a private copy");
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn starting_angle(&self) -> f32 {
        self.starting_angle
    }

    #[inline]
    pub fn color_filter(&self) -> Option<ColorFilter> {
        self.color_filter
    }

    /// Padding reported to the host, if the configuration carries one.
    pub fn padding(&self) -> Option<Rect> {
        self.state.borrow().padding
    }

    /// Number of drawing-rect (and shader) rebuilds so far. Diagnostic.
    #[inline]
    pub fn rect_build_count(&self) -> u32 {
        self.rect_builds
    }

    /// Number of ring-path rebuilds so far. Diagnostic.
    #[inline]
    pub fn path_build_count(&self) -> u32 {
        self.path_builds
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Renders the ring into `canvas`, lazily rebuilding stale caches first.
    ///
    /// An empty resolved rect draws nothing. The fill paint is built fresh
    /// for this call; nothing about alpha modulation persists afterwards.
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if !self.ensure_valid_rect() {
            // nothing to draw
            return;
        }
        self.ensure_ring_path();

        let (has_solid, has_colors) = {
            let st = self.state.borrow();
            (st.has_solid_color(), st.colors().is_some())
        };

        let mut color = self
            .fill_color
            .with_alpha(modulate_alpha(self.fill_color.alpha(), self.alpha));
        if self.color_filter.is_some() && !has_solid {
            // An external filter composites against the paint color, and a
            // gradient fill's base color is transparent by default; expose
            // the global alpha there so filtering still modulates correctly.
            color = Argb::alpha_only(self.alpha);
        }

        let paint = FillPaint {
            color,
            shader: if has_colors { self.gradient.clone() } else { None },
            color_filter: self.color_filter,
        };

        if let Some(path) = &self.ring_path {
            canvas.draw_path(path, &paint);
        }
    }

    /// Re-resolves the drawing rect and the sweep shader derived from it
    /// when stale. Returns false when the resolved rect has no area.
    fn ensure_valid_rect(&mut self) -> bool {
        if self.caches.rect_stale() {
            self.caches.rect_rebuilt();
            self.rect_builds += 1;

            let inset = 0.0;
            let (min, max) = (self.bounds.min(), self.bounds.max());
            self.rect = Rect::from_ltrb(min.x + inset, min.y + inset, max.x - inset, max.y - inset);

            let st = self.state.borrow();
            if let Some(colors) = st.colors() {
                let r = self.rect;
                let center = Vec2::new(
                    r.min().x + r.width() * st.center_x,
                    r.min().y + r.height() * st.center_y,
                );
                // The sweep primitive's zero angle sits on the +X axis
                // turning clockwise; flip gradient space and rotate by the
                // negated starting angle so the ramp's zero reference lands
                // where the arc starts.
                let transform = Transform2::flip_y()
                    .post_translate(0.0, r.height())
                    .post_rotate_about(-self.starting_angle, center);
                self.gradient = Some(
                    SweepGradient::new(center, colors.to_vec(), None)
                        .with_local_transform(transform),
                );
                if !st.has_solid_color() {
                    self.fill_color = Argb::BLACK;
                }
            } else {
                self.gradient = None;
            }
            log::trace!("resolved drawing rect {:?}", self.rect);
        }
        !self.rect.is_empty()
    }

    /// Rebuilds the ring outline when absent or stale.
    ///
    /// Rebuilding on staleness alone (rather than only when the level
    /// drives the sweep) keeps thickness and starting-angle changes from
    /// reusing stale geometry on non-level rings.
    fn ensure_ring_path(&mut self) {
        if self.ring_path.is_some() && !self.caches.path_stale() {
            return;
        }
        self.caches.path_rebuilt();
        self.path_builds += 1;

        let st = self.state.borrow();
        let sweep = geometry::sweep_degrees(st.use_level, self.level);
        // Reuse the previous path's allocation when there is one.
        let mut path = self.ring_path.take().unwrap_or_default();
        geometry::build_ring_path(
            &mut path,
            self.rect,
            st.thickness_ratio,
            self.starting_angle,
            sweep,
        );
        drop(st);

        log::trace!(
            "rebuilt ring path: sweep {sweep}°, start {}°",
            self.starting_angle
        );
        self.ring_path = Some(path);
    }

    #[cfg(test)]
    fn state_handle_for_test(&self) -> &SharedState {
        &self.state
    }
}

impl Default for RingDrawable {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for RingDrawable {
    fn draw(&mut self, canvas: &mut dyn Canvas) {
        RingDrawable::draw(self, canvas);
    }

    fn intrinsic_width(&self) -> i32 {
        self.state.borrow().width
    }

    fn intrinsic_height(&self) -> i32 {
        self.state.borrow().height
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::path::{FillRule, PathVerb};

    use super::*;

    const RED: Argb = Argb::new(0xFFFF0000);
    const BLUE: Argb = Argb::new(0xFF0000FF);
    const SQUARE: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    /// Captures every path + paint submitted by `draw`.
    #[derive(Default)]
    struct RecordCanvas {
        ops: Vec<(Path, FillPaint)>,
    }

    impl Canvas for RecordCanvas {
        fn draw_path(&mut self, path: &Path, paint: &FillPaint) {
            self.ops.push((path.clone(), paint.clone()));
        }
    }

    struct CountingSink {
        hits: Cell<u32>,
    }

    impl CountingSink {
        fn new() -> Rc<Self> {
            Rc::new(Self { hits: Cell::new(0) })
        }
    }

    impl RedrawSink for CountingSink {
        fn request_redraw(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    fn assert_close(got: Vec2, want: Vec2) {
        assert!(
            (got.x - want.x).abs() < 1e-3 && (got.y - want.y).abs() < 1e-3,
            "got {got:?}, want {want:?}"
        );
    }

    // ── draw basics ───────────────────────────────────────────────────────

    #[test]
    fn empty_bounds_draw_nothing() {
        let mut drawable = RingDrawable::new();
        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn defaults_match_construction_contract() {
        let drawable = RingDrawable::new();
        assert_eq!(drawable.alpha(), 0xFF);
        assert_eq!(drawable.level(), 10_000);
        assert_eq!(drawable.starting_angle(), 90.0);
        assert_eq!(drawable.intrinsic_width(), -1);
        assert_eq!(drawable.intrinsic_height(), -1);
    }

    // ── redraw notification ───────────────────────────────────────────────

    #[test]
    fn mutators_request_redraw() {
        let sink = CountingSink::new();
        let mut drawable = RingDrawable::new();
        drawable.set_redraw_sink(Some(sink.clone()));

        drawable.set_colors(vec![RED, BLUE]);
        drawable.set_thickness_ratio(4.0);
        drawable.set_starting_angle(45.0);
        assert_eq!(sink.hits.get(), 3);
    }

    #[test]
    fn paint_setters_suppress_noop_notifications() {
        let sink = CountingSink::new();
        let mut drawable = RingDrawable::new();
        drawable.set_redraw_sink(Some(sink.clone()));

        drawable.set_alpha(0xFF); // already 0xFF
        drawable.set_color_filter(None); // already none
        assert_eq!(sink.hits.get(), 0);

        drawable.set_alpha(0x80);
        drawable.set_color_filter(Some(ColorFilter(7)));
        assert_eq!(sink.hits.get(), 2);
    }

    // ── cache correctness ─────────────────────────────────────────────────

    #[test]
    fn second_draw_reuses_cached_path() {
        let mut drawable = RingDrawable::new();
        drawable.set_use_level(false);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        drawable.draw(&mut canvas);

        assert_eq!(drawable.path_build_count(), 1);
        assert_eq!(drawable.rect_build_count(), 1);
        assert_eq!(canvas.ops[0].0, canvas.ops[1].0);
    }

    #[test]
    fn thickness_change_rebuilds_the_path() {
        let mut drawable = RingDrawable::new();
        drawable.set_use_level(false);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        drawable.set_thickness_ratio(4.0);
        drawable.draw(&mut canvas);

        assert_eq!(drawable.path_build_count(), 2);
        assert_ne!(canvas.ops[0].0, canvas.ops[1].0);
    }

    #[test]
    fn bounds_change_rebuilds_shader_and_path() {
        let mut drawable = RingDrawable::new();
        drawable.set_colors(vec![RED, BLUE]);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        drawable.on_bounds_changed(Rect::new(0.0, 0.0, 200.0, 200.0));
        drawable.draw(&mut canvas);

        assert_eq!(drawable.rect_build_count(), 2);
        assert_eq!(drawable.path_build_count(), 2);

        let shader_a = canvas.ops[0].1.shader.as_ref().unwrap();
        let shader_b = canvas.ops[1].1.shader.as_ref().unwrap();
        assert_eq!(shader_a.center, Vec2::new(50.0, 50.0));
        assert_eq!(shader_b.center, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn starting_angle_change_rebuilds_shader_and_path_together() {
        let mut drawable = RingDrawable::new();
        drawable.set_colors(vec![RED, BLUE]);
        drawable.set_use_level(false);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        drawable.set_starting_angle(0.0);
        drawable.draw(&mut canvas);

        assert_eq!(drawable.rect_build_count(), 2);
        assert_eq!(drawable.path_build_count(), 2);
        assert_ne!(canvas.ops[0].1.shader, canvas.ops[1].1.shader);
    }

    // ── copy-on-write ─────────────────────────────────────────────────────

    #[test]
    fn divest_isolates_mutation_from_sharers() {
        let mut a = RingDrawable::new();
        let mut b = RingDrawable::from_shared(a.share_state());
        a.on_bounds_changed(SQUARE);
        b.on_bounds_changed(SQUARE);

        a.divest();
        a.set_colors(vec![RED, BLUE]);

        let mut canvas = RecordCanvas::default();
        a.draw(&mut canvas);
        b.draw(&mut canvas);

        assert!(canvas.ops[0].1.shader.is_some());
        assert!(canvas.ops[1].1.shader.is_none());
    }

    #[test]
    fn shared_mutation_without_divest_is_visible_to_all() {
        let mut a = RingDrawable::new();
        let mut b = RingDrawable::from_shared(a.share_state());
        a.on_bounds_changed(SQUARE);
        b.on_bounds_changed(SQUARE);

        a.set_colors(vec![RED, BLUE]);

        let mut canvas = RecordCanvas::default();
        b.draw(&mut canvas);
        assert!(canvas.ops[0].1.shader.is_some());
    }

    #[test]
    fn divest_is_idempotent() {
        let mut a = RingDrawable::new();
        let _shared = a.share_state();

        a.divest();
        let forked = Rc::as_ptr(a.state_handle_for_test());
        a.divest();
        assert_eq!(Rc::as_ptr(a.state_handle_for_test()), forked);
    }

    // ── alpha and filters ─────────────────────────────────────────────────

    #[test]
    fn draw_modulates_solid_alpha_exactly() {
        let mut drawable = RingDrawable::new();
        drawable.set_solid_color(Argb::new(0xFF123456));
        drawable.set_alpha(128);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);

        // 255 * (128 + 1) >> 8 == 128
        assert_eq!(canvas.ops[0].1.color, Argb::new(0x80123456));
    }

    #[test]
    fn modulation_is_draw_scoped() {
        let mut drawable = RingDrawable::new();
        drawable.set_solid_color(Argb::new(0xFF123456));
        drawable.set_alpha(128);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        drawable.draw(&mut canvas);

        // Each draw modulates from the unmodulated base, not the previous
        // draw's output.
        assert_eq!(canvas.ops[0].1.color, canvas.ops[1].1.color);
    }

    #[test]
    fn color_filter_over_gradient_exposes_global_alpha() {
        let mut drawable = RingDrawable::new();
        drawable.set_colors(vec![RED, BLUE]);
        drawable.set_color_filter(Some(ColorFilter(7)));
        drawable.set_alpha(200);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);

        let paint = &canvas.ops[0].1;
        assert_eq!(paint.color, Argb::alpha_only(200));
        assert_eq!(paint.color_filter, Some(ColorFilter(7)));
    }

    #[test]
    fn color_filter_over_solid_keeps_the_solid_color() {
        let mut drawable = RingDrawable::new();
        drawable.set_solid_color(Argb::new(0xFF123456));
        drawable.set_color_filter(Some(ColorFilter(7)));
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        assert_eq!(canvas.ops[0].1.color, Argb::new(0xFF123456));
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn half_level_red_to_blue_ring() {
        let mut drawable = RingDrawable::new();
        drawable.set_colors(vec![RED, BLUE]);
        drawable.on_bounds_changed(SQUARE);
        assert!(drawable.on_level_changed(5000));

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);

        let (path, paint) = &canvas.ops[0];

        // Half sweep starting at the top: inner radius 37.5, outer 50.
        assert_eq!(path.fill_rule(), FillRule::EvenOdd);
        assert_eq!(path.verbs().len(), 5);
        let PathVerb::MoveTo(inner_start) = path.verbs()[0] else {
            panic!("expected MoveTo, got {:?}", path.verbs()[0]);
        };
        let PathVerb::LineTo(outer_start) = path.verbs()[1] else {
            panic!("expected LineTo, got {:?}", path.verbs()[1]);
        };
        assert_close(inner_start, Vec2::new(50.0, 12.5));
        assert_close(outer_start, Vec2::new(50.0, 0.0));
        assert_eq!(
            path.verbs()[2],
            PathVerb::ArcTo { oval: SQUARE, start_angle: -90.0, sweep_angle: -180.0 }
        );
        assert_eq!(
            path.verbs()[3],
            PathVerb::ArcTo {
                oval: Rect::new(12.5, 12.5, 75.0, 75.0),
                start_angle: -270.0,
                sweep_angle: 180.0,
            }
        );
        assert_eq!(path.verbs()[4], PathVerb::Close);

        // Red→blue sweep shader rotated so its zero reference is at the top.
        let shader = paint.shader.as_ref().expect("gradient shader");
        assert_eq!(shader.center, Vec2::new(50.0, 50.0));
        assert_eq!(shader.colors, vec![RED, BLUE]);
        assert_eq!(shader.positions, None);
        let expected = Transform2::flip_y()
            .post_translate(0.0, 100.0)
            .post_rotate_about(-90.0, Vec2::new(50.0, 50.0));
        assert_eq!(shader.local_transform, expected);

        // Gradient fill keeps a maxed-out base alpha.
        assert_eq!(paint.color, Argb::BLACK);
    }

    #[test]
    fn full_level_takes_the_two_contour_branch() {
        let mut drawable = RingDrawable::new();
        drawable.on_bounds_changed(SQUARE);
        drawable.on_level_changed(10_000);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);

        let verbs = canvas.ops[0].0.verbs();
        assert!(matches!(verbs[0], PathVerb::Oval { .. }));
        assert!(matches!(verbs[1], PathVerb::Oval { .. }));
    }

    #[test]
    fn zero_level_draws_a_degenerate_sliver() {
        let mut drawable = RingDrawable::new();
        drawable.on_bounds_changed(SQUARE);
        drawable.on_level_changed(0);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);

        let path = &canvas.ops[0].0;
        assert!(matches!(path.verbs()[0], PathVerb::MoveTo(_)));
        let PathVerb::ArcTo { sweep_angle, .. } = path.verbs()[2] else {
            panic!("expected outer arc");
        };
        assert_eq!(sweep_angle, 0.0);
    }

    // ── resource lookups ──────────────────────────────────────────────────

    #[test]
    fn resource_ids_resolve_to_gradient_colors() {
        struct Table;
        impl ColorResolver for Table {
            fn color(&self, id: ResourceId) -> Argb {
                match id {
                    ResourceId(1) => RED,
                    _ => BLUE,
                }
            }
        }

        let mut drawable = RingDrawable::new();
        drawable.set_color_resources(&Table, &[ResourceId(1), ResourceId(2)]);
        drawable.on_bounds_changed(SQUARE);

        let mut canvas = RecordCanvas::default();
        drawable.draw(&mut canvas);
        let shader = canvas.ops[0].1.shader.as_ref().unwrap();
        assert_eq!(shader.colors, vec![RED, BLUE]);
    }
}
