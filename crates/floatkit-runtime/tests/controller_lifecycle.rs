//! End-to-end controller behavior: lifecycle, signal wiring, teardown, and
//! the presentation fallback path, exercised against the fixture host.

use floatkit_core::{Rect, Side, Size, Viewport};
use floatkit_placement::PopoverConfig;
use floatkit_runtime::fixture::{RecordingSurface, SharedGeometry};
use floatkit_runtime::{LayoutSignals, Phase, Popover};
use proptest::prelude::*;

fn geometry() -> SharedGeometry {
    SharedGeometry::new(
        Rect::new(100.0, 500.0, 50.0, 20.0),
        Viewport::new(800.0, 600.0),
        Size::new(120.0, 40.0),
    )
}

fn config() -> PopoverConfig {
    PopoverConfig::new()
        .placement(Side::Bottom)
        .fallbacks([Side::Top, Side::Right, Side::Left])
}

#[test]
fn resize_signal_triggers_recompute() {
    let signals = LayoutSignals::new();
    let geometry = geometry();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry.clone(), surface.clone(), &signals);

    popover.show();
    assert_eq!(popover.active_placement(), Some(Side::Bottom));

    // The panel grows taller than the space below; the next resize signal
    // must flip it above the anchor.
    geometry.set_footprint(Size::new(120.0, 150.0));
    signals.resize.emit();
    assert_eq!(popover.active_placement(), Some(Side::Top));
    assert_eq!(surface.last_placement(), Some(Side::Top));
}

#[test]
fn scroll_signal_triggers_recompute() {
    let signals = LayoutSignals::new();
    let geometry = geometry();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry.clone(), surface.clone(), &signals);

    popover.update();
    assert_eq!(popover.active_placement(), Some(Side::Bottom));

    // Scrolling carried the anchor near the bottom edge.
    geometry.set_anchor(Rect::new(100.0, 570.0, 50.0, 20.0));
    signals.scroll.emit();
    assert_eq!(popover.active_placement(), Some(Side::Top));
}

#[test]
fn signal_bursts_recompute_each_time() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.update();
    for _ in 0..5 {
        signals.resize.emit();
    }
    assert_eq!(surface.placements().len(), 6);
    assert_eq!(popover.active_placement(), Some(Side::Bottom));
}

#[test]
fn destroy_severs_signal_subscriptions() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    let writes_before = surface.placements().len();

    popover.destroy();
    signals.resize.emit();
    signals.scroll.emit();
    assert_eq!(surface.placements().len(), writes_before);
}

#[test]
fn destroy_conceals_the_panel() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    assert!(surface.visible());

    popover.destroy();
    assert!(!surface.visible());
}

#[test]
fn drop_releases_watchers_like_destroy() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    {
        let popover = Popover::new(config(), geometry(), surface.clone(), &signals);
        popover.update();
    }
    let writes_before = surface.placements().len();
    signals.resize.emit();
    assert_eq!(surface.placements().len(), writes_before);
    // The emit also pruned the dead watcher entries.
    assert_eq!(signals.resize.watcher_count(), 0);
}

#[test]
fn toggle_round_trip() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.toggle();
    assert!(surface.visible());
    popover.toggle();
    assert!(!surface.visible());
    popover.toggle();
    assert!(surface.visible());
}

#[test]
fn hide_is_idempotent() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    popover.hide();
    popover.hide();
    assert!(!surface.visible());
}

#[test]
fn show_is_idempotent_for_visibility() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    popover.show();
    assert!(surface.visible());
    assert_eq!(popover.active_placement(), Some(Side::Bottom));
}

#[test]
fn surface_without_native_toggle_falls_back_silently() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::without_native_toggle();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    assert!(surface.visible());
    popover.hide();
    assert!(!surface.visible());

    assert_eq!(surface.native_toggles(), 0);
    assert_eq!(surface.fallback_toggles(), 2);
}

#[test]
fn native_surface_never_uses_fallback() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    popover.show();
    popover.hide();
    assert_eq!(surface.native_toggles(), 2);
    assert_eq!(surface.fallback_toggles(), 0);
}

#[test]
fn placement_attribute_written_only_by_update_paths() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface.clone(), &signals);

    // show + two updates write; hide/toggle-visibility paths never do.
    popover.show();
    popover.update();
    popover.update();
    popover.hide();
    assert_eq!(surface.placements().len(), 3);
}

#[test]
fn gap_is_written_alongside_the_side() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(
        config().gap_xy(2.0, 6.0),
        geometry(),
        surface.clone(),
        &signals,
    );

    popover.update();
    let (side, gap) = surface.placements()[0];
    assert_eq!(side, Side::Bottom);
    assert_eq!(gap.along(Side::Bottom), 6.0);
    assert_eq!(gap.along(Side::Left), 2.0);
}

#[test]
fn with_panel_exposes_the_surface_read_only() {
    let signals = LayoutSignals::new();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry(), surface, &signals);

    popover.show();
    let visible = popover.with_panel(|panel| panel.visible());
    assert!(visible);
}

#[test]
fn viewport_resize_flips_placement_back() {
    let signals = LayoutSignals::new();
    let geometry = geometry();
    let surface = RecordingSurface::new();
    let popover = Popover::new(config(), geometry.clone(), surface.clone(), &signals);

    popover.update();
    assert_eq!(popover.active_placement(), Some(Side::Bottom));

    // Shrinking the window leaves no room below.
    geometry.set_viewport(Viewport::new(800.0, 530.0));
    signals.resize.emit();
    assert_eq!(popover.active_placement(), Some(Side::Top));

    // Restoring it moves the panel back down.
    geometry.set_viewport(Viewport::new(800.0, 600.0));
    signals.resize.emit();
    assert_eq!(popover.active_placement(), Some(Side::Bottom));
}

#[test]
fn phase_reaches_positioned_and_stays() {
    let signals = LayoutSignals::new();
    let popover = Popover::new(config(), geometry(), RecordingSurface::new(), &signals);

    assert_eq!(popover.phase(), Phase::Created);
    popover.update();
    assert_eq!(popover.phase(), Phase::Positioned);
    popover.hide();
    assert_eq!(popover.phase(), Phase::Positioned);
}

proptest! {
    // The controller must agree with a bare selector run over the same
    // snapshot: the reactive layer adds wiring, never placement logic.
    #[test]
    fn controller_matches_bare_selection(
        x in -200.0f64..1000.0,
        y in -200.0f64..800.0,
        w in 1.0f64..300.0,
        h in 1.0f64..300.0,
        pw in 1.0f64..500.0,
        ph in 1.0f64..500.0,
    ) {
        let anchor = Rect::new(x, y, w, h);
        let viewport = Viewport::new(800.0, 600.0);
        let footprint = Size::new(pw, ph);

        let signals = LayoutSignals::new();
        let geometry = SharedGeometry::new(anchor, viewport, footprint);
        let surface = RecordingSurface::new();
        let config = config();
        let expected = config.select(anchor, viewport, footprint);

        let popover = Popover::new(config, geometry, surface, &signals);
        popover.update();
        prop_assert_eq!(popover.active_placement(), Some(expected));
    }
}
