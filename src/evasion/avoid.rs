// Cursor-avoiding jump: a random hop of bounded length from the current spot, kept on
// screen, flipped (and if needed pushed) away from the pointer.

use std::f64::consts::TAU;

use super::{AnchorMode, ElementPosition, Layer};
use crate::config::EvasionConfig;
use crate::geometry::{Point, Size, ViewportBounds};
use crate::random::RandomSource;

/// `pre` is the element's top-left before the move, `pointer` the interaction point.
pub(super) fn place(
    cfg: &EvasionConfig,
    pre: Point,
    size: Size,
    pointer: Point,
    viewport: ViewportBounds,
    rng: &mut impl RandomSource,
) -> ElementPosition {
    let distance = rng.range(cfg.jump_min, cfg.jump_max);
    let angle = rng.next_unit() * TAU;
    let (dx, dy) = (angle.cos() * distance, angle.sin() * distance);

    let clamp = |p: Point| viewport.clamp_box(p, size, cfg.edge_margin);
    let radius = cfg.repulsion_radius;

    let mut target = clamp(Point::new(pre.x + dx, pre.y + dy));
    if target.distance_to(pointer) < radius {
        // A reflection that clamps back toward the pointer is no improvement
        let reflected = clamp(Point::new(pre.x - dx, pre.y - dy));
        if reflected.distance_to(pointer) > target.distance_to(pointer) {
            target = reflected;
        }
    }
    if target.distance_to(pointer) < radius {
        // Still crowding the pointer (jump sideways to it): push out to the radius.
        let away = unit_or(
            Point::new(target.x - pointer.x, target.y - pointer.y),
            Point::new(dx, dy),
        );
        target = clamp(Point::new(
            pointer.x + away.x * radius,
            pointer.y + away.y * radius,
        ));
    }

    ElementPosition::placed(target, AnchorMode::Viewport, Layer::Front)
}

/// Normalize `v`; degenerate vectors use `fallback`, then +x.
fn unit_or(v: Point, fallback: Point) -> Point {
    for c in [v, fallback] {
        let len = c.x.hypot(c.y);
        if len > f64::EPSILON {
            return Point::new(c.x / len, c.y / len);
        }
    }
    Point::new(1.0, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const SIZE: Size = Size::new(120.0, 60.0);

    fn corner(pos: ElementPosition) -> Point {
        pos.viewport_corner().expect("viewport placement")
    }

    #[test]
    fn accepts_far_jump_without_reflection() {
        let cfg = EvasionConfig::default();
        // distance 150, angle 0
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
        let pos = place(
            &cfg,
            Point::new(500.0, 500.0),
            SIZE,
            Point::new(40.0, 40.0),
            ViewportBounds::new(1000.0, 800.0),
            &mut rng,
        );
        assert_eq!(corner(pos), Point::new(650.0, 500.0));
    }

    #[test]
    fn reflects_when_landing_on_pointer() {
        let cfg = EvasionConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.5, 0.0]);
        let pos = place(
            &cfg,
            Point::new(500.0, 500.0),
            SIZE,
            Point::new(660.0, 510.0),
            ViewportBounds::new(1000.0, 800.0),
            &mut rng,
        );
        assert_eq!(corner(pos), Point::new(350.0, 500.0));
    }

    #[test]
    fn clamps_into_margin() {
        let cfg = EvasionConfig::default();
        // distance 200 toward +x from near the right edge
        let mut rng = ScriptedRandom::new(vec![1.0, 0.0]);
        let pos = place(
            &cfg,
            Point::new(800.0, 100.0),
            SIZE,
            Point::new(100.0, 700.0),
            ViewportBounds::new(1000.0, 800.0),
            &mut rng,
        );
        assert_eq!(corner(pos), Point::new(870.0, 100.0));
    }

    #[test]
    fn sideways_pointer_gets_pushed_to_radius() {
        let cfg = EvasionConfig::default();
        // hop 100 to the right, pointer directly below the start
        let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);
        let pointer = Point::new(500.0, 600.0);
        let pos = place(
            &cfg,
            Point::new(500.0, 500.0),
            SIZE,
            pointer,
            ViewportBounds::new(1000.0, 800.0),
            &mut rng,
        );
        let p = corner(pos);
        assert!((p.distance_to(pointer) - 150.0).abs() < 1e-6);
    }

    #[test]
    fn cornered_start_keeps_the_forward_jump() {
        let cfg = EvasionConfig::default();
        // distance 120 at 45 degrees, out of the top-left corner with the pointer on it;
        // the reflection clamps right back onto the pointer
        let mut rng = ScriptedRandom::new(vec![0.2, 0.125]);
        let pointer = Point::new(10.0, 10.0);
        let pos = place(
            &cfg,
            Point::new(10.0, 10.0),
            SIZE,
            pointer,
            ViewportBounds::new(1000.0, 800.0),
            &mut rng,
        );
        let p = corner(pos);
        assert!(p.x > 90.0 && p.y > 90.0, "fell back into the corner: {p:?}");
        assert!((p.distance_to(pointer) - 150.0).abs() < 1e-6);
    }

    #[test]
    fn tiny_viewport_pins_to_margin() {
        let cfg = EvasionConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.3, 0.7]);
        let pos = place(
            &cfg,
            Point::new(5.0, 5.0),
            SIZE,
            Point::new(5.0, 5.0),
            ViewportBounds::new(50.0, 30.0),
            &mut rng,
        );
        assert_eq!(corner(pos), Point::new(10.0, 10.0));
    }

    #[test]
    fn bounded_and_repelled_for_random_inputs() {
        let cfg = EvasionConfig::default();
        let mut rng = SmallRng::seed_from_u64(0xDA7E);
        let mut scenario = SmallRng::seed_from_u64(1234);
        for _ in 0..5_000 {
            let vw = scenario.range(200.0, 1600.0);
            let vh = scenario.range(200.0, 1000.0);
            let viewport = ViewportBounds::new(vw, vh);
            let pre = Point::new(scenario.range(0.0, vw), scenario.range(0.0, vh));
            let pointer = Point::new(scenario.range(0.0, vw), scenario.range(0.0, vh));
            let p = corner(place(&cfg, pre, SIZE, pointer, viewport, &mut rng));

            let (lo_x, hi_x) = (10.0, vw - SIZE.width - 10.0);
            let (lo_y, hi_y) = (10.0, vh - SIZE.height - 10.0);
            assert!(p.x >= lo_x && p.x <= hi_x, "x {} outside [{lo_x}, {hi_x}]", p.x);
            assert!(p.y >= lo_y && p.y <= hi_y, "y {} outside [{lo_y}, {hi_y}]", p.y);

            let on_edge = p.x == lo_x || p.x == hi_x || p.y == lo_y || p.y == hi_y;
            let far = p.distance_to(pointer) >= 150.0 - 1e-6;
            assert!(far || on_edge, "{p:?} too close to {pointer:?} and not on an edge");
        }
    }
}
