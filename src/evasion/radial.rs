// Radial jump: one of four compass points a fixed distance from the card's image
// center, with a little perpendicular jitter.

use super::{AnchorMode, ElementPosition, Layer};
use crate::config::EvasionConfig;
use crate::geometry::{ContainerGeometry, Point};
use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    fn from_unit(r: f64) -> Self {
        // r == 1.0 would index past the end
        match ((r * 4.0).floor() as i64).clamp(0, 3) {
            0 => Direction::Top,
            1 => Direction::Bottom,
            2 => Direction::Left,
            _ => Direction::Right,
        }
    }
}

pub(super) fn place(
    cfg: &EvasionConfig,
    container: ContainerGeometry,
    rng: &mut impl RandomSource,
) -> ElementPosition {
    let c = container.center();
    let center = Point::new(c.x, c.y + cfg.center_offset_y);
    let direction = Direction::from_unit(rng.next_unit());
    let jitter = (rng.next_unit() - 0.5) * 2.0 * cfg.radial_jitter;
    let target = offset(center, direction, cfg.radial_distance, jitter);
    ElementPosition::placed(target, AnchorMode::Container, Layer::Front)
}

fn offset(center: Point, direction: Direction, distance: f64, jitter: f64) -> Point {
    match direction {
        Direction::Top => Point::new(center.x + jitter, center.y - distance),
        Direction::Bottom => Point::new(center.x + jitter, center.y + distance),
        Direction::Left => Point::new(center.x - distance, center.y + jitter),
        Direction::Right => Point::new(center.x + distance, center.y + jitter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn direction_buckets_are_uniform_quarters() {
        assert_eq!(Direction::from_unit(0.0), Direction::Top);
        assert_eq!(Direction::from_unit(0.26), Direction::Bottom);
        assert_eq!(Direction::from_unit(0.5), Direction::Left);
        assert_eq!(Direction::from_unit(0.99), Direction::Right);
        assert_eq!(Direction::from_unit(1.0), Direction::Right);
    }

    #[test]
    fn top_with_zero_jitter() {
        // center (400, 300) after the image offset -> card 800 x 560
        let cfg = EvasionConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5]);
        let pos = place(&cfg, ContainerGeometry::new(800.0, 560.0), &mut rng);
        assert_eq!(
            pos,
            ElementPosition::Placed {
                top: 60.0,
                left: 400.0,
                anchor: AnchorMode::Container,
                layer: Layer::Front,
            }
        );
    }

    #[test]
    fn right_with_full_jitter() {
        let cfg = EvasionConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.8, 1.0]);
        let pos = place(&cfg, ContainerGeometry::new(800.0, 560.0), &mut rng);
        assert_eq!(
            pos,
            ElementPosition::placed(
                Point::new(640.0, 320.0),
                AnchorMode::Container,
                Layer::Front
            )
        );
    }

    #[test]
    fn every_target_sits_on_a_compass_arm() {
        let cfg = EvasionConfig::default();
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..500 {
            let ElementPosition::Placed { top, left, .. } =
                place(&cfg, ContainerGeometry::new(800.0, 560.0), &mut rng)
            else {
                panic!("radial always places");
            };
            let dx = (left - 400.0).abs();
            let dy = (top - 300.0).abs();
            let on_vertical = (dy - 240.0).abs() < 1e-9 && dx <= 20.0;
            let on_horizontal = (dx - 240.0).abs() < 1e-9 && dy <= 20.0;
            assert!(on_vertical || on_horizontal, "({left}, {top}) off-arm");
        }
    }
}
