//! Decorative noise: floating background bubbles and the hearts on the "accepted"
//! screen. Generated once, handed to the page, never read back.

use crate::random::RandomSource;

/// One rising bubble. `left` is a percentage of the viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub id: usize,
    pub size_px: f64,
    pub left_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Bubble {
    pub fn style(&self) -> String {
        format!(
            "width:{s:.1}px; height:{s:.1}px; left:{l:.2}%; animation-duration:{d:.2}s; animation-delay:{dl:.2}s;",
            s = self.size_px,
            l = self.left_pct,
            d = self.duration_s,
            dl = self.delay_s
        )
    }
}

/// Bubbles 20-60px wide, anywhere across, rising over 10-20s, staggered up to 20s.
pub fn bubbles(count: usize, rng: &mut impl RandomSource) -> Vec<Bubble> {
    (0..count)
        .map(|id| Bubble {
            id,
            size_px: rng.range(20.0, 60.0),
            left_pct: rng.range(0.0, 100.0),
            duration_s: rng.range(10.0, 20.0),
            delay_s: rng.range(0.0, 20.0),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heart {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
}

impl Heart {
    pub fn style(&self) -> String {
        format!(
            "position:absolute; left:{:.2}%; top:{:.2}%; animation-delay:{:.2}s; opacity:0.6; font-size:30px;",
            self.left_pct, self.top_pct, self.delay_s
        )
    }
}

pub fn hearts(count: usize, rng: &mut impl RandomSource) -> Vec<Heart> {
    (0..count)
        .map(|_| Heart {
            left_pct: rng.range(0.0, 100.0),
            top_pct: rng.range(0.0, 100.0),
            delay_s: rng.range(0.0, 5.0),
        })
        .collect()
}

/// A decorative flower glyph and its inline placement inside a positioned parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flower {
    pub glyph: &'static str,
    pub style: &'static str,
}

/// Big flowers hanging off the question card's corners.
pub const CARD_FLOWERS: [Flower; 4] = [
    Flower {
        glyph: "🌸",
        style: "top:-40px; left:-40px; font-size:60px; animation:wydm-bounce 1s infinite;",
    },
    Flower {
        glyph: "🌺",
        style: "top:-40px; right:-40px; font-size:60px; animation:wydm-bounce 1s 150ms infinite;",
    },
    Flower {
        glyph: "🌹",
        style: "bottom:-40px; left:-40px; font-size:60px; animation:wydm-bounce 1s 300ms infinite;",
    },
    Flower {
        glyph: "🌻",
        style: concat!(
            "bottom:-40px; right:-40px; font-size:60px; ",
            "animation:wydm-bounce 1s 500ms infinite;"
        ),
    },
];

/// Small blossoms over opposite corners of the cover photo.
pub const COVER_FLOWERS: [Flower; 2] = [
    Flower {
        glyph: "🌸",
        style: concat!(
            "top:8px; left:8px; z-index:20; font-size:30px; opacity:0.8; ",
            "animation:wydm-spin 8s linear infinite;"
        ),
    },
    Flower {
        glyph: "🌸",
        style: concat!(
            "bottom:8px; right:8px; z-index:20; font-size:30px; opacity:0.8; ",
            "animation:wydm-spin 8s linear infinite reverse;"
        ),
    },
];

/// Pulsing blossoms framing the photo on the accepted screen.
pub const CELEBRATION_FLOWERS: [Flower; 2] = [
    Flower {
        glyph: "🌸",
        style: "top:-16px; right:-16px; font-size:60px; animation:wydm-pulse 2s infinite;",
    },
    Flower {
        glyph: "🌸",
        style: "bottom:-16px; left:-16px; font-size:60px; animation:wydm-pulse 2s 100ms infinite;",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedRandom;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bubble_fields_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        let bs = bubbles(200, &mut rng);
        assert_eq!(bs.len(), 200);
        for (i, b) in bs.iter().enumerate() {
            assert_eq!(b.id, i);
            assert!((20.0..60.0).contains(&b.size_px));
            assert!((0.0..100.0).contains(&b.left_pct));
            assert!((10.0..20.0).contains(&b.duration_s));
            assert!((0.0..20.0).contains(&b.delay_s));
        }
    }

    #[test]
    fn bubble_draw_order_is_size_left_duration_delay() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.5, 1.0 - 1e-9, 0.25]);
        let b = bubbles(1, &mut rng)[0];
        assert_eq!(b.size_px, 20.0);
        assert_eq!(b.left_pct, 50.0);
        assert!(b.duration_s < 20.0 && b.duration_s > 19.99);
        assert_eq!(b.delay_s, 5.0);
        assert!(b.style().contains("left:50.00%"));
    }

    #[test]
    fn heart_fields_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(5);
        for h in hearts(100, &mut rng) {
            assert!((0.0..100.0).contains(&h.left_pct));
            assert!((0.0..100.0).contains(&h.top_pct));
            assert!((0.0..5.0).contains(&h.delay_s));
        }
    }

    #[test]
    fn card_corners_each_get_a_different_flower() {
        let glyphs: Vec<&str> = CARD_FLOWERS.iter().map(|f| f.glyph).collect();
        assert_eq!(glyphs, ["🌸", "🌺", "🌹", "🌻"]);
        let corners = [
            "top:-40px; left",
            "top:-40px; right",
            "bottom:-40px; left",
            "bottom:-40px; right",
        ];
        for corner in corners {
            assert_eq!(
                CARD_FLOWERS.iter().filter(|f| f.style.starts_with(corner)).count(),
                1,
                "corner {corner}"
            );
        }
    }

    #[test]
    fn photo_flowers_sit_on_opposite_corners() {
        for set in [COVER_FLOWERS, CELEBRATION_FLOWERS] {
            assert!(set.iter().all(|f| f.glyph == "🌸"));
            assert!(set[0].style.starts_with("top:"));
            assert!(set[1].style.starts_with("bottom:"));
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(bubbles(0, &mut rng).is_empty());
        assert!(hearts(0, &mut rng).is_empty());
    }
}
