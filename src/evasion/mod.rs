//! Evasion controller: decides where the "No" button goes when someone reaches for it,
//! and where the marker graphic lands (the button's spot just before it moved).
//!
//! Three policies exist as alternatives (see [`PolicyKind`]); a controller runs exactly
//! one. Every policy shares the marker rule and the graceful fallbacks: missing geometry
//! never errors, it degrades to viewport-center assumptions.

use crate::config::{EvasionConfig, PolicyKind};
use crate::geometry::{ContainerGeometry, Point, Rect, Size, ViewportBounds};
use crate::random::RandomSource;

mod avoid;
mod hide;
mod radial;
mod session;

pub use session::Session;

// --- Data model ---------------------------------------------------------------

/// What the user did to the evasive control. Hover-start and click arrive as `Pointer`.
#[derive(Clone, Debug, PartialEq)]
pub enum InteractionEvent {
    Pointer {
        client: Point,
        /// Bounding rect of the button at event time, viewport coordinates.
        origin: Option<Rect>,
    },
    Touch {
        /// First entry of `touches`; `None` for an empty list.
        first_touch: Option<Point>,
        origin: Option<Rect>,
    },
}

impl InteractionEvent {
    pub fn origin(&self) -> Option<Rect> {
        let origin = match self {
            InteractionEvent::Pointer { origin, .. } | InteractionEvent::Touch { origin, .. } => {
                *origin
            }
        };
        origin.filter(|r| r.top.is_finite() && r.left.is_finite())
    }

    pub fn interaction_point(&self) -> Option<Point> {
        let p = match self {
            InteractionEvent::Pointer { client, .. } => Some(*client),
            InteractionEvent::Touch { first_touch, .. } => *first_touch,
        };
        p.filter(|p| p.x.is_finite() && p.y.is_finite())
    }
}

/// Coordinate space of a placed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorMode {
    /// `position:absolute` inside the card.
    Container,
    /// `position:fixed`, independent of scroll.
    Viewport,
}

/// Stacking relative to the sibling content of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Front,
    Behind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ElementPosition {
    /// Normal layout flow; only ever seen before the first interaction.
    #[default]
    Static,
    Placed {
        top: f64,
        left: f64,
        anchor: AnchorMode,
        layer: Layer,
    },
}

impl ElementPosition {
    pub fn placed(at: Point, anchor: AnchorMode, layer: Layer) -> Self {
        ElementPosition::Placed {
            top: at.y,
            left: at.x,
            anchor,
            layer,
        }
    }

    /// Top-left corner if placed relative to the viewport.
    pub fn viewport_corner(&self) -> Option<Point> {
        match *self {
            ElementPosition::Placed {
                top,
                left,
                anchor: AnchorMode::Viewport,
                ..
            } => Some(Point::new(left, top)),
            _ => None,
        }
    }
}

/// Where the marker graphic renders; always viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPosition {
    pub top: f64,
    pub left: f64,
}

// --- Controller ---------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct EvasionController {
    config: EvasionConfig,
}

impl EvasionController {
    pub fn new(config: EvasionConfig) -> Self {
        Self { config }
    }

    pub fn policy(&self) -> PolicyKind {
        self.config.policy
    }

    pub fn config(&self) -> &EvasionConfig {
        &self.config
    }

    /// Compute the marker (pre-move spot) and the element's next position.
    /// The marker is derived first, from pre-move geometry only.
    pub fn on_interact(
        &self,
        event: &InteractionEvent,
        container: Option<ContainerGeometry>,
        viewport: ViewportBounds,
        current: ElementPosition,
        rng: &mut impl RandomSource,
    ) -> (MarkerPosition, ElementPosition) {
        let size = event
            .origin()
            .map(|r| r.size_or(self.config.fallback_element_size()))
            .unwrap_or_else(|| self.config.fallback_element_size());
        let pre = pre_move_corner(event.origin(), current, viewport, size);

        let marker = self.marker_for(pre, viewport);

        // Unmounted card: treat the whole viewport as the container.
        let container = container.unwrap_or_else(|| viewport.into());
        let target = match self.config.policy {
            PolicyKind::Radial => radial::place(&self.config, container, rng),
            PolicyKind::HideInPlace => hide::place(container),
            PolicyKind::CursorAvoiding => {
                let pointer = event
                    .interaction_point()
                    .unwrap_or_else(|| viewport.center());
                avoid::place(&self.config, pre, size, pointer, viewport, rng)
            }
        };
        (marker, target)
    }

    fn marker_for(&self, pre: Point, viewport: ViewportBounds) -> MarkerPosition {
        let p = viewport.clamp_box(pre, self.config.marker_size(), 0.0);
        MarkerPosition {
            top: p.y,
            left: p.x,
        }
    }
}

/// Top-left of the element just before it moves. Prefers the live rect, then the last
/// viewport placement, then a box centered in the viewport.
fn pre_move_corner(
    origin: Option<Rect>,
    current: ElementPosition,
    viewport: ViewportBounds,
    size: Size,
) -> Point {
    if let Some(r) = origin {
        return r.top_left();
    }
    if let Some(p) = current.viewport_corner() {
        return p;
    }
    let c = viewport.center();
    Point::new(c.x - size.width / 2.0, c.y - size.height / 2.0)
}
