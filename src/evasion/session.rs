use super::{EvasionController, ElementPosition, InteractionEvent, MarkerPosition};
use crate::geometry::{ContainerGeometry, ViewportBounds};
use crate::random::RandomSource;

/// Per-page UI state. Owned by the page and threaded through the event handlers.
///
/// Lifecycle is monotonic: the element leaves `Static` on the first interaction and never
/// returns, the marker becomes `Some` and stays, and acceptance cannot be undone.
#[derive(Clone, Debug, Default)]
pub struct Session {
    accepted: bool,
    interactions: u32,
    element: ElementPosition,
    marker: Option<MarkerPosition>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one reach for the evasive control. Returns the new marker and element
    /// positions, or `None` once accepted (the control is gone by then).
    pub fn interact(
        &mut self,
        controller: &EvasionController,
        event: &InteractionEvent,
        container: Option<ContainerGeometry>,
        viewport: ViewportBounds,
        rng: &mut impl RandomSource,
    ) -> Option<(MarkerPosition, ElementPosition)> {
        if self.accepted {
            return None;
        }
        self.interactions = self.interactions.saturating_add(1);
        let (marker, element) =
            controller.on_interact(event, container, viewport, self.element, rng);
        self.marker = Some(marker);
        self.element = element;
        log::debug!(
            "evasion #{} ({:?}): marker {:?} -> {:?}",
            self.interactions,
            controller.policy(),
            marker,
            element
        );
        Some((marker, element))
    }

    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn interaction_count(&self) -> u32 {
        self.interactions
    }

    pub fn element(&self) -> ElementPosition {
        self.element
    }

    pub fn marker(&self) -> Option<MarkerPosition> {
        self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn hover(origin: Rect) -> InteractionEvent {
        InteractionEvent::Pointer {
            client: Point::new(origin.left + 5.0, origin.top + 5.0),
            origin: Some(origin),
        }
    }

    #[test]
    fn fresh_session_is_static() {
        let s = Session::new();
        assert!(!s.is_accepted());
        assert_eq!(s.interaction_count(), 0);
        assert_eq!(s.element(), ElementPosition::Static);
        assert_eq!(s.marker(), None);
    }

    #[test]
    fn accept_blocks_further_evasion() {
        let ctl = EvasionController::default();
        let vp = ViewportBounds::new(1000.0, 800.0);
        let mut rng = SmallRng::seed_from_u64(3);
        let mut s = Session::new();
        let first = hover(Rect::new(400.0, 400.0, 120.0, 60.0));
        s.interact(&ctl, &first, None, vp, &mut rng);
        let before = s.element();

        s.accept();
        s.accept();
        assert!(s.is_accepted());
        let late = hover(Rect::new(10.0, 10.0, 120.0, 60.0));
        let out = s.interact(&ctl, &late, None, vp, &mut rng);
        assert!(out.is_none());
        assert_eq!(s.interaction_count(), 1);
        assert_eq!(s.element(), before);
    }
}
