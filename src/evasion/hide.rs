// Hide in place: the button drops to the card center, layered under the cover image.

use super::{AnchorMode, ElementPosition, Layer};
use crate::geometry::ContainerGeometry;

pub(super) fn place(container: ContainerGeometry) -> ElementPosition {
    ElementPosition::placed(container.center(), AnchorMode::Container, Layer::Behind)
}
