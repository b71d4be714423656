//! Screen-space geometry shared by the evasion policies and the page layer.
//! All values are CSS pixels; `x` runs with `left`, `y` runs with `top`.

/// A point in client (viewport) or container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Bounding rectangle as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Width/height if both are usable, otherwise `fallback`.
    pub fn size_or(&self, fallback: Size) -> Size {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            Size::new(self.width, self.height)
        } else {
            fallback
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible interaction surface (`window.innerWidth/innerHeight`).
/// Never cached: the page reads it fresh on every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    width: f64,
    height: f64,
}

impl ViewportBounds {
    /// Negative, NaN or infinite dimensions collapse to 0.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a top-left corner so a box of `size` stays inside the viewport
    /// with `margin` on every side.
    pub fn clamp_box(&self, p: Point, size: Size, margin: f64) -> Point {
        Point::new(
            clamp_axis(p.x, margin, self.width - size.width - margin),
            clamp_axis(p.y, margin, self.height - size.height - margin),
        )
    }
}

/// Card dimensions; absent when the card is not mounted yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    pub width: f64,
    pub height: f64,
}

impl ContainerGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: non_negative(width),
            height: non_negative(height),
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<ViewportBounds> for ContainerGeometry {
    fn from(v: ViewportBounds) -> Self {
        Self::new(v.width, v.height)
    }
}

/// Clamp into `[lo, hi]`; an empty range (viewport smaller than the box) pins to `lo`.
pub fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if hi < lo || v.is_nan() {
        lo
    } else {
        v.clamp(lo, hi)
    }
}

/// Negative, NaN and infinite inputs become 0.
fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
