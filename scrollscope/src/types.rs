/// A scroll offset in pixels.
///
/// `x`/`y` and `left()`/`top()` name the same values; both spellings are offered because hosts
/// tend to think in one or the other.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }
}

/// Raw extents and offsets of a scrollable surface, as read in one go.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_left: f64,
    pub scroll_top: f64,
}

impl Dimensions {
    /// Returns a copy where every field is finite and non-negative, and the content extents are
    /// at least the visible extents.
    pub fn normalized(self) -> Self {
        let client_width = non_negative(self.client_width);
        let client_height = non_negative(self.client_height);
        Self {
            scroll_width: non_negative(self.scroll_width).max(client_width),
            scroll_height: non_negative(self.scroll_height).max(client_height),
            client_width,
            client_height,
            scroll_left: non_negative(self.scroll_left),
            scroll_top: non_negative(self.scroll_top),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.scroll_left, self.scroll_top)
    }

    /// Largest reachable `scroll_left`, floored at 0.
    pub fn max_scroll_left(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Largest reachable `scroll_top`, floored at 0.
    pub fn max_scroll_top(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// The currently visible rectangle, in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect {
            x: self.scroll_left,
            y: self.scroll_top,
            width: self.client_width,
            height: self.client_height,
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalDirection {
    Left,
    Right,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalDirection {
    Up,
    Down,
    #[default]
    None,
}

/// The pair of per-axis direction symbols, without history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub horizontal: HorizontalDirection,
    pub vertical: VerticalDirection,
}

impl Heading {
    pub fn is_moving(&self) -> bool {
        self.horizontal != HorizontalDirection::None || self.vertical != VerticalDirection::None
    }
}

/// Scroll direction derived from two consecutive samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Direction {
    pub horizontal: HorizontalDirection,
    pub vertical: VerticalDirection,
    /// `true` iff either axis is moving.
    pub is_scrolling: bool,
    /// The most recent moving heading seen before this one, if any.
    pub last: Option<Heading>,
}

impl Direction {
    pub fn new(heading: Heading, last: Option<Heading>) -> Self {
        Self {
            horizontal: heading.horizontal,
            vertical: heading.vertical,
            is_scrolling: heading.is_moving(),
            last,
        }
    }

    pub fn heading(&self) -> Heading {
        Heading {
            horizontal: self.horizontal,
            vertical: self.vertical,
        }
    }

    /// A direction at rest that remembers `self` as its last motion.
    pub fn settled(&self) -> Self {
        let last = if self.is_scrolling {
            Some(self.heading())
        } else {
            self.last
        };
        Self::new(Heading::default(), last)
    }
}

/// Scroll velocity in pixels per millisecond.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    /// `hypot(x, y)`.
    pub magnitude: f64,
    /// Monotonic timestamp (ms) of the sample this velocity was measured at.
    pub timestamp: u64,
}

impl Velocity {
    pub fn zero(timestamp: u64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            magnitude: 0.0,
            timestamp,
        }
    }
}

/// Exact and near-edge flags for each scroll boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundaries {
    pub is_at_top: bool,
    pub is_at_bottom: bool,
    pub is_at_left: bool,
    pub is_at_right: bool,
    pub near_top: bool,
    pub near_bottom: bool,
    pub near_left: bool,
    pub near_right: bool,
}

/// Normalized scroll position on each axis, in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub vertical: f64,
    pub horizontal: f64,
}

/// How a commanded scroll should be executed by the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// A partial scroll target: axes left as `None` keep their current offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl ScrollOffset {
    pub fn left(left: f64) -> Self {
        Self {
            left: Some(left),
            top: None,
        }
    }

    pub fn top(top: f64) -> Self {
        Self {
            left: None,
            top: Some(top),
        }
    }

    pub fn both(left: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            top: Some(top),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none()
    }

    /// Drops non-finite components.
    pub(crate) fn finite(self) -> Self {
        Self {
            left: self.left.filter(|v| v.is_finite()),
            top: self.top.filter(|v| v.is_finite()),
        }
    }
}

impl From<Position> for ScrollOffset {
    fn from(p: Position) -> Self {
        Self::both(p.x, p.y)
    }
}

/// An axis-aligned rectangle in surface content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `other` lies entirely inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether `self` and `other` share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && other.right() > self.x
            && other.y < self.bottom()
            && other.bottom() > self.y
    }
}
