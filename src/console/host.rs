//! What the console needs from the window that contains it.

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Window-system collaborator queried by the session each tick.
pub trait WindowHost {
    /// Area the console may draw into.
    fn content_rect(&self) -> Rect;

    fn is_visible(&self) -> bool;

    /// Whether the console's window is the topmost one at `point`.
    fn is_topmost_under_pointer(&self, point: Point) -> bool;

    /// True while the window is being resized or dragged.
    fn is_resizing(&self) -> bool;
}

/// Notifications the session raises for its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The user closed the console (`exit`/`quit`); hide it and drop its
    /// task-list icon.
    Closed,
}
