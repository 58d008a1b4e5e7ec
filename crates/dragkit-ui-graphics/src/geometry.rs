//! Geometric primitives: Point, IntSize, IntRect, IntEdgeInsets

use std::ops::AddAssign;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Frame of a child in its parent's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn right(&self) -> i32 {
        self.left + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub const fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left.saturating_add(dx),
            top: self.top.saturating_add(dy),
            ..*self
        }
    }

    /// Half-open hit test against a fractional pointer position.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left as f32
            && y >= self.top as f32
            && x < self.right() as f32
            && y < self.bottom() as f32
    }
}

/// Padding values for each edge of a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntEdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntEdgeInsets {
    pub const ZERO: IntEdgeInsets = IntEdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn uniform(all: i32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn from_components(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl AddAssign for IntEdgeInsets {
    fn add_assign(&mut self, rhs: Self) {
        self.left += rhs.left;
        self.top += rhs.top;
        self.right += rhs.right;
        self.bottom += rhs.bottom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_translation() {
        let rect = IntRect::new(10, 20, 50, 40);
        assert_eq!(rect.right(), 60);
        assert_eq!(rect.bottom(), 60);

        let moved = rect.translate(-5, 15);
        assert_eq!(moved, IntRect::new(5, 35, 50, 40));
        assert_eq!(moved.size(), IntSize::new(50, 40));
    }

    #[test]
    fn translation_saturates() {
        let rect = IntRect::new(100, -100, 50, 50);
        let moved = rect.translate(i32::MAX, i32::MIN);
        assert_eq!(moved, IntRect::new(i32::MAX, i32::MIN, 50, 50));
    }

    #[test]
    fn contains_is_half_open() {
        let rect = IntRect::new(0, 0, 50, 50);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(49.5, 49.5));
        assert!(!rect.contains(50.0, 10.0));
        assert!(!rect.contains(10.0, -0.5));
    }

    #[test]
    fn insets_accumulate() {
        let mut insets = IntEdgeInsets::symmetric(4, 2);
        insets += IntEdgeInsets::uniform(1);
        assert_eq!(insets, IntEdgeInsets::from_components(5, 3, 5, 3));
        assert!(!insets.is_zero());
        assert!(IntEdgeInsets::default().is_zero());
    }
}
