/// Axis-aligned rectangle in window pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rectangle centered in a `width`×`height` area.
    pub fn centered(width: i32, height: i32, w: i32, h: i32) -> Self {
        Self {
            x: width / 2 - w / 2,
            y: height / 2 - h / 2,
            w,
            h,
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_in_window() {
        let r = Rect::centered(800, 600, 300, 300);
        assert_eq!(r, Rect::new(250, 150, 300, 300));
    }

    #[test]
    fn hex_colors_are_opaque() {
        let c = Color::from_hex(0xF05454);
        assert_eq!(c.to_rgba(), [0xF0, 0x54, 0x54, 0xFF]);
    }

    #[test]
    fn containment_includes_edges() {
        let outer = Rect::new(0, 0, 10, 10);
        assert!(outer.contains_rect(&Rect::new(0, 0, 10, 10)));
        assert!(outer.contains_rect(&Rect::new(8, 8, 2, 2)));
        assert!(!outer.contains_rect(&Rect::new(9, 0, 2, 2)));
        assert!(!outer.contains_rect(&Rect::new(-1, 0, 2, 2)));
    }
}
