use super::WHITE;

/// Borrowed view over a binarized frame (values 0 or 255).
///
/// The buffer is owned by the frame source; the view is valid for one
/// processing cycle. Coordinates are signed because the maze walker does
/// signed neighbour arithmetic; callers stay inside the padded interior.
#[derive(Clone, Copy, Debug)]
pub struct BinaryView<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> BinaryView<'a> {
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        debug_assert!(x >= 0 && (x as usize) < self.w);
        debug_assert!(y >= 0 && (y as usize) < self.h);
        self.data[y as usize * self.stride + x as usize]
    }

    #[inline]
    pub fn is_white(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == WHITE
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.w as i32
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.h as i32
    }
}
