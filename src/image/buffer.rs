use super::{BinaryView, BLACK, WHITE};

/// Owned binary frame buffer, tightly packed.
///
/// Used by tests and demos to paint synthetic tracks and by frame-source
/// adapters that need a place to binarize into.
#[derive(Clone, Debug)]
pub struct BinaryImage {
    pub w: usize,
    pub h: usize,
    data: Vec<u8>,
}

impl BinaryImage {
    /// All-black frame of the given dimensions.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![BLACK; w * h],
        }
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    /// Fills `[x0, x1) x [y0, y1)` with `v`. Ranges are clamped to the frame.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, v: u8) {
        let x1 = x1.min(self.w);
        let y1 = y1.min(self.h);
        for y in y0..y1 {
            let row = y * self.w;
            self.data[row + x0.min(x1)..row + x1].fill(v);
        }
    }

    /// Shorthand for painting a white region.
    pub fn fill_white(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        self.fill_rect(x0, y0, x1, y1, WHITE);
    }

    /// Zeroes a `border`-pixel frame on all four sides, the padding the
    /// boundary tracer relies on to stay inside the image.
    pub fn paint_border(&mut self, border: usize) {
        let b = border.min(self.w / 2).min(self.h / 2);
        self.fill_rect(0, 0, self.w, b, BLACK);
        self.fill_rect(0, self.h - b, self.w, self.h, BLACK);
        self.fill_rect(0, 0, b, self.h, BLACK);
        self.fill_rect(self.w - b, 0, self.w, self.h, BLACK);
    }

    pub fn view(&self) -> BinaryView<'_> {
        BinaryView {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_paints_all_sides() {
        let mut img = BinaryImage::new(16, 12);
        img.fill_white(0, 0, 16, 12);
        img.paint_border(2);
        assert_eq!(img.get(0, 5), BLACK);
        assert_eq!(img.get(15, 5), BLACK);
        assert_eq!(img.get(8, 0), BLACK);
        assert_eq!(img.get(8, 11), BLACK);
        assert_eq!(img.get(8, 5), WHITE);
    }
}
