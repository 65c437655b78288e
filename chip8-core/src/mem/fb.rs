use crate::consts::display::{HEIGHT, WIDTH};

///
/// The 64x32 monochrome framebuffer. Pixels are only ever composited by
/// XOR (the draw instruction) or cleared wholesale, so the grid is plain
/// booleans with no color or depth.
///
#[derive(Clone)]
pub struct FrameBuffer {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl FrameBuffer {
    pub fn new() -> FrameBuffer {
        FrameBuffer {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }

    /// All pixels off. Implements `00E0`.
    pub fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
    }

    ///
    /// XOR-toggle one pixel, returning true when a previously lit pixel was
    /// turned off. That return value is what the draw instruction
    /// accumulates into VF as the collision flag. Coordinates must already
    /// be wrapped by the caller.
    ///
    pub fn flip(&mut self, x: usize, y: usize) -> bool {
        let pixel = &mut self.pixels[y][x];
        let collision = *pixel;
        *pixel = !*pixel;
        collision
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[y][x]
    }

    /// Read-only view for the host's renderer.
    pub fn rows(&self) -> &[[bool; WIDTH]; HEIGHT] {
        &self.pixels
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|row| row.iter().all(|p| !*p))
    }

    ///
    /// Render the grid as text, one character per pixel. This is a debug
    /// aid for hosts without a display backend, not a display format.
    ///
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
        for row in self.pixels.iter() {
            for p in row.iter() {
                out.push(if *p { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
