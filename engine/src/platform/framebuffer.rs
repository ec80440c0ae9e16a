use std::{ops::Range, sync::Arc};

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::{
    geometry::{Color, Rect},
    host::DrawContext,
};

/// Drawing context backed by an RGBA8 framebuffer the size of the logical
/// window. Fills happen on the CPU; `present` uploads and blits with wgpu.
pub struct PixelsContext {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
    color: [u8; 4],
}

impl PixelsContext {
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let (tex_w, tex_h) = if size.width == 0 || size.height == 0 {
            (width, height)
        } else {
            (size.width, size.height)
        };

        let surface = SurfaceTexture::new(tex_w, tex_h, window);
        let pixels = Pixels::new(width, height, surface)?;
        Ok(Self {
            pixels,
            width,
            height,
            color: [0, 0, 0, 0xFF],
        })
    }
}

impl DrawContext for PixelsContext {
    fn set_draw_color(&mut self, color: Color) {
        self.color = color.to_rgba();
    }

    fn clear(&mut self) {
        let full = Rect::new(0, 0, self.width as i32, self.height as i32);
        fill_region(self.pixels.frame_mut(), self.width, self.height, full, self.color);
    }

    fn fill_rect(&mut self, rect: Rect) {
        fill_region(self.pixels.frame_mut(), self.width, self.height, rect, self.color);
    }

    fn present(&mut self) {
        if let Err(e) = self.pixels.render() {
            log::warn!("present failed: {e}");
        }
    }
}

/// Column and row ranges of `rect` that fall inside a `width`×`height` buffer.
fn clip(rect: Rect, width: u32, height: u32) -> Option<(Range<usize>, Range<usize>)> {
    let (w, h) = (width as i32, height as i32);
    let x0 = rect.x.clamp(0, w);
    let x1 = rect.right().clamp(0, w);
    let y0 = rect.y.clamp(0, h);
    let y1 = rect.bottom().clamp(0, h);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as usize..x1 as usize, y0 as usize..y1 as usize))
}

fn fill_region(frame: &mut [u8], width: u32, height: u32, rect: Rect, color: [u8; 4]) {
    let Some((cols, rows)) = clip(rect, width, height) else { return; };
    let stride = width as usize * 4;

    for y in rows {
        let row = &mut frame[y * stride + cols.start * 4..y * stride + cols.end * 4];
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }
}
