use platbox_core::{Bounds, WorldState};

use crate::settings::RenderSettings;

/// Something that can be cleared and filled with solid rectangles.
pub trait Surface {
    fn clear(&self, width: f64, height: f64);
    fn fill_rect(&self, color: &str, x: f64, y: f64, width: f64, height: f64);
}

/// Redraw the whole frame: background, obstacles, then the player on top.
pub fn draw_world<S: Surface + ?Sized>(surface: &S, world: &WorldState, colors: &RenderSettings) {
    let Bounds { width, height } = world.bounds();
    surface.clear(width, height);
    surface.fill_rect(&colors.background, 0.0, 0.0, width, height);

    for o in world.obstacles() {
        surface.fill_rect(&colors.obstacle, o.x, o.y, o.width, o.height);
    }

    let p = &world.player;
    surface.fill_rect(&colors.player, p.x, p.y, p.width(), p.height());
}

/// Pixel size of a drawing buffer that covers `bounds`. Fractional extents
/// round up so the buffer is never smaller than the area the player can reach.
pub fn canvas_size(bounds: Bounds) -> (u32, u32) {
    (bounds.width.ceil() as u32, bounds.height.ceil() as u32)
}

#[cfg(target_family = "wasm")]
pub use web::{CanvasHandle, CanvasSurface};

#[cfg(target_family = "wasm")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use platbox_core::Bounds;

    use super::Surface;

    /// The `<canvas>` element the game draws into.
    #[derive(Clone)]
    pub struct CanvasHandle {
        canvas: HtmlCanvasElement,
    }

    impl CanvasHandle {
        /// Look up the canvas element by id.
        pub fn from_element_id(id: &str) -> Result<Self, String> {
            let window = web_sys::window().ok_or("No window")?;
            let document = window.document().ok_or("No document")?;
            let canvas = document
                .get_element_by_id(id)
                .ok_or_else(|| format!("No #{id}"))?
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| "Not a canvas element")?;
            Ok(Self { canvas })
        }

        /// Set the drawing buffer to the world's logical size.
        pub fn size_to(&self, bounds: Bounds) {
            let (width, height) = super::canvas_size(bounds);
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }

        /// The 2D context, if the browser will hand one out right now.
        pub fn surface(&self) -> Option<CanvasSurface> {
            let ctx = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()?
                .dyn_into::<CanvasRenderingContext2d>()
                .ok()?;
            Some(CanvasSurface { ctx })
        }
    }

    pub struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl Surface for CanvasSurface {
        fn clear(&self, width: f64, height: f64) {
            self.ctx.clear_rect(0.0, 0.0, width, height);
        }

        fn fill_rect(&self, color: &str, x: f64, y: f64, width: f64, height: f64) {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(x, y, width, height);
        }
    }
}
