use platbox_core::{TickOutcome, WorldState};

use crate::renderer::{Surface, draw_world};
use crate::settings::RenderSettings;

/// Client-side state shared between the tick driver and event listeners.
pub struct App {
    pub world: WorldState,
    pub render: RenderSettings,
    /// Frames skipped because no drawing surface was available.
    pub skipped_frames: u64,
    surface_missing: bool,
}

impl App {
    pub fn new(world: WorldState, render: RenderSettings) -> Self {
        Self {
            world,
            render,
            skipped_frames: 0,
            surface_missing: false,
        }
    }

    /// One tick of the driver: draw the current state, then advance it.
    ///
    /// Without a surface the frame is skipped entirely, so the simulation
    /// never runs ahead of what was drawn.
    pub fn frame<S: Surface>(&mut self, surface: Option<&S>) -> Option<TickOutcome> {
        let Some(surface) = surface else {
            if !self.surface_missing {
                crate::diag::console_warn!("2D context unavailable, skipping frames");
                self.surface_missing = true;
            }
            self.skipped_frames += 1;
            return None;
        };
        self.surface_missing = false;

        draw_world(surface, &self.world, &self.render);
        Some(self.world.tick())
    }

    /// Repaint without advancing (window resize).
    pub fn redraw<S: Surface>(&self, surface: Option<&S>) {
        if let Some(surface) = surface {
            draw_world(surface, &self.world, &self.render);
        }
    }

    /// Feed a key event into the input flags. Returns true if the key steers
    /// the player, so the caller can suppress the browser default.
    pub fn on_key(&mut self, code: &str, pressed: bool) -> bool {
        if pressed {
            self.world.input.on_key_down(code)
        } else {
            self.world.input.on_key_up(code)
        }
    }
}
