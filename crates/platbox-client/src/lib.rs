pub mod app;
mod diag;
#[cfg(target_family = "wasm")]
mod input;
pub mod interval;
pub mod renderer;
pub mod settings;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();
}

#[cfg(target_family = "wasm")]
pub use driver::Game;

#[cfg(target_family = "wasm")]
mod driver {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;

    use platbox_core::WorldState;

    use crate::app::App;
    use crate::interval::Interval;
    use crate::renderer::CanvasHandle;
    use crate::settings::ClientConfig;

    /// A running game bound to one canvas. Dropping it (`game.free()` from JS)
    /// stops the tick driver the same way `stop()` does.
    #[wasm_bindgen]
    pub struct Game {
        app: Rc<RefCell<App>>,
        ticker: Interval<Closure<dyn FnMut()>>,
    }

    #[wasm_bindgen]
    impl Game {
        /// Build the world, size the canvas, wire up input and start ticking.
        /// `canvas_id` overrides the id from the embedded config.
        pub fn launch(canvas_id: Option<String>) -> Result<Game, JsValue> {
            let config = ClientConfig::embedded();
            let canvas_id = canvas_id.unwrap_or_else(|| config.render.canvas_id.clone());

            let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
            let canvas = CanvasHandle::from_element_id(&canvas_id)
                .map_err(|e| JsValue::from_str(&e))?;

            let world = WorldState::new(&config.game);
            canvas.size_to(world.bounds());

            let app = Rc::new(RefCell::new(App::new(world, config.render)));
            app.borrow().redraw(canvas.surface().as_ref());
            crate::input::attach_listeners(&app, &canvas);

            let tick = {
                let app = Rc::clone(&app);
                Closure::<dyn FnMut()>::new(move || {
                    let surface = canvas.surface();
                    app.borrow_mut().frame(surface.as_ref());
                })
            };
            let interval_ms = config.game.tick_interval_ms.max(1.0) as i32;
            let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                interval_ms,
            )?;

            crate::diag::console_log!("platbox started on #{canvas_id} every {interval_ms} ms");

            let ticker = Interval::new(interval_id, tick, |id| {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(id);
                }
            });
            Ok(Game { app, ticker })
        }

        /// Stop the tick driver. Input listeners stay attached but have no
        /// visible effect once ticking stops.
        pub fn stop(&mut self) {
            self.ticker.stop();
        }

        pub fn is_running(&self) -> bool {
            self.ticker.is_running()
        }

        /// JSON dump of the world state, for debugging from the console.
        pub fn snapshot(&self) -> Result<String, JsValue> {
            serde_json::to_string(&self.app.borrow().world)
                .map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }
}
