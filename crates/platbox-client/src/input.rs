use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::app::App;
use crate::renderer::CanvasHandle;

/// Attach keyboard listeners to the document and a resize listener to the
/// window. Listeners live as long as the page.
pub fn attach_listeners(app: &Rc<RefCell<App>>, canvas: &CanvasHandle) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    // Keyboard: keydown
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                // Arrow keys would otherwise scroll the page
                if app.borrow_mut().on_key(&evt.code(), true) {
                    evt.prevent_default();
                }
            },
        );
        if let Err(e) =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            crate::diag::console_warn!("keydown listener failed: {e:?}");
        }
        closure.forget();
    }

    // Keyboard: keyup
    {
        let app = Rc::clone(app);
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |evt: web_sys::KeyboardEvent| {
                app.borrow_mut().on_key(&evt.code(), false);
            },
        );
        if let Err(e) =
            document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
        {
            crate::diag::console_warn!("keyup listener failed: {e:?}");
        }
        closure.forget();
    }

    // Repaint on resize
    {
        let app = Rc::clone(app);
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            app.borrow().redraw(canvas.surface().as_ref());
        });
        if let Err(e) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            crate::diag::console_warn!("resize listener failed: {e:?}");
        }
        closure.forget();
    }
}
