//! Browser platform: `setTimeout` clock and keyboard input

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, Window};

use super::{Callback, FrameClock, InputEvent};
use crate::error::PlatformError;

/// Clock backed by `window.setTimeout` and `performance.now()`
pub struct TimeoutClock {
    window: Window,
}

impl TimeoutClock {
    pub fn new() -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or(PlatformError::NoWindow)?;
        Ok(Self { window })
    }
}

impl FrameClock for TimeoutClock {
    fn schedule_once(&self, callback: Callback, delay_ms: u32) {
        let closure = Closure::once_into_js(move || callback());
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.unchecked_ref(),
                delay_ms as i32,
            )
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

/// Forward recognised `keydown` events to `handler`
pub fn listen_keyboard<F>(window: &Window, mut handler: F) -> Result<(), PlatformError>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        if let Some(input) = InputEvent::from_key_code(&event.code()) {
            // Keep arrow keys from scrolling the page
            event.prevent_default();
            handler(input);
        }
    });
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| PlatformError::Js(format!("{e:?}")))?;
    closure.forget();
    Ok(())
}
