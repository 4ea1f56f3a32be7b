use anyhow::{anyhow, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

pub type Task = Box<dyn FnOnce()>;

/// Deferred, fire-and-forget callbacks. There is no cancellation handle.
pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()>;
}

/// `window.setTimeout` backed scheduler.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScheduler;

impl Scheduler for WindowScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> Result<()> {
        let window = window().ok_or_else(|| anyhow!("no window to schedule on"))?;
        // The closure frees itself after its single invocation.
        let callback = Closure::once_into_js(move || task());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map(|_| ())
            .map_err(|e| anyhow!("setTimeout failed: {:?}", e))
    }
}
