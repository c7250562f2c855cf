use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::Window;

use crate::error::Result;

/// A pending one-shot timer. Dropping the handle cancels it if it hasn't fired yet.
pub struct Timeout {
    window: Window,
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(window: &Window, millis: u32, callback: F) -> Result<Self>
    where
        F: 'static + FnOnce(),
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let handle = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_millis(millis),
        )?;

        Ok(Self {
            window: window.clone(),
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.window.clear_timeout_with_handle(self.handle);
    }
}

/// A recurring timer. Runs until the handle is dropped.
pub struct Interval {
    window: Window,
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(window: &Window, millis: u32, callback: F) -> Result<Self>
    where
        F: 'static + FnMut(),
    {
        let closure = Closure::<dyn FnMut()>::new(callback);

        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            clamp_millis(millis),
        )?;

        Ok(Self {
            window: window.clone(),
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

fn clamp_millis(millis: u32) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}
