//! RequestAnimationFrame-based frame loop
//!
//! Calls a render function once per display frame with the elapsed time since
//! the previous frame. Pauses while the tab is hidden (Page Visibility API)
//! and restarts timing on resume, so a long background stay does not arrive as
//! one giant delta.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::error::{Result, UiError, log_error};

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Scheduling frames
    Running,
    /// Tab hidden; no frames scheduled
    Paused,
    /// Stopped for good
    Stopped,
}

/// Frame timing information
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Current timestamp from RAF (milliseconds)
    pub timestamp: f64,
    /// Delta time since last frame (milliseconds)
    pub delta: f64,
    /// Frames per second (calculated)
    pub fps: f64,
}

impl FrameTiming {
    /// First frame after start or resume: no time has passed yet
    #[must_use]
    pub const fn initial(timestamp: f64) -> Self {
        Self {
            timestamp,
            delta: 0.0,
            fps: 60.0,
        }
    }

    /// Calculate next frame timing
    #[must_use]
    pub fn next(self, timestamp: f64) -> Self {
        let delta = (timestamp - self.timestamp).max(0.0);
        let fps = if delta > 0.0 { 1000.0 / delta } else { 60.0 };

        Self {
            timestamp,
            delta,
            fps,
        }
    }

    /// Delta in seconds, the unit animation contexts tick in
    #[must_use]
    pub fn delta_seconds(&self) -> f64 {
        self.delta / 1000.0
    }
}

struct Shared {
    window: Window,
    request_id: Cell<Option<i32>>,
    timing: Cell<Option<FrameTiming>>,
    state: Cell<LoopState>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Shared {
    fn schedule(&self) -> Result<()> {
        if self.state.get() != LoopState::Running || self.request_id.get().is_some() {
            return Ok(());
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| UiError::AnimationFrame(format!("{e:?}")))?;
        self.request_id.set(Some(id));
        Ok(())
    }

    fn cancel(&self) -> Result<()> {
        if let Some(id) = self.request_id.take() {
            self.window
                .cancel_animation_frame(id)
                .map_err(|e| UiError::AnimationFrame(format!("{e:?}")))?;
        }
        Ok(())
    }

    fn on_frame(&self, timestamp: f64) -> FrameTiming {
        self.request_id.set(None);
        let timing = self
            .timing
            .get()
            .map_or_else(|| FrameTiming::initial(timestamp), |t| t.next(timestamp));
        self.timing.set(Some(timing));
        timing
    }

    fn on_visibility(&self, hidden: bool) -> Result<()> {
        match (hidden, self.state.get()) {
            (true, LoopState::Running) => {
                self.state.set(LoopState::Paused);
                self.cancel()
            }
            (false, LoopState::Paused) => {
                self.state.set(LoopState::Running);
                self.timing.set(None);
                self.schedule()
            }
            _ => Ok(()),
        }
    }
}

/// A running frame loop. Stopping (or dropping) it cancels the pending frame
/// and removes the visibility listener.
pub struct FrameLoop {
    shared: Rc<Shared>,
    document: Document,
    visibility: Option<Closure<dyn FnMut()>>,
}

impl FrameLoop {
    /// Start calling `render_fn` every frame.
    ///
    /// # Errors
    ///
    /// Returns error if the window or document is missing, or the first frame
    /// cannot be requested.
    pub fn start<F>(render_fn: F) -> Result<Self>
    where
        F: FnMut(FrameTiming) + 'static,
    {
        let window = web_sys::window().ok_or(UiError::WindowNotAvailable)?;
        let document = window.document().ok_or(UiError::DocumentNotAvailable)?;

        let shared = Rc::new(Shared {
            window,
            request_id: Cell::new(None),
            timing: Cell::new(None),
            state: Cell::new(LoopState::Running),
            callback: RefCell::new(None),
        });

        let frame_shared: Weak<Shared> = Rc::downgrade(&shared);
        let mut render_fn = render_fn;
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(shared) = frame_shared.upgrade() else {
                return;
            };
            let timing = shared.on_frame(timestamp);
            render_fn(timing);
            if let Err(e) = shared.schedule() {
                log_error("frame loop", &e);
            }
        }) as Box<dyn FnMut(f64)>);
        *shared.callback.borrow_mut() = Some(callback);

        let visibility_shared = Rc::downgrade(&shared);
        let visibility_document = document.clone();
        let visibility = Closure::wrap(Box::new(move || {
            let Some(shared) = visibility_shared.upgrade() else {
                return;
            };
            if let Err(e) = shared.on_visibility(visibility_document.hidden()) {
                log_error("frame loop visibility", &e);
            }
        }) as Box<dyn FnMut()>);
        document
            .add_event_listener_with_callback("visibilitychange", visibility.as_ref().unchecked_ref())
            .map_err(|e| UiError::AnimationFrame(format!("{e:?}")))?;

        let frame_loop = Self {
            shared,
            document,
            visibility: Some(visibility),
        };
        if frame_loop.document.hidden() {
            frame_loop.shared.state.set(LoopState::Paused);
        } else {
            frame_loop.shared.schedule()?;
        }
        Ok(frame_loop)
    }

    /// Current loop state
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.shared.state.get()
    }

    /// Stop the loop. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns error if cancelling the pending frame or removing the listener
    /// fails. The loop is stopped either way.
    pub fn stop(&mut self) -> Result<()> {
        self.shared.state.set(LoopState::Stopped);
        let cancelled = self.shared.cancel();
        self.shared.callback.borrow_mut().take();

        let removed = match self.visibility.take() {
            Some(listener) => self
                .document
                .remove_event_listener_with_callback(
                    "visibilitychange",
                    listener.as_ref().unchecked_ref(),
                )
                .map_err(|e| UiError::AnimationFrame(format!("{e:?}"))),
            None => Ok(()),
        };

        cancelled.and(removed)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
impl FrameLoop {
    /// No frame requested, no callback held, no listener registered.
    pub(crate) fn is_idle(&self) -> bool {
        self.shared.request_id.get().is_none()
            && self.shared.callback.borrow().is_none()
            && self.visibility.is_none()
    }
}

/// Resolves on the next display frame.
#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn next_frame() -> std::result::Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Err(e) = window.request_animation_frame(&resolve) {
            web_sys::console::error_1(&e);
        }
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.map(|_| ())
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) async fn frames(count: usize) -> std::result::Result<(), JsValue> {
    for _ in 0..count {
        next_frame().await?;
    }
    Ok(())
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log_error("frame loop stop", &e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_first_frame_when_timing_then_no_delta() {
        let timing = FrameTiming::initial(1000.0);
        assert!(timing.delta.abs() < f64::EPSILON);
        assert!((timing.fps - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn given_16ms_frame_when_timing_then_delta_and_fps_follow() {
        let timing = FrameTiming::initial(1000.0).next(1016.0);
        assert!((timing.delta - 16.0).abs() < f64::EPSILON);
        assert!((timing.fps - 62.5).abs() < 1e-9);
        assert!((timing.delta_seconds() - 0.016).abs() < 1e-12);
    }

    #[test]
    fn given_clock_going_backwards_when_timing_then_delta_clamped_to_zero() {
        let timing = FrameTiming::initial(1000.0).next(990.0);
        assert!(timing.delta.abs() < f64::EPSILON);
    }
}
