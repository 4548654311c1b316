//! Browser host for the hero animations.
//!
//! [`HeroRuntime`] binds a [`HeroAnimations`] context to the hero's root
//! element and drives it from a [`FrameLoop`]. Unmounting stops the loop and
//! reverts every element the programs touched.

pub mod dom;
pub mod raf;

use std::cell::RefCell;
use std::rc::Rc;

use plantventory_core::hero::HeroAnimations;
use web_sys::Element;

pub use dom::{DomScope, DomTarget};
pub use raf::{FrameLoop, FrameTiming, LoopState};

use crate::error::{Result, log_error};

pub struct HeroRuntime {
    animations: Rc<RefCell<Option<HeroAnimations<DomScope>>>>,
    frames: FrameLoop,
}

impl HeroRuntime {
    /// Start the hero programs under `root`. `Ok(None)` when there is no root.
    ///
    /// # Errors
    ///
    /// Returns error if the frame loop cannot start. The context is reverted
    /// before returning.
    pub fn mount(root: Option<Element>) -> Result<Option<Self>> {
        let Some(animations) = HeroAnimations::mount(root.map(DomScope::new)) else {
            return Ok(None);
        };
        let animations = Rc::new(RefCell::new(Some(animations)));

        let ticking = Rc::clone(&animations);
        let frames = FrameLoop::start(move |timing| {
            if let Ok(mut guard) = ticking.try_borrow_mut() {
                if let Some(hero) = guard.as_mut() {
                    hero.tick(timing.delta_seconds());
                }
            }
        })?;

        Ok(Some(Self { animations, frames }))
    }

    /// Stop the loop and revert the context.
    pub fn unmount(mut self) {
        if let Err(e) = self.frames.stop() {
            log_error("hero unmount", &e);
        }
        if let Some(hero) = self.animations.borrow_mut().take() {
            hero.unmount();
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    use crate::animation::raf::frames;

    wasm_bindgen_test_configure!(run_in_browser);

    fn hero_root() -> std::result::Result<Element, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document.create_element("section")?;
        root.set_inner_html(r#"<div class="hero-float" style="color: red"></div>"#);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&root)?;
        Ok(root)
    }

    fn float_style(root: &Element) -> std::result::Result<Option<String>, JsValue> {
        Ok(root
            .query_selector(".hero-float")?
            .ok_or_else(|| JsValue::from_str("missing float"))?
            .get_attribute("style"))
    }

    #[wasm_bindgen_test]
    async fn given_running_hero_when_unmounted_then_frames_stop_writing()
    -> std::result::Result<(), JsValue> {
        let root = hero_root()?;
        let runtime = HeroRuntime::mount(Some(root.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .ok_or_else(|| JsValue::from_str("hero did not mount"))?;

        frames(3).await?;
        assert!(float_style(&root)?.is_some_and(|s| s.contains("opacity")));

        runtime.unmount();
        assert_eq!(float_style(&root)?.as_deref(), Some("color: red"));

        frames(5).await?;
        assert_eq!(float_style(&root)?.as_deref(), Some("color: red"));
        Ok(())
    }

    #[wasm_bindgen_test]
    fn given_no_root_when_mounting_then_skipped() -> std::result::Result<(), JsValue> {
        let runtime = HeroRuntime::mount(None).map_err(|e| JsValue::from_str(&e.to_string()))?;
        assert!(runtime.is_none());
        Ok(())
    }
}
