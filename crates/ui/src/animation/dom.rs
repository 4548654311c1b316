//! DOM bindings for the animation context.

use plantventory_core::animation::{AnimationTarget, Props, TargetScope};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::error::{UiError, log_error};

/// Selects targets beneath one root element.
#[derive(Debug, Clone)]
pub struct DomScope {
    root: Element,
}

impl DomScope {
    #[must_use]
    pub const fn new(root: Element) -> Self {
        Self { root }
    }
}

impl TargetScope for DomScope {
    type Target = DomTarget;

    fn select(&self, class_name: &str) -> Vec<DomTarget> {
        let Ok(nodes) = self.root.query_selector_all(&format!(".{class_name}")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomTarget)
            .collect()
    }
}

/// An element animated through its inline style.
///
/// The saved state is the raw `style` attribute, so reverting also drops any
/// property an animation added.
#[derive(Debug, Clone, PartialEq)]
pub struct DomTarget(HtmlElement);

impl AnimationTarget for DomTarget {
    type Saved = Option<String>;

    fn capture(&self) -> Option<String> {
        self.0.get_attribute("style")
    }

    fn restore(&self, saved: Option<String>) {
        let restored = match saved {
            Some(style) => self.0.set_attribute("style", &style),
            None => self.0.remove_attribute("style"),
        };
        if let Err(e) = restored {
            log_error("restore style", &UiError::Storage(format!("{e:?}")));
        }
    }

    fn render(&self, props: &Props) {
        let style = self.0.style();
        let written = style
            .set_property("transform", &props.transform())
            .and_then(|()| style.set_property("opacity", &props.opacity.to_string()));
        if let Err(e) = written {
            log_error("render style", &UiError::AnimationFrame(format!("{e:?}")));
        }
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use super::*;
    use plantventory_core::hero::HeroAnimations;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn hero_root() -> Result<Element, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let root = document.create_element("section")?;
        root.set_inner_html(
            r#"<div class="hero-float" style="color: red"></div><span class="hero-badge"></span>"#,
        );
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&root)?;
        Ok(root)
    }

    #[wasm_bindgen_test]
    fn given_root_when_selecting_then_only_matching_descendants() -> Result<(), JsValue> {
        let scope = DomScope::new(hero_root()?);
        assert_eq!(scope.select("hero-float").len(), 1);
        assert_eq!(scope.select("hero-badge").len(), 1);
        assert!(scope.select("hero-pulse").is_empty());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn given_animated_hero_when_unmounted_then_inline_styles_restored() -> Result<(), JsValue> {
        let root = hero_root()?;
        let mut hero = HeroAnimations::mount(Some(DomScope::new(root.clone())))
            .ok_or_else(|| JsValue::from_str("hero did not mount"))?;

        assert!(hero.tick(0.1) > 0);
        let float = root
            .query_selector(".hero-float")?
            .ok_or_else(|| JsValue::from_str("missing float"))?;
        assert!(float.get_attribute("style").is_some_and(|s| s.contains("opacity")));

        hero.unmount();

        assert_eq!(float.get_attribute("style").as_deref(), Some("color: red"));
        let badge = root
            .query_selector(".hero-badge")?
            .ok_or_else(|| JsValue::from_str("missing badge"))?;
        assert_eq!(badge.get_attribute("style"), None);
        Ok(())
    }
}
