//! Rendering boundary: the registry talks to a [`SparkSurface`] and never to
//! the DOM directly, so the tracking core runs (and tests) without a browser.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::model::{SparkKey, SparkStyle};

/// Spark rendering thickness in pixels.
const SPARK_THICKNESS_PX: f64 = 16.0;

/// Where spark visuals live. One visual per key; keys arrive via `mount`
/// before any other call and leave via `unmount`.
pub trait SparkSurface {
    /// Creates the visual for `key` in a hidden, unstyled state.
    fn mount(&mut self, key: &SparkKey);
    /// Makes the visual reflect `style`.
    fn restyle(&mut self, key: &SparkKey, style: &SparkStyle);
    /// Re-randomizes the visual's cosmetic jitter offset.
    fn refresh_jitter(&mut self, key: &SparkKey);
    /// Removes the visual for `key`.
    fn unmount(&mut self, key: &SparkKey);
}

/// DOM-backed surface: one absolutely positioned div per spark, appended to a
/// dedicated container element.
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    nodes: HashMap<SparkKey, HtmlElement>,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Self {
        let document = web_sys::window()
            .expect("no global `window` exists")
            .document()
            .expect("should have a document on window");
        Self {
            document,
            container,
            nodes: HashMap::new(),
        }
    }

    fn set_props(node: &HtmlElement, props: &[(&str, String)]) {
        let style = node.style();
        for (name, value) in props {
            let _ = style.set_property(name, value);
        }
    }
}

impl SparkSurface for DomSurface {
    fn mount(&mut self, key: &SparkKey) {
        let node: HtmlElement = self
            .document
            .create_element("div")
            .expect("failed to create spark element")
            .dyn_into()
            .expect("created element is not an HtmlElement");
        node.set_id(key.as_str());
        node.set_class_name("spark");
        Self::set_props(&node, &[("display", "none".to_string())]);
        self.container
            .append_child(&node)
            .expect("failed to attach spark element");
        self.nodes.insert(key.clone(), node);
    }

    fn restyle(&mut self, key: &SparkKey, style: &SparkStyle) {
        let node = self.nodes.get(key).expect("restyle for unmounted spark");
        Self::set_props(
            node,
            &[
                ("position", "absolute".to_string()),
                ("display", "block".to_string()),
                // Inset by half the thickness so the anchor sits on the line.
                (
                    "left",
                    format!("{}px", style.anchor.x - SPARK_THICKNESS_PX / 2.0),
                ),
                ("top", format!("{}px", style.anchor.y)),
                ("height", format!("{SPARK_THICKNESS_PX}px")),
                ("width", format!("{:.0}px", style.length)),
                ("transform", format!("rotate({:.1}deg)", style.angle_deg)),
            ],
        );
        node.set_text_content(Some(&style.label));
    }

    fn refresh_jitter(&mut self, key: &SparkKey) {
        let node = self.nodes.get(key).expect("jitter for unmounted spark");
        let offset = js_sys::Math::random() * 100.0;
        Self::set_props(
            node,
            &[("background-position", format!("{offset:.0}% 0%"))],
        );
    }

    fn unmount(&mut self, key: &SparkKey) {
        let node = self.nodes.remove(key).expect("unmount for unmounted spark");
        node.remove();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records every surface call so tests can assert on the render traffic.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub mounted: Vec<SparkKey>,
        pub restyled: Vec<(SparkKey, SparkStyle)>,
        pub jittered: Vec<SparkKey>,
        pub unmounted: Vec<SparkKey>,
    }

    impl SparkSurface for RecordingSurface {
        fn mount(&mut self, key: &SparkKey) {
            self.mounted.push(key.clone());
        }

        fn restyle(&mut self, key: &SparkKey, style: &SparkStyle) {
            self.restyled.push((key.clone(), style.clone()));
        }

        fn refresh_jitter(&mut self, key: &SparkKey) {
            self.jittered.push(key.clone());
        }

        fn unmount(&mut self, key: &SparkKey) {
            self.unmounted.push(key.clone());
        }
    }
}
