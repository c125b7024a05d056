use crate::core::{ElementId, TweenSink, TweenVars};
use crate::dom::ElementRegistry;
use js_sys::{Object, Reflect};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

// The engine and its plugins are loaded as page globals.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &JsValue, vars: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &JsValue, to: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ScrollTrigger, js_name = refresh)]
    fn scroll_trigger_refresh() -> Result<(), JsValue>;
}

const PLUGINS: [&str; 2] = ["ScrollTrigger", "ScrollToPlugin"];

/// Register the scroll plugins that are present on the page.
pub fn register_plugins() {
    let global = js_sys::global();
    for name in PLUGINS {
        let plugin = Reflect::get(&global, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
        if plugin.is_undefined() {
            log::warn!("[gsap] {} not loaded", name);
            continue;
        }
        if let Err(e) = gsap_register_plugin(&plugin) {
            log::warn!("[gsap] registerPlugin({}) failed: {:?}", name, e);
        }
    }
}

/// Recompute scroll-trigger start/end positions after a layout change.
pub fn refresh_scroll_triggers() {
    if let Err(e) = scroll_trigger_refresh() {
        log::warn!("[gsap] ScrollTrigger.refresh failed: {:?}", e);
    }
}

/// Forwards core tween requests to the page's `gsap` global.
#[derive(Clone)]
pub struct GsapSink {
    registry: Rc<ElementRegistry>,
}

impl GsapSink {
    pub fn new(registry: Rc<ElementRegistry>) -> Self {
        Self { registry }
    }

    #[allow(deprecated)]
    fn vars(&self, vars: &TweenVars) -> JsValue {
        let js = match JsValue::from_serde(vars) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[gsap] vars serialization failed: {}", e);
                return Object::new().into();
            }
        };
        if let Some(st) = vars.scroll_trigger {
            if let Some(el) = self.registry.get(st.trigger) {
                let trigger = Object::new();
                _ = Reflect::set(&trigger, &"trigger".into(), el);
                _ = Reflect::set(&trigger, &"start".into(), &st.start.into());
                _ = Reflect::set(&js, &"scrollTrigger".into(), &trigger);
            }
        }
        js
    }

    fn targets(&self, ids: &[ElementId]) -> JsValue {
        self.registry.js_targets(ids).into()
    }
}

fn report(call: &str, result: Result<JsValue, JsValue>) {
    if let Err(e) = result {
        log::warn!("[gsap] {} failed: {:?}", call, e);
    }
}

impl TweenSink for GsapSink {
    fn to(&mut self, targets: &[ElementId], vars: &TweenVars) {
        report("to", gsap_to(&self.targets(targets), &self.vars(vars)));
    }

    fn from(&mut self, targets: &[ElementId], vars: &TweenVars) {
        report("from", gsap_from(&self.targets(targets), &self.vars(vars)));
    }

    fn from_to(&mut self, targets: &[ElementId], from: &TweenVars, to: &TweenVars) {
        report(
            "fromTo",
            gsap_from_to(&self.targets(targets), &self.vars(from), &self.vars(to)),
        );
    }

    fn scroll_to(&mut self, y: f64, vars: &TweenVars) {
        let Some(window) = web::window() else {
            return;
        };
        let js = self.vars(vars);
        let scroll = Object::new();
        _ = Reflect::set(&scroll, &"y".into(), &y.into());
        _ = Reflect::set(&scroll, &"autoKill".into(), &false.into());
        _ = Reflect::set(&js, &"scrollTo".into(), &scroll);
        report("to(window)", gsap_to(&window.into(), &js));
    }
}
