use crate::core::{ElementId, Role, TargetTable, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// All matches for `selector`; an invalid selector yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("[targets] bad selector {:?}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Add a listener that receives the event cast to `E`; other events are ignored.
pub fn on<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = wrap_handler(handler);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Same as [`on`] but registered as a passive listener.
pub fn on_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let closure = wrap_handler(handler);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn wrap_handler<E>(mut handler: impl FnMut(E) + 'static) -> Closure<dyn FnMut(web::Event)>
where
    E: JsCast + 'static,
{
    Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>)
}

/// Run `f` once after `delay_ms`. Returns the timer handle.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .ok()
}

/// Run `f` once on the next display frame.
pub fn request_frame_once(window: &web::Window, f: impl FnOnce() + 'static) -> Option<i32> {
    let cb = Closure::once_into_js(f);
    window.request_animation_frame(cb.unchecked_ref()).ok()
}

/// Resolves once the document has been parsed.
pub async fn document_ready(document: &web::Document) {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    if state != "loading" {
        return;
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let cb = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
    });
    _ = JsFuture::from(promise).await;
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

pub fn apply_styles<'a>(
    el: &web::Element,
    declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let style = html.style();
        for (name, value) in declarations {
            _ = style.set_property(name, value);
        }
    }
}

pub fn computed_style(window: &web::Window, el: &web::Element, property: &str) -> Option<String> {
    window
        .get_computed_style(el)
        .ok()
        .flatten()
        .and_then(|s| s.get_property_value(property).ok())
}

pub fn offset_top(el: &web::Element) -> Option<f64> {
    el.dyn_ref::<web::HtmlElement>().map(|h| h.offset_top() as f64)
}

/// Elements behind the `ElementId` handles handed to the core.
#[derive(Default)]
pub struct ElementRegistry {
    elements: Vec<web::Element>,
}

impl ElementRegistry {
    /// Handle for `el`, reusing the existing one for the same node.
    pub fn register(&mut self, el: &web::Element) -> ElementId {
        if let Some(i) = self.elements.iter().position(|e| e.is_same_node(Some(el.as_ref()))) {
            return ElementId(i as u32);
        }
        self.elements.push(el.clone());
        ElementId((self.elements.len() - 1) as u32)
    }

    #[inline]
    pub fn get(&self, id: ElementId) -> Option<&web::Element> {
        self.elements.get(id.0 as usize)
    }

    pub fn js_targets(&self, ids: &[ElementId]) -> js_sys::Array {
        ids.iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Resolve every role's selector once into injected handles.
pub fn resolve_targets(document: &web::Document, registry: &mut ElementRegistry) -> TargetTable {
    let mut table = TargetTable::new();
    for role in Role::ALL.iter().copied() {
        let found: Vec<web::Element> = if role.is_unique() {
            query_one(document, role.selector()).into_iter().collect()
        } else {
            query_all(document, role.selector())
        };
        if found.is_empty() {
            log::debug!("[targets] no match for {:?} ({})", role, role.selector());
        }
        for el in &found {
            table.insert(role, registry.register(el));
        }
    }
    log::info!(
        "[targets] {} handles over {} elements",
        table.total(),
        registry.len()
    );
    table
}
