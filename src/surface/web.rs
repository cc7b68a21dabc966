//! Browser surface backed by `web-sys`
//!
//! Listeners are `Closure`s that forward a cloned `PageCommand` to the
//! dispatcher handed in at construction. Page listeners live as long as the
//! page (`forget`); owned listeners are kept here until their owner is
//! released. Frame callbacks are one-shot closures.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::page::PageCommand;
use crate::systems::effects::RevealOptions;

use super::{SurfaceError, Trigger, UiSurface};

pub type Dispatcher = Rc<dyn Fn(PageCommand<Element>)>;

type Listener = Closure<dyn FnMut(Event)>;

struct OwnedListener {
    owner: Element,
    target: Element,
    event: &'static str,
    closure: Listener,
}

pub struct WebSurface {
    window: Window,
    document: Document,
    dispatch: Dispatcher,
    owned: Vec<OwnedListener>,
}

impl WebSurface {
    pub fn new(dispatch: Dispatcher) -> Result<Self, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::MissingWindow)?;
        let document = window.document().ok_or(SurfaceError::MissingDocument)?;
        Ok(Self {
            window,
            document,
            dispatch,
            owned: Vec::new(),
        })
    }

    fn event_name(trigger: Trigger) -> &'static str {
        match trigger {
            Trigger::Click | Trigger::ClickSelf | Trigger::Navigate => "click",
            Trigger::PointerEnter => "mouseenter",
            Trigger::PointerLeave => "mouseleave",
        }
    }

    fn listener(&self, node: &Element, trigger: Trigger, command: PageCommand<Element>) -> Listener {
        let dispatch = self.dispatch.clone();
        let current = node.clone();
        Closure::wrap(Box::new(move |evt: Event| {
            match trigger {
                Trigger::ClickSelf => {
                    let on_self = evt
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .map_or(false, |t| t == current);
                    if !on_self {
                        return;
                    }
                }
                Trigger::Navigate => evt.prevent_default(),
                _ => {}
            }
            dispatch(command.clone());
        }) as Box<dyn FnMut(_)>)
    }
}

impl UiSurface for WebSurface {
    type Node = Element;

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn find(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn closest(&self, node: &Element, selector: &str) -> Option<Element> {
        node.closest(selector).ok().flatten()
    }

    fn create(&mut self, tag: &str) -> Result<Element, SurfaceError> {
        Ok(self.document.create_element(tag)?)
    }

    fn append(&mut self, parent: &Element, child: &Element) -> Result<(), SurfaceError> {
        parent.append_child(child)?;
        Ok(())
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn set_class(&mut self, node: &Element, class: &str) {
        node.set_class_name(class);
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &Element) -> Option<String> {
        node.text_content()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_css_text(&mut self, node: &Element, css: &str) -> Result<(), SurfaceError> {
        node.set_attribute("style", css)?;
        Ok(())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<(), SurfaceError> {
        let html = node
            .dyn_ref::<HtmlElement>()
            .ok_or(SurfaceError::Unsupported("inline style on non-HTML element"))?;
        html.style().set_property(property, value)?;
        Ok(())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_into_view(&mut self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn listen(
        &mut self,
        node: &Element,
        trigger: Trigger,
        command: PageCommand<Element>,
    ) -> Result<(), SurfaceError> {
        let closure = self.listener(node, trigger, command);
        node.add_event_listener_with_callback(Self::event_name(trigger), closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn listen_owned(
        &mut self,
        owner: &Element,
        node: &Element,
        trigger: Trigger,
        command: PageCommand<Element>,
    ) -> Result<(), SurfaceError> {
        let event = Self::event_name(trigger);
        let closure = self.listener(node, trigger, command);
        node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.owned.push(OwnedListener {
            owner: owner.clone(),
            target: node.clone(),
            event,
            closure,
        });
        Ok(())
    }

    // A listener may release its own owner while it runs; wasm-bindgen defers
    // freeing that closure until the call returns.
    fn release(&mut self, owner: &Element) {
        let (released, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.owned).into_iter().partition(|l| l.owner == *owner);
        self.owned = kept;
        for l in released {
            if let Err(e) = l
                .target
                .remove_event_listener_with_callback(l.event, l.closure.as_ref().unchecked_ref())
            {
                console_warn!("could not remove {} listener: {:?}", l.event, e);
            }
        }
    }

    fn listen_scroll(&mut self, command: PageCommand<Element>) -> Result<(), SurfaceError> {
        let dispatch = self.dispatch.clone();
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            dispatch(command.clone());
        }) as Box<dyn FnMut(_)>);
        self.window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn observe_reveal(&mut self, nodes: &[Element], options: RevealOptions) -> Result<(), SurfaceError> {
        let dispatch = self.dispatch.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    dispatch(PageCommand::Reveal { node: entry.target() });
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for node in nodes {
            observer.observe(node);
        }
        callback.forget();
        Ok(())
    }

    fn request_frame(&mut self, command: PageCommand<Element>) -> Result<(), SurfaceError> {
        let dispatch = self.dispatch.clone();
        let callback = Closure::once_into_js(move |_ts: f64| dispatch(command));
        self.window
            .request_animation_frame(callback.unchecked_ref())?;
        Ok(())
    }
}
