use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Event, HtmlElement, ResizeObserver, Window, js_sys::Array};

use crate::config::Config;
use crate::models::{Dimensions, ResizeError, ResizeOptions, SurfaceKey};
use crate::services::filter::{ResizeCallback, ResizeFilter, Surface};
use crate::services::registry::{Attach, Detach, ResizeRegistry};
use crate::utils::debounce::TimeoutScheduler;

/// A browser surface whose size can be observed.
#[derive(Clone, Debug, PartialEq)]
pub enum WebSurface {
    Window(Window),
    Element(HtmlElement),
}

impl WebSurface {
    pub fn window() -> Result<Self, ResizeError> {
        web_sys::window()
            .map(Self::Window)
            .ok_or(ResizeError::NoWindow)
    }

    /// Registry key: the window, or the element's `id`.
    pub fn key(&self) -> Result<SurfaceKey, ResizeError> {
        match self {
            Self::Window(_) => Ok(SurfaceKey::Window),
            Self::Element(element) => {
                let id = element.id();
                if id.is_empty() {
                    Err(ResizeError::MissingId)
                } else {
                    Ok(SurfaceKey::Element(id))
                }
            }
        }
    }
}

impl Surface for WebSurface {
    fn dimensions(&self) -> Dimensions {
        match self {
            Self::Window(window) => window_dimensions(window),
            Self::Element(element) => {
                Dimensions::new(element.client_width(), element.client_height())
            }
        }
    }
}

/// Viewport size without scrollbars, falling back to `innerWidth/innerHeight`.
fn window_dimensions(window: &Window) -> Dimensions {
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        return Dimensions::new(root.client_width(), root.client_height());
    }

    let read = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(0, |v| v as i32)
    };
    Dimensions::new(read(window.inner_width()), read(window.inner_height()))
}

/// Raw notification delivered to the callback.
#[derive(Clone, Debug)]
pub enum ResizeEvent {
    /// The window's `resize` event
    Window(Event),
    /// `ResizeObserverEntry` list for an observed element
    Observed(Array),
}

pub type WebFilter = ResizeFilter<ResizeEvent, WebSurface, TimeoutScheduler>;

enum Subscription {
    Listener { _listener: EventListener },
    Observer { _guard: ObserverGuard },
}

struct ObserverGuard {
    observer: ResizeObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A filter wired to a browser surface.
///
/// Dropping it unsubscribes from the surface and cancels any pending dispatch.
pub struct WebResize {
    filter: WebFilter,
    _subscription: Subscription,
}

impl WebResize {
    pub fn filter(&self) -> &WebFilter {
        &self.filter
    }
}

impl Drop for WebResize {
    fn drop(&mut self) {
        self.filter.detach();
    }
}

impl Detach for WebResize {
    fn release(self) {
        drop(self);
    }
}

/// Attaches a filter to the window's `resize` event.
///
/// Returns `Ok(None)` when `callback` is `None`.
pub fn attach_window(
    options: ResizeOptions,
    callback: Option<ResizeCallback<ResizeEvent>>,
) -> Result<Option<WebResize>, ResizeError> {
    let window = web_sys::window().ok_or(ResizeError::NoWindow)?;
    let surface = WebSurface::Window(window.clone());

    let Some(filter) = ResizeFilter::new(options, callback, surface, TimeoutScheduler) else {
        return Ok(None);
    };

    // Listener only holds a weak handle
    let weak = filter.downgrade();
    let listener = EventListener::new(&window, Config::RESIZE_EVENT, move |event| {
        if let Some(filter) = weak.upgrade() {
            filter.handle_raw_event(ResizeEvent::Window(event.clone()));
        }
    });

    Ok(Some(WebResize {
        filter,
        _subscription: Subscription::Listener {
            _listener: listener,
        },
    }))
}

/// Attaches a filter to an element through a `ResizeObserver`.
///
/// The observer reports once as soon as observation starts, so dimensions are
/// always verified: that first report only reaches the callback if the size
/// changed since the snapshot.
pub fn attach_element(
    element: HtmlElement,
    options: ResizeOptions,
    callback: Option<ResizeCallback<ResizeEvent>>,
) -> Result<Option<WebResize>, ResizeError> {
    // Filter out the initial report
    let options = options.with_verify_dimensions(true);
    let surface = WebSurface::Element(element.clone());

    let Some(filter) = ResizeFilter::new(options, callback, surface, TimeoutScheduler) else {
        return Ok(None);
    };

    // Observer callback only holds a weak handle
    let weak = filter.downgrade();
    let closure = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
        if let Some(filter) = weak.upgrade() {
            filter.handle_raw_event(ResizeEvent::Observed(entries));
        }
    });

    let observer = ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| ResizeError::Observer(format!("{e:?}")))?;
    observer.observe(&element);

    // Guard disconnects the observer when the attachment is dropped

    Ok(Some(WebResize {
        filter,
        _subscription: Subscription::Observer {
            _guard: ObserverGuard {
                observer,
                _closure: closure,
            },
        },
    }))
}

/// One attachment per surface.
///
/// The Yew hooks attach without it: each hook owns its attachment, and several
/// components may watch the window with different options at once.
pub type WebRegistry = ResizeRegistry<SurfaceKey, WebResize>;

/// Attaches a window filter unless the window is already observed.
pub fn observe_window(
    registry: &mut WebRegistry,
    options: ResizeOptions,
    callback: Option<ResizeCallback<ResizeEvent>>,
) -> Result<Attach, ResizeError> {
    registry.attach(SurfaceKey::Window, || attach_window(options, callback))
}

/// Attaches an element filter unless the element is already observed.
/// The element must carry an `id`.
pub fn observe_element(
    registry: &mut WebRegistry,
    element: HtmlElement,
    options: ResizeOptions,
    callback: Option<ResizeCallback<ResizeEvent>>,
) -> Result<Attach, ResizeError> {
    let key = WebSurface::Element(element.clone()).key()?;
    registry.attach(key, || attach_element(element, options, callback))
}
