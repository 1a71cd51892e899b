use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{Dimensions, ResizeError, ResizeOptions};
use crate::services::filter::{ResizeCallback, Surface};
use crate::services::web::{ResizeEvent, WebResize, WebSurface, attach_element, attach_window};

fn forward(callback: &Callback<ResizeEvent>) -> ResizeCallback<ResizeEvent> {
    let callback = callback.clone();
    Rc::new(move |event: &ResizeEvent| callback.emit(event.clone()))
}

fn log_failure(result: Result<Option<WebResize>, ResizeError>) -> Option<WebResize> {
    result.unwrap_or_else(|e| {
        log::warn!(target: Config::LOG_TARGET, "resize observation unavailable: {e}");
        None
    })
}

/// Calls `callback` for window resizes that pass `options`.
///
/// The filter lives as long as the component; it is re-created (and the
/// size snapshot re-taken) only when `options` or `callback` change, so
/// pass a memoized callback.
#[hook]
pub fn use_window_resize(options: ResizeOptions, callback: Callback<ResizeEvent>) {
    use_effect_with((options, callback), |(options, callback)| {
        let handle = log_failure(attach_window(options.clone(), Some(forward(callback))));
        move || drop(handle)
    });
}

/// Same as [`use_window_resize`], for the element behind `node_ref`.
#[hook]
pub fn use_element_resize(
    node_ref: NodeRef,
    options: ResizeOptions,
    callback: Callback<ResizeEvent>,
) {
    use_effect_with(
        (node_ref, options, callback),
        |(node_ref, options, callback)| {
            let handle = node_ref.cast::<HtmlElement>().and_then(|element| {
                log_failure(attach_element(element, options.clone(), Some(forward(callback))))
            });
            move || drop(handle)
        },
    );
}

/// Window size as of the last accepted resize.
#[hook]
pub fn use_window_size(options: ResizeOptions) -> Dimensions {
    let size = use_state(current_window_size);

    let callback = {
        let setter = size.setter();
        use_callback((), move |_event: ResizeEvent, _| setter.set(current_window_size()))
    };
    use_window_resize(options, callback);

    *size
}

pub(crate) fn current_window_size() -> Dimensions {
    WebSurface::window()
        .map(|surface| surface.dimensions())
        .unwrap_or_default()
}
