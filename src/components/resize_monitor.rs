use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_window_resize::current_window_size;
use crate::hooks::{use_element_resize, use_window_resize};
use crate::models::{Dimensions, ResizeOptions};
use crate::services::filter::Surface;
use crate::services::web::{ResizeEvent, WebSurface};

/// Accepted size plus how many times the callback ran
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct MonitorState {
    pub size: Dimensions,
    pub dispatches: u32,
}

impl Reducible for MonitorState {
    type Action = Dimensions;

    fn reduce(self: Rc<Self>, size: Dimensions) -> Rc<Self> {
        Rc::new(Self {
            size,
            dispatches: self.dispatches + 1,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct ResizeMonitorProps {
    pub label: AttrValue,
    pub options: ResizeOptions,
}

/// Shows what a window filter with the given options lets through.
#[function_component(ResizeMonitor)]
pub fn resize_monitor(props: &ResizeMonitorProps) -> Html {
    let state = use_reducer(|| MonitorState {
        size: current_window_size(),
        dispatches: 0,
    });

    let callback = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_event: ResizeEvent, _| {
            dispatcher.dispatch(current_window_size());
        })
    };
    use_window_resize(props.options.clone(), callback);

    render_state(&props.label, &props.options, &state)
}

/// Resizable panel observed through a `ResizeObserver`.
#[function_component(PanelMonitor)]
pub fn panel_monitor(props: &ResizeMonitorProps) -> Html {
    let panel_ref = use_node_ref();
    let state = use_reducer(MonitorState::default);

    let callback = {
        let dispatcher = state.dispatcher();
        let panel_ref = panel_ref.clone();
        use_callback((), move |_event: ResizeEvent, _| {
            if let Some(element) = panel_ref.cast::<web_sys::HtmlElement>() {
                dispatcher.dispatch(WebSurface::Element(element).dimensions());
            }
        })
    };
    use_element_resize(panel_ref.clone(), props.options.clone(), callback);

    html! {
        <div id="resize-panel" class="resize-panel" ref={panel_ref}>
            {render_state(&props.label, &props.options, &state)}
        </div>
    }
}

fn render_state(label: &AttrValue, options: &ResizeOptions, state: &MonitorState) -> Html {
    let timeout = options
        .timeout
        .map_or_else(|| "immediate".to_string(), |ms| format!("{ms}ms"));

    html! {
        <div class="resize-monitor">
            <h3>{label.clone()}</h3>
            <p class="resize-options">{format!("type: {}, timeout: {timeout}", options.resize_type)}</p>
            <p class="resize-size">{format!("Accepted size: {}", state.size)}</p>
            <p class="resize-count">{format!("Callbacks: {}", state.dispatches)}</p>
        </div>
    }
}
