//! Entrance animation wrappers
//!
//! `Reveal` renders its children inside a block that starts in the hidden
//! frame of its [`RevealAnimation`] and transitions to the shown frame once
//! its trigger fires. `RevealGroup` owns a trigger on behalf of its `Reveal`
//! children, which then only contribute their stagger index.
//!
//! Server rendering always emits the hidden frame; triggers run on the client
//! after hydration.

use leptos::html;
use leptos::prelude::*;

use crate::core::{AnimationCue, RevealAnimation, RevealTrigger};
#[cfg(feature = "hydrate")]
use crate::core::{RevealEvent, RevealObserver, ViewportMargin};

/// Visibility shared by a `RevealGroup` with its children
#[derive(Clone, Copy)]
struct RevealScope {
    visible: Signal<bool>,
}

/// Animated block
#[component]
pub fn Reveal(
    /// Stagger index within the sibling group
    #[prop(default = 0)]
    index: u32,
    /// Own trigger. When omitted inside a `RevealGroup` the block follows
    /// the group, otherwise it reveals on mount.
    #[prop(optional)]
    trigger: Option<RevealTrigger>,
    /// Only react to the first viewport entry
    #[prop(default = true)]
    fire_once: bool,
    /// Replaces the fade-up derived from `index`
    #[prop(optional)]
    animation: Option<RevealAnimation>,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let scope = use_context::<RevealScope>();

    let visible = match (trigger, scope) {
        (None, Some(scope)) => scope.visible,
        (trigger, _) => use_reveal_trigger(
            node_ref,
            AnimationCue {
                index,
                trigger: trigger.unwrap_or_default(),
                fire_once,
            },
        ),
    };

    let animation = animation.unwrap_or_else(|| RevealAnimation::fade_up(index));
    let hidden = animation.hidden().style();
    let shown = animation.shown().style();
    let transition = animation.transition_css();

    let style = move || {
        let frame = if visible.get() { &shown } else { &hidden };
        format!("{frame} transition: {transition};")
    };

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}

/// Container whose trigger drives every child `Reveal` without its own
#[component]
pub fn RevealGroup(
    trigger: RevealTrigger,
    #[prop(default = true)] fire_once: bool,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal_trigger(
        node_ref,
        AnimationCue {
            index: 0,
            trigger,
            fire_once,
        },
    );
    provide_context(RevealScope { visible });

    view! {
        <div node_ref=node_ref class=class>
            {children()}
        </div>
    }
}

/// Wires `cue`'s trigger to a visibility signal for the element behind `node_ref`
fn use_reveal_trigger(node_ref: NodeRef<html::Div>, cue: AnimationCue) -> Signal<bool> {
    let visible = RwSignal::new(false);

    match cue.trigger {
        RevealTrigger::OnMount => {
            // Effects only run in the browser; wait a frame so the hidden
            // frame is painted before the transition starts
            Effect::new(move |_| {
                request_animation_frame(move || visible.set(true));
            });
        }
        RevealTrigger::OnEnterViewport { margin } => {
            #[cfg(feature = "hydrate")]
            {
                let observer = cue.observer();
                Effect::new(move |_| {
                    if let Some(element) = node_ref.get() {
                        observe_viewport(element.into(), margin, observer, visible);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (node_ref, margin);
            }
        }
    }

    visible.into()
}

/// Attaches an `IntersectionObserver` feeding `observer`, disconnecting it
/// once the observer is consumed or the owning effect is cleaned up
#[cfg(feature = "hydrate")]
fn observe_viewport(
    element: web_sys::Element,
    margin: ViewportMargin,
    mut observer: RevealObserver,
    visible: RwSignal<bool>,
) {
    use send_wrapper::SendWrapper;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, intersection: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                match observer.observe(entry.is_intersecting()) {
                    Some(RevealEvent::Show) => visible.set(true),
                    Some(RevealEvent::Hide) => visible.set(false),
                    None => {}
                }
            }
            if observer.is_consumed() {
                intersection.disconnect();
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&margin.root_margin());

    match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(intersection) => {
            intersection.observe(&element);
            // Keep the callback alive until unmount, then detach both
            let attached = SendWrapper::new((intersection, callback));
            on_cleanup(move || {
                let (intersection, _callback) = attached.take();
                intersection.disconnect();
            });
        }
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable, revealing now: {err:?}");
            visible.set(true);
        }
    }
}
