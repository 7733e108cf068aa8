// ============================================================================
// TOASTER - Context + viewport for user-facing notifications
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::notifications::{Notifier, Toast};

/// Toasts disappear after this long (ms)
pub const TOAST_DURATION_MS: u32 = 6000;
/// Older toasts are dropped past this count
pub const MAX_TOASTS: usize = 3;

thread_local! {
    static NEXT_TOAST_ID: Cell<u32> = const { Cell::new(0) };
}

#[derive(Clone, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

pub enum ToastAction {
    Push(ToastEntry),
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    entries: Vec<ToastEntry>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            ToastAction::Push(entry) => {
                entries.push(entry);
                if entries.len() > MAX_TOASTS {
                    entries.remove(0);
                }
            }
            ToastAction::Dismiss(id) => entries.retain(|e| e.id != id),
        }
        Rc::new(Self { entries })
    }
}

/// Handle shared through the context; implements `Notifier` for the globe
#[derive(Clone, PartialEq)]
pub struct ToasterHandle {
    dispatcher: UseReducerDispatcher<ToastList>,
}

impl ToasterHandle {
    pub fn dismiss(&self, id: u32) {
        self.dispatcher.dispatch(ToastAction::Dismiss(id));
    }
}

impl Notifier for ToasterHandle {
    fn notify(&self, toast: Toast) {
        let id = NEXT_TOAST_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        self.dispatcher.dispatch(ToastAction::Push(ToastEntry { id, toast }));

        let dispatcher = self.dispatcher.clone();
        Timeout::new(TOAST_DURATION_MS, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let handle = ToasterHandle {
        dispatcher: toasts.dispatcher(),
    };

    html! {
        <ContextProvider<ToasterHandle> context={handle.clone()}>
            { for props.children.iter() }
            <div class="toast-viewport" role="status" aria-live="polite">
                { for toasts.entries.iter().map(|entry| {
                    let id = entry.id;
                    let on_dismiss = {
                        let handle = handle.clone();
                        Callback::from(move |_: MouseEvent| handle.dismiss(id))
                    };
                    html! {
                        <div key={id} class={entry.toast.variant.css_class()}>
                            <div class="toast__body">
                                <strong class="toast__title">{ entry.toast.title.clone() }</strong>
                                <p class="toast__description">{ entry.toast.description.clone() }</p>
                            </div>
                            <button class="toast__close" onclick={on_dismiss} aria-label="Dismiss">{ "×" }</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToasterHandle>>
    }
}

/// Toaster from the nearest `ToastProvider`
#[hook]
pub fn use_toaster() -> Option<ToasterHandle> {
    use_context::<ToasterHandle>()
}
