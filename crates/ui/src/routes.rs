use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use quiz_core::AppAction;

use crate::context::AppContext;
use crate::views::QuizView;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[must_use]
pub fn theme_class(dark_theme: bool) -> &'static str {
    if dark_theme {
        "app-root theme-dark"
    } else {
        "app-root theme-light"
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let mut dark_theme = use_signal(|| ctx.store().snapshot().dark_theme);

    let toggle_theme = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            let state = ctx.dispatch(AppAction::ToggleTheme);
            tracing::debug!(dark_theme = state.dark_theme, "theme toggled");
            dark_theme.set(state.dark_theme);
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ThemeTestHandles>() {
                handles.register(toggle_theme);
            }
        }
    }

    let toggle_label = if dark_theme() { "Light mode" } else { "Dark mode" };

    rsx! {
        div { class: theme_class(dark_theme()),
            header { class: "app-header",
                h1 { "Range Quiz" }
                button {
                    id: "theme-toggle",
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| toggle_theme.call(()),
                    "{toggle_label}"
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ThemeTestHandles {
    toggle: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl ThemeTestHandles {
    pub(crate) fn register(&self, toggle: Callback<()>) {
        *self.toggle.borrow_mut() = Some(toggle);
    }

    pub(crate) fn toggle(&self) -> Callback<()> {
        (*self.toggle.borrow()).expect("theme toggle registered")
    }
}
