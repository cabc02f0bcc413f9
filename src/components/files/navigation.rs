//! Navigation bar: up button and breadcrumbs.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn NavigationBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let at_root = Memo::new(move |_| ctx.browser.with(|b| b.nav().is_at_root()));
    let crumbs = Memo::new(move |_| ctx.browser.with(|b| b.nav().breadcrumbs()));

    view! {
        <nav class=css::navigation aria-label="Folder path">
            <button
                class=move || {
                    if at_root.get() {
                        format!("{} {}", css::navButton, css::navButtonDisabled)
                    } else {
                        css::navButton.to_string()
                    }
                }
                on:click=move |_| ctx.browser.update(|b| b.navigate_up())
                disabled=move || at_root.get()
                title="Go to parent folder"
            >
                <Icon icon=ic::UP />
            </button>

            <ol class=css::crumbs>
                <li>
                    <button
                        class=css::crumb
                        on:click=move |_| ctx.browser.update(|b| b.navigate_to(""))
                        title="Repository root"
                    >
                        <Icon icon=ic::HOME />
                    </button>
                </li>
                <For
                    each=move || crumbs.get()
                    key=|crumb| crumb.path.clone()
                    children=move |crumb| {
                        let path = crumb.path.clone();
                        view! {
                            <li class=css::crumbItem>
                                <span class=css::crumbSeparator aria-hidden="true">
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </span>
                                <button
                                    class=css::crumb
                                    on:click=move |_| ctx.browser.update(|b| b.navigate_to(&path))
                                >
                                    {crumb.label}
                                </button>
                            </li>
                        }
                    }
                />
            </ol>
        </nav>
    }
}
