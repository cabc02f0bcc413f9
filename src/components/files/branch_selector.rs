//! Branch dropdown in the header.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::ArtifactClient;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn BranchSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let current = Memo::new(move |_| ctx.branch.with(|b| b.current().to_string()));
    let is_open = Memo::new(move |_| ctx.branch.with(|b| b.is_open()));
    let branches = Memo::new(move |_| ctx.branch.with(|b| b.branches()));

    // Display switches at once; checkout runs behind it.
    let on_change = move |name: String| {
        let changed = ctx.branch.try_update(|b| b.change(&name)).unwrap_or(false);
        if !changed {
            return;
        }
        console::log(&format!("Checking out {}", name));
        let client = ctx.client();
        spawn_local(async move {
            match client.checkout(&name).await {
                Ok(()) => ctx.refresh(),
                Err(e) => ctx.report(&format!("Failed to check out {}", name), e),
            }
        });
    };

    // Close the dropdown when focus leaves the wrapper
    let on_focusout = move |event: web_sys::FocusEvent| {
        let inside = match (event.related_target(), event.current_target()) {
            (Some(related), Some(current)) => {
                use wasm_bindgen::JsCast;
                match (
                    current.dyn_ref::<web_sys::Node>(),
                    related.dyn_ref::<web_sys::Node>(),
                ) {
                    (Some(wrapper), Some(target)) => wrapper.contains(Some(target)),
                    _ => false,
                }
            }
            _ => false,
        };
        if !inside {
            ctx.branch.update(|b| b.close());
        }
    };

    view! {
        <div class=css::dropdownWrapper on:focusout=on_focusout>
            <button
                class=css::branchButton
                on:click=move |_| ctx.branch.update(|b| b.toggle_open())
                title="Switch branch"
                aria-haspopup="listbox"
                aria-expanded=move || is_open.get().to_string()
            >
                <Icon icon=ic::BRANCH />
                <span class=css::branchName>{move || current.get()}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <Show when=move || is_open.get()>
                <div class=css::dropdownMenu role="listbox">
                    <Show
                        when=move || !branches.get().is_empty()
                        fallback=|| view! { <div class=css::dropdownEmpty>"No branches"</div> }
                    >
                        <For
                            each=move || branches.get()
                            key=|branch| (branch.name.clone(), branch.is_default)
                            children=move |branch| {
                                let name = branch.name.clone();
                                let class = if branch.is_default {
                                    format!("{} {}", css::dropdownItem, css::dropdownItemActive)
                                } else {
                                    css::dropdownItem.to_string()
                                };
                                view! {
                                    <button
                                        class=class
                                        role="option"
                                        aria-selected=branch.is_default.to_string()
                                        on:click=move |_| on_change(name.clone())
                                    >
                                        {branch.name}
                                    </button>
                                }
                            }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
