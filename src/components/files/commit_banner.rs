//! Banner shown while the host frame pins a commit.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn CommitBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let short = Memo::new(move |_| ctx.target.with(|t| t.short_commit().map(String::from)));

    let on_latest = move |_: leptos::ev::MouseEvent| {
        let target = ctx.target.get_untracked();
        ctx.frame().on_selection(target.unpinned());
        ctx.target.update(|t| t.commit = None);
    };

    view! {
        {move || short.get().map(|commit| view! {
            <div class=css::banner role="status">
                <span class=css::bannerIcon><Icon icon=ic::PIN /></span>
                <span class=css::bannerText>
                    "Pinned to commit "
                    <code>{commit}</code>
                </span>
                <button class=css::bannerButton on:click=on_latest>
                    "Switch to latest"
                </button>
            </div>
        })}
    }
}
