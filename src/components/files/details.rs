//! Details panel for the selected path.
//!
//! Shows the derived fields, the rename editor and the content preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use super::preview::PreviewBody;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::actions;
use crate::core::details::FileDetails;
use crate::models::RepoScope;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/files/details.module.css");

#[component]
pub fn DetailsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let details = Memo::new(move |_| {
        let scope = RepoScope {
            repo: ctx.client().scope().repo,
            branch: ctx.branch.with(|b| b.current().to_string()),
        };
        ctx.browser.with(|b| b.details(&scope))
    });
    let renaming = Memo::new(move |_| ctx.browser.with(|b| !b.rename().is_idle()));

    view! {
        <aside class=css::panel aria-label="Details">
            <div class=css::panelHeader>
                <span class=css::panelTitle>
                    {move || details.get().map(|d| d.name).unwrap_or_default()}
                </span>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.browser.update(|b| b.hide_details())
                    title="Close details"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>

            {move || details.get().map(|d| view! { <DetailFields details=d /> })}

            <Show
                when=move || renaming.get()
                fallback=move || view! {
                    <button
                        class=css::renameButton
                        on:click=move |_| {
                            ctx.browser.update(|b| {
                                b.start_rename();
                            });
                        }
                    >
                        <Icon icon=ic::EDIT />
                        "Rename"
                    </button>
                }
            >
                <RenameEditor />
            </Show>

            <PreviewBody />
        </aside>
    }
}

#[component]
fn DetailFields(details: FileDetails) -> impl IntoView {
    let rows = [
        ("Name", details.name),
        ("Path", details.path),
        ("Type", details.type_label.to_string()),
        ("Size", details.size),
        ("Modified", details.modified),
        ("Repository", details.repository),
        ("Branch", details.branch),
    ];

    view! {
        <dl class=css::fields>
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <dt class=css::fieldLabel>{label}</dt>
                    <dd class=css::fieldValue>{value}</dd>
                })
                .collect_view()}
        </dl>
    }
}

/// One input per path segment; editing a folder segment moves the file.
#[component]
fn RenameEditor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Inputs are built once; later edits flow into the state, not back out.
    let segments = ctx.browser.with_untracked(|b| {
        b.rename()
            .state()
            .map(|s| s.segments.clone())
            .unwrap_or_default()
    });
    let committing = Memo::new(move |_| ctx.browser.with(|b| b.rename().is_committing()));
    let error = Memo::new(move |_| {
        ctx.browser
            .with(|b| b.rename().state().and_then(|s| s.error.clone()))
    });

    let save = move || {
        let request = match ctx.browser.try_update(|b| b.submit_rename()) {
            Some(Ok(Some(request))) => request,
            Some(Err(e)) => {
                console::warn(&format!("Rename rejected: {}", e));
                return;
            }
            _ => return,
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = actions::rename(&*client, &request).await;
            if let Err(e) = &result {
                ctx.report(&format!("Failed to rename {}", request.from), e);
            }
            let landed = ctx
                .browser
                .try_update(|b| b.finish_rename(result))
                .unwrap_or(false);
            if landed {
                ctx.refresh();
            }
        });
    };

    let cancel = move || ctx.browser.update(|b| b.cancel_rename());

    let last = segments.len().saturating_sub(1);
    let inputs = segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            view! {
                <input
                    class=css::segmentInput
                    type="text"
                    prop:value=segment
                    disabled=move || committing.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.browser.update(|b| b.edit_rename_segment(index, &value));
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => save(),
                        "Escape" => cancel(),
                        _ => {}
                    }
                />
                {(index < last).then(|| view! { <span class=css::segmentSeparator>"/"</span> })}
            }
        })
        .collect_view();

    view! {
        <div class=css::rename>
            <div class=css::segments>{inputs}</div>
            {move || error.get().map(|e| view! { <p class=css::renameError role="alert">{e}</p> })}
            <div class=css::renameActions>
                <button
                    class=css::primaryButton
                    on:click=move |_| save()
                    disabled=move || committing.get()
                >
                    {move || if committing.get() { "Saving..." } else { "Save" }}
                </button>
                <button
                    class=css::secondaryButton
                    on:click=move |_| cancel()
                    disabled=move || committing.get()
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
