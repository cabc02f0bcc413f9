//! File list for the current folder.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::details::PreviewKind;
use crate::core::listing::ListingView;
use crate::models::{DisplayItem, Gesture};

stylance::import_crate_style!(css, "src/components/files/file_list.module.css");

fn row_icon(item: &DisplayItem) -> IconData {
    if item.is_folder {
        return ic::FOLDER;
    }
    match PreviewKind::from_path(&item.name) {
        PreviewKind::Image => ic::FILE_IMAGE,
        PreviewKind::Markdown => ic::FILE_TEXT,
        PreviewKind::Text => ic::FILE,
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let listing = Memo::new(move |_| ctx.browser.with(|b| b.listing_view()));

    move || match listing.get() {
        ListingView::Loading => view! {
            <div class=css::status>
                <span class=css::spinner><Icon icon=ic::LOADING /></span>
                "Loading..."
            </div>
        }
        .into_any(),
        ListingView::Error(message) => view! {
            <div class=format!("{} {}", css::status, css::statusError) role="alert">
                {message}
            </div>
        }
        .into_any(),
        ListingView::Empty(empty) => view! {
            <div class=css::status>
                <span class=css::emptyTitle>{empty.title()}</span>
                <span class=css::emptyMessage>{empty.message()}</span>
            </div>
        }
        .into_any(),
        ListingView::Items(items) => view! {
            <div class=css::list role="grid" aria-label="File list">
                <div class=css::listHeader role="row">
                    <span class=css::headerIcon></span>
                    <span class=css::headerName>"Name"</span>
                    <span class=css::headerType>"Type"</span>
                    <span class=css::headerChevron></span>
                </div>
                <For
                    each=move || items.clone()
                    key=|item| item.full_path.clone()
                    children=move |item| view! { <FileListItem item=item /> }
                />
            </div>
        }
        .into_any(),
    }
}

#[component]
fn FileListItem(item: DisplayItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let path = item.full_path.clone();
    let is_selected =
        Memo::new(move |_| ctx.browser.with(|b| b.nav().selected_path() == Some(path.as_str())));

    let icon = row_icon(&item);
    let is_folder = item.is_folder;
    let type_label = item.type_label();
    let name = item.name.clone();
    let aria_label = format!("{}: {}", type_label, item.name);

    // The second click of a double click arrives with detail == 2.
    let item_for_click = item.clone();
    let handle_click = move |ev: leptos::ev::MouseEvent| {
        let gesture = Gesture::from_click_count(ev.detail());
        ctx.browser.update(|b| {
            b.handle_gesture(&item_for_click, gesture);
        });
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ctx.browser.update(|b| {
                b.handle_gesture(&item, Gesture::Activate);
            });
        }
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::listItem, css::selected)
        } else {
            css::listItem.to_string()
        }
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:keydown=handle_keydown
            role="row"
            tabindex="0"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{name}</span>
            <span class=css::itemType>{type_label}</span>
            <span class=css::chevron aria-hidden="true">
                {is_folder.then(|| view! { <Icon icon=ic::CHEVRON_RIGHT /> })}
            </span>
        </div>
    }
}
