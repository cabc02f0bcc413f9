//! Main file browser view.
//!
//! ## Layout
//!
//! - Header with title, branch selector and write actions
//! - Pinned commit banner (only when the host pinned a commit)
//! - Navigation bar, then the file list with the details panel beside it

use leptos::prelude::*;

use super::commit_banner::CommitBanner;
use super::header::Header;
use super::navigation::NavigationBar;
use super::{DetailsPanel, FileList};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn FilesView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let details_open = Memo::new(move |_| {
        ctx.browser
            .with(|b| b.nav().details_visible() && b.nav().selected_path().is_some())
    });

    view! {
        <div class=css::files>
            <Header />
            <CommitBanner />
            <NavigationBar />

            <div class=css::body>
                <div class=move || {
                    if details_open.get() {
                        format!("{} {}", css::listPane, css::listPaneWithDetails)
                    } else {
                        css::listPane.to_string()
                    }
                }>
                    <FileList />
                </div>

                <Show when=move || details_open.get()>
                    <DetailsPanel />
                </Show>
            </div>
        </div>
    }
}
