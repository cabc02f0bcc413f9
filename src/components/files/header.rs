//! Header: title, branch selector and write actions.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use super::branch_selector::BranchSelector;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_TITLE;
use crate::core::actions::{self, UploadFile};
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/files/files.module.css");

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <div class=css::title>
                <span class=css::titleIcon><Icon icon=ic::FOLDER /></span>
                <span class=css::titleLabel>{APP_TITLE}</span>
            </div>
            <BranchSelector />
            <ActionButtons />
        </header>
    }
}

/// Which entry the "new" buttons create.
#[derive(Clone, Copy)]
enum NewEntry {
    File,
    Folder,
}

impl NewEntry {
    fn prompt(self) -> &'static str {
        match self {
            Self::File => "New file name",
            Self::Folder => "New folder name",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Self::File => "Failed to create file",
            Self::Folder => "Failed to create folder",
        }
    }
}

/// Prompt for a name, write the entry and commit it.
fn create_entry(ctx: AppContext, kind: NewEntry) {
    let Some(name) = dom::prompt(kind.prompt()) else {
        return;
    };
    let folder = ctx
        .browser
        .with_untracked(|b| b.nav().current_folder().to_string());
    let client = ctx.client();

    spawn_local(async move {
        let result = match kind {
            NewEntry::File => actions::create_file(&*client, &folder, &name).await,
            NewEntry::Folder => actions::create_folder(&*client, &folder, &name).await,
        };
        match result {
            Ok(path) => {
                console::log(&format!("Created {}", path));
                ctx.refresh();
            }
            Err(e) => ctx.report(kind.action(), e),
        }
    });
}

/// New file, new folder and upload buttons.
#[component]
fn ActionButtons() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let upload_input = NodeRef::<html::Input>::new();

    let on_upload_click = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = upload_input.get() {
            input.click();
        }
    };

    let on_files_chosen = move |_: leptos::ev::Event| {
        let Some(input) = upload_input.get() else {
            return;
        };
        let files = dom::selected_files(&input);
        input.set_value("");
        if files.is_empty() {
            return;
        }

        let folder = ctx
            .browser
            .with_untracked(|b| b.nav().current_folder().to_string());
        let client = ctx.client();
        spawn_local(async move {
            let mut uploads = Vec::with_capacity(files.len());
            for file in &files {
                match dom::read_file(file).await {
                    Ok(bytes) => uploads.push(UploadFile {
                        name: file.name(),
                        bytes,
                    }),
                    Err(e) => {
                        ctx.report("Failed to read file", format!("{}: {:?}", file.name(), e));
                        return;
                    }
                }
            }
            match actions::upload(&*client, &folder, &uploads).await {
                Ok(count) => {
                    console::log(&format!("Uploaded {} file(s) to /{}", count, folder));
                    ctx.refresh();
                }
                Err(e) => ctx.report("Upload failed", e),
            }
        });
    };

    view! {
        <div class=css::actionButtons>
            <button
                class=css::actionButton
                on:click=move |_| create_entry(ctx, NewEntry::File)
                title="New file"
            >
                <Icon icon=ic::NEW_FILE />
                <span class=css::actionLabel>"New File"</span>
            </button>
            <button
                class=css::actionButton
                on:click=move |_| create_entry(ctx, NewEntry::Folder)
                title="New folder"
            >
                <Icon icon=ic::NEW_FOLDER />
                <span class=css::actionLabel>"New Folder"</span>
            </button>
            <button class=css::actionButton on:click=on_upload_click title="Upload files">
                <Icon icon=ic::UPLOAD />
                <span class=css::actionLabel>"Upload"</span>
            </button>
            <input
                node_ref=upload_input
                class=css::hiddenInput
                type="file"
                multiple=true
                on:change=on_files_chosen
            />
        </div>
    }
}
