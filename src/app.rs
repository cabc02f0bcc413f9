//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the effects
//! that keep fetched data in step with navigation.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::files::FilesView;
use crate::components::toast::{ToastState, Toasts};
use crate::core::branch::{BranchContext, load_branch_names};
use crate::core::frame::HostFrame;
use crate::core::{ArtifactClient, FileBrowser, fetch_content, fetch_listing};
use crate::models::FrameTarget;
use crate::utils::console;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// The client and host frame are not `Send`, so they live in local stored
/// values and are cloned out inside event handlers.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation, listing and selected content.
    pub browser: RwSignal<FileBrowser>,

    /// Branch list and dropdown state.
    pub branch: RwSignal<BranchContext>,

    /// Target reported by the host frame.
    pub target: RwSignal<FrameTarget>,

    /// Bumped after every successful write to refetch the listing.
    pub revision: RwSignal<u64>,

    pub toasts: ToastState,

    client: StoredValue<Rc<dyn ArtifactClient>, LocalStorage>,
    frame: StoredValue<Rc<dyn HostFrame>, LocalStorage>,
}

impl AppContext {
    pub fn new(client: Rc<dyn ArtifactClient>, frame: Rc<dyn HostFrame>) -> Self {
        let branch = BranchContext::new(client.scope().branch);
        let target = frame.target();
        Self {
            browser: RwSignal::new(FileBrowser::new()),
            branch: RwSignal::new(branch),
            target: RwSignal::new(target),
            revision: RwSignal::new(0),
            toasts: ToastState::new(),
            client: StoredValue::new_local(client),
            frame: StoredValue::new_local(frame),
        }
    }

    pub fn client(&self) -> Rc<dyn ArtifactClient> {
        self.client.get_value()
    }

    pub fn frame(&self) -> Rc<dyn HostFrame> {
        self.frame.get_value()
    }

    /// Refetch the current listing and selection.
    pub fn refresh(&self) {
        self.revision.update(|r| *r += 1);
    }

    /// Log a failed action and show it to the user.
    pub fn report(&self, action: &str, error: impl std::fmt::Display) {
        let message = format!("{}: {}", action, error);
        console::error(&message);
        self.toasts.push(message);
    }
}

// ============================================================================
// Effects
// ============================================================================

/// Fetch the listing whenever the folder changes or a write lands.
fn watch_listing(ctx: AppContext) {
    let folder = Memo::new(move |_| ctx.browser.with(|b| b.nav().current_folder().to_string()));

    Effect::new(move |_| {
        folder.track();
        ctx.revision.track();

        let Some(ticket) = ctx.browser.try_update(|b| b.begin_listing()) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = fetch_listing(&*client, &ticket).await;
            if let Err(e) = &result {
                console::error(&format!("Failed to list /{}: {}", ticket.key(), e));
            }
            let applied = ctx
                .browser
                .try_update(|b| b.apply_listing(&ticket, result))
                .unwrap_or(false);
            if !applied {
                console::log(&format!("Dropped stale listing for /{}", ticket.key()));
            }
        });
    });
}

/// Fetch bytes and metadata whenever the selection changes or a write lands.
fn watch_selection(ctx: AppContext) {
    let selected = Memo::new(move |_| {
        ctx.browser
            .with(|b| b.nav().selected_path().map(String::from))
    });

    Effect::new(move |_| {
        selected.track();
        ctx.revision.track();

        let Some(Some(ticket)) = ctx.browser.try_update(|b| b.begin_content()) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = fetch_content(&*client, &ticket).await;
            if let Err(e) = &result {
                console::error(&format!("Failed to read {}: {}", ticket.key(), e));
            }
            let applied = ctx
                .browser
                .try_update(|b| b.apply_content(&ticket, result))
                .unwrap_or(false);
            if !applied {
                console::log(&format!("Dropped stale content for {}", ticket.key()));
            }
        });
    });
}

/// Load branch names once at startup.
fn load_branches(ctx: AppContext) {
    let client = ctx.client();
    spawn_local(async move {
        let names = load_branch_names(&*client).await;
        ctx.branch.update(|b| b.set_names(names));
    });
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts the fetch effects
/// - Renders the file browser and toasts
#[component]
pub fn App(client: Rc<dyn ArtifactClient>, frame: Rc<dyn HostFrame>) -> impl IntoView {
    let ctx = AppContext::new(client, frame);
    provide_context(ctx);

    watch_listing(ctx);
    watch_selection(ctx);
    load_branches(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d9534f; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="color: #a94442; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <FilesView />
        </ErrorBoundary>
        <Toasts state=ctx.toasts />
    }
}
