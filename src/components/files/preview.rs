//! Content preview of the selected file.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::details::Preview;
use crate::models::Loadable;
use crate::utils::ObjectUrl;

stylance::import_crate_style!(css, "src/components/files/details.module.css");

#[component]
pub fn PreviewBody() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let status = Memo::new(move |_| {
        ctx.browser.with(|b| match b.content() {
            Some(Loadable::Pending) => Loadable::Pending,
            Some(Loadable::Failed(e)) => Loadable::Failed(e.clone()),
            _ => Loadable::Ready(()),
        })
    });
    // Rendering waits for the path or bytes to change, not every browser write.
    let source = Memo::new(move |_| ctx.browser.with(|b| b.preview_source()));
    let preview = Memo::new(move |_| source.with(|s| s.as_ref().map(|s| s.build())));

    // Current image URL; replacing or dropping it revokes the old one.
    let image_url = StoredValue::new(None::<ObjectUrl>);

    let body = move || {
        if status.get().is_pending() {
            image_url.set_value(None);
            return view! {
                <div class=css::previewStatus>
                    <span class=css::spinner><Icon icon=ic::LOADING /></span>
                    "Loading preview..."
                </div>
            }
            .into_any();
        }
        if let Some(error) = status.get().error().map(String::from) {
            image_url.set_value(None);
            return view! {
                <div class=format!("{} {}", css::previewStatus, css::previewError) role="alert">
                    {error}
                </div>
            }
            .into_any();
        }

        match preview.get() {
            Some(Preview::Image { mime, bytes }) => {
                let url = ObjectUrl::from_bytes(&bytes, mime);
                let src = url.as_ref().map(|u| u.as_str().to_string());
                image_url.set_value(url);
                match src {
                    Some(src) => view! {
                        <img class=css::previewImage src=src alt="Preview" />
                    }
                    .into_any(),
                    None => view! {
                        <div class=css::previewStatus>"Unable to display image"</div>
                    }
                    .into_any(),
                }
            }
            Some(Preview::Markdown(html)) => {
                image_url.set_value(None);
                view! { <div class=css::previewMarkdown inner_html=html></div> }.into_any()
            }
            Some(Preview::Text(text)) => {
                image_url.set_value(None);
                view! { <pre class=css::previewText>{text}</pre> }.into_any()
            }
            Some(Preview::Unavailable) | None => {
                image_url.set_value(None);
                view! { <div class=css::previewStatus>"No preview available"</div> }.into_any()
            }
        }
    };

    view! {
        <section class=css::preview aria-label="Preview">
            {body}
        </section>
    }
}
