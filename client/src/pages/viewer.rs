//! 360° viewer page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `project` query parameter. With one, it fetches
//! `/api/project/{id}` and loads the ordered frames into the carousel; without
//! one it shows the bundled demo frames. Fetch failures and projects with no
//! frames render an error panel instead of the carousel.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::carousel_view::CarouselView;
use crate::components::nav_bar::{NavBar, NavPage};
use crate::components::thumbnail_strip::ThumbnailStrip;
use crate::components::viewer_controls::ViewerControls;
use crate::components::viewer_overlay::ViewerOverlay;
use crate::state::viewer::ViewerState;
use crate::util::auto_rotate::AutoRotateTimer;

#[component]
pub fn ViewerPage() -> impl IntoView {
    let viewer = RwSignal::new(ViewerState { loading: true, ..ViewerState::default() });
    let timer = AutoRotateTimer::new();
    provide_context(viewer);

    let query = use_query_map();
    let project_id = Memo::new(move |_| {
        query
            .with(|q| q.get("project"))
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
    });

    Effect::new(move || {
        let id = project_id.get();
        timer.stop();
        match id {
            None => {
                let actions = viewer.try_update(ViewerState::load_demo).unwrap_or_default();
                timer.apply(viewer, &actions);
            }
            Some(id) => {
                viewer.update(ViewerState::begin_load);
                load_project(viewer, timer, id);
            }
        }
    });
    on_cleanup(move || timer.stop());

    let frame_count = move || viewer.with(|v| v.core.len());

    view! {
        <div class="viewer-page">
            <NavBar active=NavPage::Viewer/>
            <header class="viewer-page__header">
                <h1>{move || viewer.with(ViewerState::title)}</h1>
                <Show when=move || viewer.with(ViewerState::has_frames)>
                    <span class="viewer-page__count">{move || format!("{} images", frame_count())}</span>
                </Show>
            </header>
            <Show
                when=move || !viewer.with(|v| v.loading)
                fallback=move || view! { <p class="viewer-page__loading">"Loading project..."</p> }
            >
                <Show
                    when=move || viewer.with(|v| v.error.is_none())
                    fallback=move || {
                        view! {
                            <div class="viewer-page__error">
                                <p>{move || viewer.with(|v| v.error.clone().unwrap_or_default())}</p>
                                <a class="btn" href="/projects">"Back to projects"</a>
                            </div>
                        }
                    }
                >
                    <CarouselView viewer=viewer timer=timer/>
                    <ViewerControls viewer=viewer timer=timer/>
                    <ThumbnailStrip viewer=viewer timer=timer/>
                </Show>
            </Show>
            <ViewerOverlay viewer=viewer timer=timer/>
        </div>
    }
}

fn load_project(viewer: RwSignal<ViewerState>, timer: AutoRotateTimer, project_id: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_project(&project_id).await;
            if let Err(err) = &result {
                leptos::logging::error!("project {project_id} failed to load: {err}");
            }
            let actions = viewer.try_update(|v| v.finish_load(result)).unwrap_or_default();
            timer.apply(viewer, &actions);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (viewer, timer, project_id);
    }
}
