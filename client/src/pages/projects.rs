//! Projects page: newest-first grid with create and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/api/projects` once on mount. Delete asks for confirmation, then
//! reloads the page on success or alerts the server's message on failure
//! (the page stays put). Create posts to `/generate_360` and navigates to the
//! viewer URL the backend returns.

use leptos::prelude::*;

use crate::components::nav_bar::{NavBar, NavPage};
use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
use crate::state::projects::ProjectsState;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = RwSignal::new(ProjectsState { loading: true, ..ProjectsState::default() });
    provide_context(projects);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            projects.update(ProjectsState::begin_load);
            let result = crate::net::api::fetch_projects().await;
            if let Err(err) = &result {
                leptos::logging::error!("project list failed: {err}");
            }
            projects.update(|s| s.finish_load(result));
        });
    }

    let on_delete_request = Callback::new(move |project: Project| projects.update(|s| s.request_delete(&project)));

    view! {
        <div class="projects-page">
            <NavBar active=NavPage::Projects/>
            <header class="projects-page__header">
                <h1>"Projects"</h1>
                <button class="btn btn--primary" on:click=move |_| projects.update(ProjectsState::open_create)>
                    "+ New Project"
                </button>
            </header>

            <Show when=move || projects.with(|s| s.error.is_some())>
                <p class="projects-page__error">{move || projects.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !projects.with(|s| s.loading)
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <Show
                    when=move || projects.with(|s| !s.items.is_empty() || s.error.is_some())
                    fallback=move || view! { <p class="projects-page__empty">"No projects yet."</p> }
                >
                    <div class="projects-page__grid">
                        {move || {
                            projects
                                .get()
                                .items
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project on_delete=on_delete_request/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || projects.with(|s| s.delete_target.is_some())>
                <DeleteProjectDialog projects=projects/>
            </Show>
            <Show when=move || projects.with(|s| s.create_open)>
                <CreateProjectDialog projects=projects/>
            </Show>
        </div>
    }
}

/// Confirmation before `DELETE /api/project/{id}`.
#[component]
fn DeleteProjectDialog(projects: RwSignal<ProjectsState>) -> impl IntoView {
    let name = move || projects.with(|s| s.delete_target.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let cancel = move || projects.update(ProjectsState::cancel_delete);

    let confirm = move |_| {
        let Some(target) = projects.with_untracked(|s| s.delete_target.clone()) else {
            return;
        };
        projects.update(|s| s.delete_pending = true);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_project(&target.id).await {
                    Ok(()) => crate::util::browser::reload(),
                    Err(err) => {
                        leptos::logging::error!("delete {} failed: {err}", target.id);
                        projects.update(ProjectsState::cancel_delete);
                        crate::util::browser::alert(&crate::net::api::delete_failure_message(&err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| cancel()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__danger">
                    "Delete \"" {name} "\" and all of its images? This cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| cancel()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=confirm
                        disabled=move || projects.with(|s| s.delete_pending)
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Name and description for `POST /generate_360`.
#[component]
fn CreateProjectDialog(projects: RwSignal<ProjectsState>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let close = move || projects.update(ProjectsState::close_create);

    let submit = Callback::new(move |()| {
        if projects.with_untracked(|s| s.create_pending) {
            return;
        }
        let project_name = match crate::state::projects::validate_project_name(&name.get_untracked()) {
            Ok(valid) => valid,
            Err(message) => {
                projects.update(|s| s.create_error = Some(message));
                return;
            }
        };
        projects.update(|s| {
            s.create_pending = true;
            s.create_error = None;
        });
        let project_description = description.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_project(&project_name, &project_description).await {
                    Ok(url) => {
                        projects.update(ProjectsState::close_create);
                        crate::util::browser::redirect(&url);
                    }
                    Err(err) => {
                        leptos::logging::error!("create project failed: {err}");
                        projects.update(|s| s.create_failed(&err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (project_name, project_description);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Project"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || projects.with(|s| s.create_error.is_some())>
                    <p class="dialog__error">{move || projects.with(|s| s.create_error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| submit.run(())
                        disabled=move || projects.with(|s| s.create_pending)
                    >
                        {move || if projects.with(|s| s.create_pending) { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
