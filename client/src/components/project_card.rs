//! Card for one project in the projects grid.
//!
//! DESIGN
//! ======
//! The thumbnail and text link to the viewer. The delete button sits beside
//! the link, not inside it, and hands the project back to the page, which
//! owns the confirmation dialog.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::projects::viewer_href;
use crate::util::format::created_label;

#[component]
pub fn ProjectCard(project: Project, on_delete: Callback<Project>) -> impl IntoView {
    let href = viewer_href(&project.id);
    let name = project.display_name().to_owned();
    let created = created_label(project.created);
    let frames = project.frame_count();
    let thumbnail = project.thumbnail_url();
    let description = project.description.clone().filter(|d| !d.trim().is_empty());

    view! {
        <div class="project-card">
            <a class="project-card__link" href=href>
                <span class="project-card__thumb">
                    {match thumbnail {
                        Some(src) => view! { <img src=src alt="" loading="lazy"/> }.into_any(),
                        None => view! { <span class="project-card__placeholder">"No preview"</span> }.into_any(),
                    }}
                </span>
                <span class="project-card__name">{name}</span>
                {description.map(|d| view! { <span class="project-card__description">{d}</span> })}
                <span class="project-card__meta">{format!("{created} · {frames} images")}</span>
            </a>
            <button
                class="project-card__delete"
                type="button"
                on:click=move |_| on_delete.run(project.clone())
                title="Delete project"
                aria-label="Delete project"
            >
                "✕"
            </button>
        </div>
    }
}
