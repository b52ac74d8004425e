//! Row of frame thumbnails; clicking one jumps the carousel to it.
//!
//! The URL list sits behind a `Memo`, so the buttons are built once per
//! loaded set. Index changes only toggle the active class.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;
use crate::util::auto_rotate::{AutoRotateTimer, dispatch};

#[component]
pub fn ThumbnailStrip(viewer: RwSignal<ViewerState>, timer: AutoRotateTimer) -> impl IntoView {
    let urls = Memo::new(move |_| viewer.with(ViewerState::frame_urls));
    let active = move || viewer.with(|v| v.core.current_index());

    view! {
        <div class="thumbnails">
            {move || {
                urls.get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, url)| {
                        let position = i64::try_from(index).unwrap_or(0);
                        view! {
                            <button
                                class="thumbnails__item"
                                class:thumbnails__item--active=move || active() == index
                                title=format!("Frame {}", index + 1)
                                on:click=move |_| {
                                    dispatch(viewer, timer, |core| {
                                        let mut actions = core.stop_auto_rotate();
                                        actions.extend(core.show(position));
                                        actions
                                    });
                                }
                            >
                                <img src=url alt="" loading="lazy" draggable="false"/>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
