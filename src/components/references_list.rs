/// References section: loads the reference list once, keeps it in a
/// page-lifetime signal and re-renders the card grid from that cache on
/// every category change. Filtering never goes back to the network.
use leptos::*;

use crate::api::fetch_references;
use crate::models::reference::Reference;

pub const REFERENCES_LOAD_ERROR_MSG: &str = "레퍼런스를 불러오는 중 오류가 발생했습니다.";
pub const REFERENCES_EMPTY_MSG: &str = "레퍼런스가 없습니다.";

/// Filter bar entries: `(category value, button label)`. The value must
/// match the `category` field of the records exactly, case-sensitively.
const CATEGORY_FILTERS: [(&str, &str); 4] = [
    ("all", "전체"),
    ("기업교육", "기업교육"),
    ("공공기관", "공공기관"),
    ("대학교", "대학교"),
];

/// Visible subset for a category selection. `"all"` is the whole cached
/// list; anything else is an exact match on `category`, original order
/// preserved.
pub fn filter_references(references: &[Reference], category: &str) -> Vec<Reference> {
    if category == "all" {
        references.to_vec()
    } else {
        references
            .iter()
            .filter(|reference| reference.category == category)
            .cloned()
            .collect()
    }
}

#[component]
pub fn ReferencesSection() -> impl IntoView {
    // Cache of the fetched list; populated once, never re-fetched.
    let (references, set_references) = create_signal(None::<Vec<Reference>>);
    let (load_failed, set_load_failed) = create_signal(false);
    let (current_category, set_current_category) = create_signal("all".to_string());

    // Effects only run on the client, so the fetch never fires during SSR.
    create_effect(move |_| {
        spawn_local(async move {
            match fetch_references().await {
                Ok(data) => set_references.set(Some(data)),
                Err(err) => {
                    logging::error!("Error loading references: {err}");
                    set_load_failed.set(true);
                }
            }
        });
    });

    view! {
        <div class="reference-filters">
            {CATEGORY_FILTERS
                .into_iter()
                .map(|(category, label)| {
                    view! {
                        <button
                            type="button"
                            class="filter-btn"
                            data-category=category
                            class:active=move || current_category.get() == category
                            on:click=move |_| set_current_category.set(category.to_string())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <div class="references-grid" id="referencesGrid">
            {move || {
                if load_failed.get() {
                    return view! { <p class="grid-message">{REFERENCES_LOAD_ERROR_MSG}</p> }
                        .into_view();
                }
                match references.get() {
                    None => ().into_view(),
                    Some(cached) => {
                        let visible = filter_references(&cached, &current_category.get());
                        if visible.is_empty() {
                            view! { <p class="grid-message">{REFERENCES_EMPTY_MSG}</p> }
                                .into_view()
                        } else {
                            visible
                                .into_iter()
                                .map(|reference| view! { <ReferenceCard reference=reference/> })
                                .collect::<Vec<_>>()
                                .into_view()
                        }
                    }
                }
            }}
        </div>
    }
}

#[component]
fn ReferenceCard(reference: Reference) -> impl IntoView {
    let Reference {
        category,
        institution,
        title,
        date,
        description,
        image_url,
        participants,
        ..
    } = reference;
    let has_image = image_url.is_some();

    view! {
        <div class="reference-card" data-category=category.clone()>
            <div class="reference-image" class:placeholder=!has_image>
                {match image_url {
                    Some(url) => view! { <img src=url alt=title.clone()/> }.into_view(),
                    None => view! { <i class="fas fa-graduation-cap"></i> }.into_view(),
                }}
                <span class="reference-badge">{category}</span>
            </div>
            <div class="reference-content">
                <div class="reference-institution">{institution}</div>
                <h3 class="reference-title">{title}</h3>
                <div class="reference-date">
                    <i class="fas fa-calendar-alt"></i>
                    " "
                    {date}
                </div>
                <p class="reference-description">{description}</p>
                {participants.map(|count| {
                    view! {
                        <div class="reference-meta">
                            <i class="fas fa-users"></i>
                            <span>{format!("참여 인원: {}명", count)}</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
