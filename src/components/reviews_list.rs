/// Reviews section: loads the review list once, keeps only approved
/// records and renders them as quote cards with star ratings.
use leptos::*;

use crate::api::fetch_reviews;
use crate::models::review::Review;

pub const REVIEWS_LOAD_ERROR_MSG: &str = "리뷰를 불러오는 중 오류가 발생했습니다.";
pub const REVIEWS_EMPTY_MSG: &str = "리뷰가 없습니다.";

/// Approval gate, applied once at load time. Unapproved records never
/// reach the render path.
pub fn approved_reviews(reviews: Vec<Review>) -> Vec<Review> {
    reviews.into_iter().filter(|review| review.approved).collect()
}

/// The five glyph slots for a rating: slots `1..=rating` are filled
/// (`fas`), the rest outline (`far`). Ratings above 5 clamp to all filled.
pub fn star_classes(rating: u8) -> [&'static str; 5] {
    let mut classes = ["far fa-star"; 5];
    for slot in classes.iter_mut().take(rating.min(5) as usize) {
        *slot = "fas fa-star";
    }
    classes
}

/// "직함 · 회사" line under the reviewer name; parts that are absent or
/// empty are left out entirely.
pub fn review_byline(review: &Review) -> String {
    let mut parts = Vec::new();
    if let Some(position) = review.position.as_deref().filter(|p| !p.is_empty()) {
        parts.push(position);
    }
    if let Some(company) = review.company.as_deref().filter(|c| !c.is_empty()) {
        parts.push(company);
    }
    parts.join(" · ")
}

#[component]
pub fn ReviewsSection() -> impl IntoView {
    let (reviews, set_reviews) = create_signal(None::<Vec<Review>>);
    let (load_failed, set_load_failed) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            match fetch_reviews().await {
                Ok(data) => set_reviews.set(Some(approved_reviews(data))),
                Err(err) => {
                    logging::error!("Error loading reviews: {err}");
                    set_load_failed.set(true);
                }
            }
        });
    });

    view! {
        <div class="reviews-grid" id="reviewsGrid">
            {move || {
                if load_failed.get() {
                    return view! { <p class="grid-message">{REVIEWS_LOAD_ERROR_MSG}</p> }
                        .into_view();
                }
                match reviews.get() {
                    None => ().into_view(),
                    Some(cached) if cached.is_empty() => {
                        view! { <p class="grid-message">{REVIEWS_EMPTY_MSG}</p> }.into_view()
                    }
                    Some(cached) => cached
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review/> })
                        .collect::<Vec<_>>()
                        .into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let byline = review_byline(&review);
    let Review {
        name,
        course,
        rating,
        content,
        ..
    } = review;

    view! {
        <div class="review-card">
            <i class="fas fa-quote-right review-icon"></i>
            <div class="review-header">
                <div class="review-author">
                    <div class="review-name">{name}</div>
                    <div class="review-position">{byline}</div>
                </div>
                <div class="review-rating">
                    {star_classes(rating)
                        .into_iter()
                        .map(|class| view! { <i class=class></i> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="review-course">{course}</div>
            <p class="review-content">{content}</p>
        </div>
    }
}
