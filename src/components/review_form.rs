/// Review submission form with the star-rating widget. Validation runs
/// locally before anything leaves the page; a rejected draft never makes
/// a network call. Submitted reviews always carry `approved: false` and
/// only show up in the list after back-office approval.
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::submit_review;
use crate::components::toast::{show_toast, ToastKind};
use crate::models::review::ReviewSubmission;

pub const REVIEW_REQUIRED_FIELDS_MSG: &str = "필수 항목을 모두 입력해주세요.";
pub const REVIEW_RATING_MSG: &str = "평점을 선택해주세요.";
pub const REVIEW_SUCCESS_MSG: &str = "리뷰가 성공적으로 제출되었습니다. 관리자 승인 후 게시됩니다.";
pub const REVIEW_FAILURE_MSG: &str = "리뷰 제출 중 오류가 발생했습니다. 다시 시도해주세요.";

/// Name, course and content are required; the rating has to be 1..=5.
pub fn validate_review(submission: &ReviewSubmission) -> Result<(), &'static str> {
    if submission.name.is_empty() || submission.course.is_empty() || submission.content.is_empty()
    {
        return Err(REVIEW_REQUIRED_FIELDS_MSG);
    }
    if !(1..=5).contains(&submission.rating) {
        return Err(REVIEW_RATING_MSG);
    }
    Ok(())
}

#[component]
pub fn ReviewForm() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (position, set_position) = create_signal(String::new());
    let (course, set_course) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    // Rating starts at 5, all stars lit.
    let (rating, set_rating) = create_signal(5u8);
    // In-flight guard: one POST per click, no double submission.
    let (submitting, set_submitting) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let submission = ReviewSubmission::new(
            name.get().trim().to_string(),
            company.get().trim().to_string(),
            position.get().trim().to_string(),
            course.get().trim().to_string(),
            rating.get(),
            content.get().trim().to_string(),
        );

        if let Err(message) = validate_review(&submission) {
            show_toast(ToastKind::Error, message);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match submit_review(&submission).await {
                Ok(()) => {
                    show_toast(ToastKind::Success, REVIEW_SUCCESS_MSG);
                    // Reset values, rating back to 5 stars
                    set_name.set(String::new());
                    set_company.set(String::new());
                    set_position.set(String::new());
                    set_course.set(String::new());
                    set_content.set(String::new());
                    set_rating.set(5);
                }
                Err(err) => {
                    logging::error!("Error submitting review: {err}");
                    show_toast(ToastKind::Error, REVIEW_FAILURE_MSG);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="reviewForm" class="review-form" on:submit=handle_submit>
            <input
                type="text"
                id="reviewName"
                placeholder="이름 *"
                prop:value=name
                on:input=move |e| set_name.set(event_target_value(&e))
            />
            <input
                type="text"
                id="reviewCompany"
                placeholder="회사명"
                prop:value=company
                on:input=move |e| set_company.set(event_target_value(&e))
            />
            <input
                type="text"
                id="reviewPosition"
                placeholder="직함"
                prop:value=position
                on:input=move |e| set_position.set(event_target_value(&e))
            />
            <input
                type="text"
                id="reviewCourse"
                placeholder="수강 과정 *"
                prop:value=course
                on:input=move |e| set_course.set(event_target_value(&e))
            />
            <div class="rating-input">
                {(1u8..=5)
                    .map(|value| {
                        view! {
                            <i
                                class="fas fa-star"
                                data-rating=value.to_string()
                                class:active=move || value <= rating.get()
                                on:click=move |_| set_rating.set(value)
                            ></i>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <input type="hidden" id="reviewRating" prop:value=move || rating.get().to_string()/>
            <textarea
                id="reviewContent"
                placeholder="교육 후기를 작성해주세요 *"
                prop:value=content
                on:input=move |e| set_content.set(event_target_value(&e))
            ></textarea>
            <button type="submit" disabled=move || submitting.get()>
                { "리뷰 등록" }
            </button>
        </form>
    }
}
