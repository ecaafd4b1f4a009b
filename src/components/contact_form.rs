/// Contact/inquiry form. Same pipeline as the review form: trim, validate
/// locally, POST once, toast the outcome. Inputs are preserved on failure
/// so the user can retry without retyping.
use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::submit_inquiry;
use crate::components::toast::{show_toast, ToastKind};
use crate::models::inquiry::InquirySubmission;
use crate::utils::validation::is_valid_email;

pub const CONTACT_REQUIRED_FIELDS_MSG: &str = "필수 항목을 모두 입력해주세요.";
pub const CONTACT_INVALID_EMAIL_MSG: &str = "올바른 이메일 주소를 입력해주세요.";
pub const CONTACT_SUCCESS_MSG: &str = "문의가 성공적으로 접수되었습니다. 빠른 시일 내에 답변드리겠습니다.";
pub const CONTACT_FAILURE_MSG: &str = "문의 제출 중 오류가 발생했습니다. 다시 시도해주세요.";

/// Everything except the company is required, and the email address has
/// to look like one.
pub fn validate_inquiry(submission: &InquirySubmission) -> Result<(), &'static str> {
    if submission.name.is_empty()
        || submission.email.is_empty()
        || submission.phone.is_empty()
        || submission.subject.is_empty()
        || submission.message.is_empty()
    {
        return Err(CONTACT_REQUIRED_FIELDS_MSG);
    }
    if !is_valid_email(&submission.email) {
        return Err(CONTACT_INVALID_EMAIL_MSG);
    }
    Ok(())
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (subject, set_subject) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    // In-flight guard: one POST per click, no double submission.
    let (submitting, set_submitting) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let submission = InquirySubmission::new(
            name.get().trim().to_string(),
            email.get().trim().to_string(),
            phone.get().trim().to_string(),
            company.get().trim().to_string(),
            subject.get().trim().to_string(),
            message.get().trim().to_string(),
        );

        if let Err(validation_message) = validate_inquiry(&submission) {
            show_toast(ToastKind::Error, validation_message);
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match submit_inquiry(&submission).await {
                Ok(()) => {
                    show_toast(ToastKind::Success, CONTACT_SUCCESS_MSG);
                    // Reset values
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_phone.set(String::new());
                    set_company.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => {
                    logging::error!("Error submitting inquiry: {err}");
                    show_toast(ToastKind::Error, CONTACT_FAILURE_MSG);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=handle_submit>
            <input
                type="text"
                id="contactName"
                placeholder="이름 *"
                prop:value=name
                on:input=move |e| set_name.set(event_target_value(&e))
            />
            <input
                type="text"
                id="contactEmail"
                placeholder="이메일 *"
                prop:value=email
                on:input=move |e| set_email.set(event_target_value(&e))
            />
            <input
                type="text"
                id="contactPhone"
                placeholder="연락처 *"
                prop:value=phone
                on:input=move |e| set_phone.set(event_target_value(&e))
            />
            <input
                type="text"
                id="contactCompany"
                placeholder="회사명"
                prop:value=company
                on:input=move |e| set_company.set(event_target_value(&e))
            />
            <input
                type="text"
                id="contactSubject"
                placeholder="문의 제목 *"
                prop:value=subject
                on:input=move |e| set_subject.set(event_target_value(&e))
            />
            <textarea
                id="contactMessage"
                placeholder="문의 내용을 입력해주세요 *"
                prop:value=message
                on:input=move |e| set_message.set(event_target_value(&e))
            ></textarea>
            <button type="submit" disabled=move || submitting.get()>
                { "문의하기" }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str) -> InquirySubmission {
        InquirySubmission::new(
            "박민수".to_string(),
            email.to_string(),
            "010-1234-5678".to_string(),
            String::new(),
            "교육 견적 문의".to_string(),
            "30명 규모 리더십 교육 견적을 받고 싶습니다.".to_string(),
        )
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(validate_inquiry(&draft("minsu@example.com")), Ok(()));
    }

    #[test]
    fn malformed_email_is_rejected_before_any_network_call() {
        assert_eq!(
            validate_inquiry(&draft("not-an-email")),
            Err(CONTACT_INVALID_EMAIL_MSG)
        );
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut submission = draft("minsu@example.com");
        submission.phone.clear();
        assert_eq!(
            validate_inquiry(&submission),
            Err(CONTACT_REQUIRED_FIELDS_MSG)
        );

        let mut submission = draft("minsu@example.com");
        submission.message.clear();
        assert_eq!(
            validate_inquiry(&submission),
            Err(CONTACT_REQUIRED_FIELDS_MSG)
        );
    }

    #[test]
    fn company_is_optional() {
        let submission = draft("minsu@example.com");
        assert!(submission.company.is_empty());
        assert_eq!(validate_inquiry(&submission), Ok(()));
    }
}
