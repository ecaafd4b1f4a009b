use serde::Serialize;

/// Payload POSTed to `tables/inquiries`. Every inquiry starts out in the
/// `"pending"` state; follow-up happens in the back office.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub subject: String,
    pub message: String,
    pub status: String,
}

impl InquirySubmission {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        company: String,
        subject: String,
        message: String,
    ) -> Self {
        Self {
            name,
            email,
            phone,
            company,
            subject,
            message,
            status: "pending".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiries_start_pending() {
        let submission = InquirySubmission::new(
            "박민수".to_string(),
            "minsu@example.com".to_string(),
            "010-1234-5678".to_string(),
            String::new(),
            "교육 견적 문의".to_string(),
            "30명 규모 리더십 교육 견적을 받고 싶습니다.".to_string(),
        );
        assert_eq!(submission.status, "pending");
    }
}
