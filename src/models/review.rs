// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,               // Unique ID for the review
    pub name: String,             // Name of the reviewer
    #[serde(default)]
    pub position: Option<String>, // Reviewer's job title
    #[serde(default)]
    pub company: Option<String>,  // Reviewer's company
    pub course: String,           // Course the review is about
    pub rating: u8,               // Star rating, 1 to 5
    pub content: String,          // Content of the review
    #[serde(default)]
    pub approved: bool,           // Only approved reviews are displayed
}

/// Payload POSTed to `tables/reviews`. New reviews always go out with
/// `approved: false`; publishing is an admin decision on the server side.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReviewSubmission {
    pub name: String,
    pub company: String,
    pub position: String,
    pub course: String,
    pub rating: u8,
    pub content: String,
    pub approved: bool,
}

impl ReviewSubmission {
    pub fn new(
        name: String,
        company: String,
        position: String,
        course: String,
        rating: u8,
        content: String,
    ) -> Self {
        Self {
            name,
            company,
            position,
            course,
            rating,
            content,
            approved: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_is_never_pre_approved() {
        let submission = ReviewSubmission::new(
            "홍길동".to_string(),
            String::new(),
            String::new(),
            "리더십 교육".to_string(),
            5,
            "큰 도움이 되었습니다.".to_string(),
        );
        assert!(!submission.approved);
    }

    #[test]
    fn submission_serializes_approved_flag() {
        let submission = ReviewSubmission::new(
            "김철수".to_string(),
            "한빛전자".to_string(),
            "팀장".to_string(),
            "DX 실무 과정".to_string(),
            4,
            "실습 비중이 높아 좋았습니다.".to_string(),
        );
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["approved"], serde_json::Value::Bool(false));
        assert_eq!(json["rating"], serde_json::json!(4));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_none() {
        let json = r#"{
            "id": "rev-1",
            "name": "이영희",
            "course": "신입사원 온보딩",
            "rating": 5,
            "content": "좋았습니다."
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.position, None);
        assert_eq!(review.company, None);
        assert!(!review.approved);
    }
}
