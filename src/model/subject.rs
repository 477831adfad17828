use serde::{Deserialize, Serialize};

/// A course, identified by its stable code rather than a surrogate id.
/// A subject may be taught in several semesters across branches
/// (shared electives), so it is referenced by semesters, never owned.
///
/// Mark components are nullable: not every subject carries every
/// assessment component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectData {
    pub subject_code: String,
    pub subject_name: String,
    pub subject_credit: f32,
    pub total_marks: i32,
    pub term_work_mark: Option<i32>,
    pub sessional_mark: Option<i32>,
    pub external_mark: Option<i32>,
    pub attendance: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_marks_serialize_as_null() {
        let subject = SubjectData {
            subject_code: "HU101".to_string(),
            subject_name: "Communication Skills".to_string(),
            subject_credit: 2.0,
            total_marks: 50,
            term_work_mark: Some(50),
            sessional_mark: None,
            external_mark: None,
            attendance: None,
        };

        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["subjectCode"], "HU101");
        assert_eq!(json["termWorkMark"], 50);
        assert!(json["sessionalMark"].is_null());
        assert!(json["attendance"].is_null());
    }

    #[test]
    fn round_trips_through_json() {
        let subject = SubjectData {
            subject_code: "CE301".to_string(),
            subject_name: "Data Structures".to_string(),
            subject_credit: 4.0,
            total_marks: 150,
            term_work_mark: Some(25),
            sessional_mark: Some(25),
            external_mark: Some(100),
            attendance: None,
        };

        let json = serde_json::to_string(&subject).unwrap();
        let parsed: SubjectData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, subject);
    }
}
