use crate::model::SemesterData;
use serde::{Deserialize, Serialize};

/// A degree program (e.g. Computer Engineering).
///
/// The branch owns its semesters, and only the forward edge
/// (branch → semester) carries nested data. Semesters never point back,
/// so the serialized output is a tree even though the relational schema
/// is a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: i32,
    pub branch_name: String,
    #[serde(default)]
    pub semester_data: Vec<SemesterData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SubjectData;

    #[test]
    fn serializes_with_camel_case_keys() {
        let branch = Branch {
            branch_id: 1,
            branch_name: "Computer Engineering".to_string(),
            semester_data: vec![],
        };

        let json = serde_json::to_value(&branch).unwrap();
        assert_eq!(json["branchId"], 1);
        assert_eq!(json["branchName"], "Computer Engineering");
        assert!(json["semesterData"].as_array().unwrap().is_empty());
    }

    #[test]
    fn nested_output_is_a_finite_tree() {
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
        let branch = Branch {
            branch_id: 1,
            branch_name: "Computer Engineering".to_string(),
            semester_data: (0..3)
                .map(|i| SemesterData {
                    semester_data_id: 10 + i,
                    semester_no: 3 + i,
                    semester_credit: 22.0,
                    subject_data: vec![subject.clone(), subject.clone()],
                })
                .collect(),
        };

        let json = serde_json::to_value(&branch).unwrap();
        let semesters = json["semesterData"].as_array().unwrap();
        assert_eq!(semesters.len(), 3);
        for semester in semesters {
            // The back edge to the branch must not appear anywhere in
            // the nested output.
            assert!(semester.get("branch").is_none());
            assert!(semester.get("branchId").is_none());
            assert_eq!(semester["subjectData"].as_array().unwrap().len(), 2);
        }
    }
}
