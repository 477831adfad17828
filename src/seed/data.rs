use anyhow::Result;

use crate::model::SubjectData;
use crate::store::traits::Store;

/// Helper to build a subject with the usual four mark components.
fn subject(
    code: &str,
    name: &str,
    credit: f32,
    total_marks: i32,
    term_work_mark: Option<i32>,
    sessional_mark: Option<i32>,
    external_mark: Option<i32>,
    attendance: Option<i32>,
) -> SubjectData {
    SubjectData {
        subject_code: code.to_string(),
        subject_name: name.to_string(),
        subject_credit: credit,
        total_marks,
        term_work_mark,
        sessional_mark,
        external_mark,
        attendance,
    }
}

/// Load a small sample curriculum for demonstration: two branches with a
/// few semesters each, and a mathematics subject shared by both
/// branches' third semester through the join table.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    let ce = store.insert_branch("Computer Engineering").await?;
    let me = store.insert_branch("Mechanical Engineering").await?;

    let ce_sem3 = store.insert_semester(ce.branch_id, 3, 22.0).await?;
    let ce_sem4 = store.insert_semester(ce.branch_id, 4, 21.5).await?;
    let me_sem3 = store.insert_semester(me.branch_id, 3, 20.0).await?;

    let subjects = [
        subject(
            "CE301",
            "Data Structures",
            4.0,
            150,
            Some(25),
            Some(25),
            Some(100),
            None,
        ),
        subject(
            "CE302",
            "Database Management Systems",
            4.0,
            150,
            Some(25),
            Some(25),
            Some(100),
            None,
        ),
        subject(
            "CE401",
            "Operating Systems",
            4.0,
            150,
            Some(25),
            Some(25),
            Some(100),
            None,
        ),
        subject(
            "ME301",
            "Thermodynamics",
            4.0,
            150,
            Some(25),
            Some(25),
            Some(100),
            None,
        ),
        subject(
            "MA201",
            "Engineering Mathematics III",
            3.0,
            100,
            None,
            Some(30),
            Some(70),
            Some(10),
        ),
    ];
    for s in &subjects {
        store.upsert_subject(s).await?;
    }

    store.link_subject(ce_sem3.semester_data_id, "CE301").await?;
    store.link_subject(ce_sem3.semester_data_id, "CE302").await?;
    store.link_subject(ce_sem4.semester_data_id, "CE401").await?;
    store.link_subject(me_sem3.semester_data_id, "ME301").await?;

    // MA201 is taught in both branches' semester 3.
    store.link_subject(ce_sem3.semester_data_id, "MA201").await?;
    store.link_subject(me_sem3.semester_data_id, "MA201").await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::traits::{BranchStore, SubjectStore};
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seed_populates_every_relation() {
        let store = MemoryStore::new();
        load_seed_data(&store).await.unwrap();

        let branches = store.list_branches().await.unwrap();
        assert_eq!(branches.len(), 2);

        let ce = branches
            .iter()
            .find(|b| b.branch_name == "Computer Engineering")
            .unwrap();
        let me = branches
            .iter()
            .find(|b| b.branch_name == "Mechanical Engineering")
            .unwrap();
        assert_eq!(ce.semester_data.len(), 2);
        assert_eq!(me.semester_data.len(), 1);

        // The shared subject shows up under both branches' semester 3.
        for branch in [ce, me] {
            let subjects = store
                .list_subjects_for_branch_and_semester(branch.branch_id, 3)
                .await
                .unwrap();
            assert!(
                subjects.iter().any(|s| s.subject_code == "MA201"),
                "MA201 missing from {}",
                branch.branch_name
            );
        }
    }
}
