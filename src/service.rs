use std::sync::Arc;

use anyhow::Result;

use crate::model::{Branch, SemesterData, SubjectData};
use crate::store::traits::Store;

/// Query layer between the HTTP handlers and the store.
///
/// Stateless pass-through: one method per store read operation with the
/// same signature and contract. Exists as the seam where request
/// parameters meet storage queries; handlers never touch the store
/// directly.
pub struct CurriculumService<S> {
    store: Arc<S>,
}

impl<S> Clone for CurriculumService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: Store> CurriculumService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn all_branches(&self) -> Result<Vec<Branch>> {
        self.store.list_branches().await
    }

    pub async fn semesters_for_branch(&self, branch_id: i32) -> Result<Vec<SemesterData>> {
        self.store.list_semesters_for_branch(branch_id).await
    }

    pub async fn subjects_for_branch_and_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
    ) -> Result<Vec<SubjectData>> {
        self.store
            .list_subjects_for_branch_and_semester(branch_id, semester_no)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::store::traits::{BranchStore, SemesterStore};

    #[tokio::test]
    async fn forwards_results_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let branch = store.insert_branch("Computer Engineering").await.unwrap();
        store
            .insert_semester(branch.branch_id, 3, 22.0)
            .await
            .unwrap();

        let service = CurriculumService::new(Arc::clone(&store));

        let direct = store
            .list_semesters_for_branch(branch.branch_id)
            .await
            .unwrap();
        let via_service = service
            .semesters_for_branch(branch.branch_id)
            .await
            .unwrap();
        assert_eq!(direct, via_service);

        let branches = service.all_branches().await.unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].branch_name, "Computer Engineering");
    }
}
