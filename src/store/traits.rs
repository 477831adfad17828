use crate::model::{Branch, SemesterData, SubjectData};
use anyhow::Result;

#[async_trait::async_trait]
pub trait BranchStore: Send + Sync {
    /// Every branch, hydrated with its semesters and their subjects.
    /// Row order is whatever the storage returns natively; callers must
    /// not rely on it.
    async fn list_branches(&self) -> Result<Vec<Branch>>;
    /// Create a branch with a generated id. Branches are administered
    /// out-of-band; no HTTP route writes them.
    async fn insert_branch(&self, branch_name: &str) -> Result<Branch>;
}

#[async_trait::async_trait]
pub trait SemesterStore: Send + Sync {
    /// Semesters whose foreign key equals `branch_id`, each hydrated
    /// with its subjects. An unknown branch yields an empty result, not
    /// an error — no existence check is made.
    async fn list_semesters_for_branch(&self, branch_id: i32) -> Result<Vec<SemesterData>>;
    async fn insert_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
        semester_credit: f32,
    ) -> Result<SemesterData>;
}

#[async_trait::async_trait]
pub trait SubjectStore: Send + Sync {
    /// Distinct subjects reachable through a semester row matching BOTH
    /// `branch_id` and `semester_no`. The branch filter is mandatory:
    /// `semester_no` alone is ambiguous across branches and would leak
    /// subjects from another branch's same-numbered semester.
    async fn list_subjects_for_branch_and_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
    ) -> Result<Vec<SubjectData>>;
    async fn upsert_subject(&self, subject: &SubjectData) -> Result<()>;
    /// Record that a subject is taught in a semester instance.
    async fn link_subject(&self, semester_data_id: i32, subject_code: &str) -> Result<()>;
}

pub trait Store: BranchStore + SemesterStore + SubjectStore + Send + Sync {}
