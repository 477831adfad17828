use std::collections::{HashMap, HashSet};

use anyhow::Result;
use tokio::sync::RwLock;

use crate::model::{Branch, SemesterData, SubjectData};
use crate::store::traits::{BranchStore, SemesterStore, Store, SubjectStore};

/// In-memory store backing tests and local experiments.
///
/// Mirrors the relational layout rather than nesting entities: flat
/// entity tables plus an explicit join table, so the hydration logic is
/// exercised the same way as against PostgreSQL.
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Debug)]
struct Tables {
    branches: Vec<BranchRow>,
    semesters: Vec<SemesterRow>,
    subjects: HashMap<String, SubjectData>,
    subject_semester: Vec<(i32, String)>,
    next_branch_id: i32,
    next_semester_id: i32,
}

#[derive(Debug)]
struct BranchRow {
    branch_id: i32,
    branch_name: String,
}

#[derive(Debug)]
struct SemesterRow {
    semester_data_id: i32,
    semester_no: i32,
    semester_credit: f32,
    branch_id: i32,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables {
                branches: Vec::new(),
                semesters: Vec::new(),
                subjects: HashMap::new(),
                subject_semester: Vec::new(),
                next_branch_id: 1,
                next_semester_id: 1,
            }),
        }
    }
}

impl Tables {
    fn subjects_for_semester(&self, semester_data_id: i32) -> Vec<SubjectData> {
        self.subject_semester
            .iter()
            .filter(|(id, _)| *id == semester_data_id)
            .filter_map(|(_, code)| self.subjects.get(code).cloned())
            .collect()
    }

    fn hydrated_semesters(&self, branch_id: i32) -> Vec<SemesterData> {
        self.semesters
            .iter()
            .filter(|row| row.branch_id == branch_id)
            .map(|row| SemesterData {
                semester_data_id: row.semester_data_id,
                semester_no: row.semester_no,
                semester_credit: row.semester_credit,
                subject_data: self.subjects_for_semester(row.semester_data_id),
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl BranchStore for MemoryStore {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        let tables = self.inner.read().await;
        Ok(tables
            .branches
            .iter()
            .map(|row| Branch {
                branch_id: row.branch_id,
                branch_name: row.branch_name.clone(),
                semester_data: tables.hydrated_semesters(row.branch_id),
            })
            .collect())
    }

    async fn insert_branch(&self, branch_name: &str) -> Result<Branch> {
        let mut tables = self.inner.write().await;
        let branch_id = tables.next_branch_id;
        tables.next_branch_id += 1;
        tables.branches.push(BranchRow {
            branch_id,
            branch_name: branch_name.to_string(),
        });

        Ok(Branch {
            branch_id,
            branch_name: branch_name.to_string(),
            semester_data: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl SemesterStore for MemoryStore {
    async fn list_semesters_for_branch(&self, branch_id: i32) -> Result<Vec<SemesterData>> {
        let tables = self.inner.read().await;
        Ok(tables.hydrated_semesters(branch_id))
    }

    async fn insert_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
        semester_credit: f32,
    ) -> Result<SemesterData> {
        let mut tables = self.inner.write().await;
        let semester_data_id = tables.next_semester_id;
        tables.next_semester_id += 1;
        tables.semesters.push(SemesterRow {
            semester_data_id,
            semester_no,
            semester_credit,
            branch_id,
        });

        Ok(SemesterData {
            semester_data_id,
            semester_no,
            semester_credit,
            subject_data: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl SubjectStore for MemoryStore {
    async fn list_subjects_for_branch_and_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
    ) -> Result<Vec<SubjectData>> {
        let tables = self.inner.read().await;
        let semester_ids: HashSet<i32> = tables
            .semesters
            .iter()
            .filter(|row| row.branch_id == branch_id && row.semester_no == semester_no)
            .map(|row| row.semester_data_id)
            .collect();

        let mut seen = HashSet::new();
        let mut subjects = Vec::new();
        for (semester_data_id, code) in &tables.subject_semester {
            if !semester_ids.contains(semester_data_id) || !seen.insert(code.clone()) {
                continue;
            }
            if let Some(subject) = tables.subjects.get(code) {
                subjects.push(subject.clone());
            }
        }

        Ok(subjects)
    }

    async fn upsert_subject(&self, subject: &SubjectData) -> Result<()> {
        let mut tables = self.inner.write().await;
        tables
            .subjects
            .insert(subject.subject_code.clone(), subject.clone());
        Ok(())
    }

    async fn link_subject(&self, semester_data_id: i32, subject_code: &str) -> Result<()> {
        let mut tables = self.inner.write().await;
        let link = (semester_data_id, subject_code.to_string());
        if !tables.subject_semester.contains(&link) {
            tables.subject_semester.push(link);
        }
        Ok(())
    }
}

impl Store for MemoryStore {}
