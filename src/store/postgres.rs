use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool, Row};

use crate::model::{Branch, SemesterData, SubjectData};
use crate::store::traits::{BranchStore, SemesterStore, Store, SubjectStore};

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Run embedded database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;

        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn subjects_for_semester(&self, semester_data_id: i32) -> Result<Vec<SubjectData>> {
        let rows = sqlx::query(
            "SELECT s.subject_code, s.subject_name, s.subject_credit, s.total_marks, \
             s.term_work_mark, s.sessional_mark, s.external_mark, s.attendance \
             FROM subject_data s \
             JOIN subject_semester ss ON ss.subject_code = s.subject_code \
             WHERE ss.semester_data_id = $1",
        )
        .bind(semester_data_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch subjects for semester")?;

        Ok(rows.iter().map(subject_from_row).collect())
    }

    async fn hydrated_semesters(&self, branch_id: i32) -> Result<Vec<SemesterData>> {
        let rows = sqlx::query(
            "SELECT semester_data_id, semester_no, semester_credit \
             FROM semester_data WHERE branch_id = $1",
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch semesters for branch")?;

        let mut semesters = Vec::with_capacity(rows.len());
        for row in rows {
            let semester_data_id: i32 = row.get("semester_data_id");
            semesters.push(SemesterData {
                semester_data_id,
                semester_no: row.get("semester_no"),
                semester_credit: row.get("semester_credit"),
                subject_data: self.subjects_for_semester(semester_data_id).await?,
            });
        }

        Ok(semesters)
    }
}

fn subject_from_row(row: &sqlx::postgres::PgRow) -> SubjectData {
    SubjectData {
        subject_code: row.get("subject_code"),
        subject_name: row.get("subject_name"),
        subject_credit: row.get("subject_credit"),
        total_marks: row.get("total_marks"),
        term_work_mark: row.get("term_work_mark"),
        sessional_mark: row.get("sessional_mark"),
        external_mark: row.get("external_mark"),
        attendance: row.get("attendance"),
    }
}

#[async_trait::async_trait]
impl BranchStore for PostgresStore {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        let rows = sqlx::query("SELECT branch_id, branch_name FROM branches")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list branches")?;

        let mut branches = Vec::with_capacity(rows.len());
        for row in rows {
            let branch_id: i32 = row.get("branch_id");
            branches.push(Branch {
                branch_id,
                branch_name: row.get("branch_name"),
                semester_data: self.hydrated_semesters(branch_id).await?,
            });
        }

        Ok(branches)
    }

    async fn insert_branch(&self, branch_name: &str) -> Result<Branch> {
        let row = sqlx::query("INSERT INTO branches (branch_name) VALUES ($1) RETURNING branch_id")
            .bind(branch_name)
            .fetch_one(&self.pool)
            .await
            .context("Failed to insert branch")?;

        Ok(Branch {
            branch_id: row.get("branch_id"),
            branch_name: branch_name.to_string(),
            semester_data: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl SemesterStore for PostgresStore {
    async fn list_semesters_for_branch(&self, branch_id: i32) -> Result<Vec<SemesterData>> {
        self.hydrated_semesters(branch_id).await
    }

    async fn insert_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
        semester_credit: f32,
    ) -> Result<SemesterData> {
        let row = sqlx::query(
            "INSERT INTO semester_data (semester_no, semester_credit, branch_id) \
             VALUES ($1, $2, $3) RETURNING semester_data_id",
        )
        .bind(semester_no)
        .bind(semester_credit)
        .bind(branch_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert semester")?;

        Ok(SemesterData {
            semester_data_id: row.get("semester_data_id"),
            semester_no,
            semester_credit,
            subject_data: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl SubjectStore for PostgresStore {
    async fn list_subjects_for_branch_and_semester(
        &self,
        branch_id: i32,
        semester_no: i32,
    ) -> Result<Vec<SubjectData>> {
        // Resolve the matching semester rows first, then walk the join
        // table out to the subject rows.
        let rows = sqlx::query(
            "SELECT DISTINCT subject_code, subject_name, subject_credit, total_marks, \
             term_work_mark, sessional_mark, external_mark, attendance \
             FROM subject_data \
             WHERE subject_code IN ( \
                 SELECT subject_code FROM subject_semester WHERE semester_data_id IN ( \
                     SELECT semester_data_id FROM semester_data \
                     WHERE branch_id = $1 AND semester_no = $2))",
        )
        .bind(branch_id)
        .bind(semester_no)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch subjects for branch and semester")?;

        Ok(rows.iter().map(subject_from_row).collect())
    }

    async fn upsert_subject(&self, subject: &SubjectData) -> Result<()> {
        sqlx::query(
            "INSERT INTO subject_data (subject_code, subject_name, subject_credit, total_marks, \
             term_work_mark, sessional_mark, external_mark, attendance) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (subject_code) DO UPDATE SET \
                 subject_name = EXCLUDED.subject_name, \
                 subject_credit = EXCLUDED.subject_credit, \
                 total_marks = EXCLUDED.total_marks, \
                 term_work_mark = EXCLUDED.term_work_mark, \
                 sessional_mark = EXCLUDED.sessional_mark, \
                 external_mark = EXCLUDED.external_mark, \
                 attendance = EXCLUDED.attendance",
        )
        .bind(&subject.subject_code)
        .bind(&subject.subject_name)
        .bind(subject.subject_credit)
        .bind(subject.total_marks)
        .bind(subject.term_work_mark)
        .bind(subject.sessional_mark)
        .bind(subject.external_mark)
        .bind(subject.attendance)
        .execute(&self.pool)
        .await
        .context("Failed to upsert subject")?;

        Ok(())
    }

    async fn link_subject(&self, semester_data_id: i32, subject_code: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO subject_semester (semester_data_id, subject_code) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(semester_data_id)
        .bind(subject_code)
        .execute(&self.pool)
        .await
        .context("Failed to link subject to semester")?;

        Ok(())
    }
}

impl Store for PostgresStore {}
