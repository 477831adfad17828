use crate::model::SubjectData;
use serde::{Deserialize, Serialize};

/// One ordinal term within a branch.
///
/// `semester_no` is only meaningful together with its owning branch:
/// two branches can both have a semester numbered 3. The owning branch
/// is query context rather than a field here, which is what keeps the
/// branch ↔ semester relation acyclic on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterData {
    pub semester_data_id: i32,
    pub semester_no: i32,
    pub semester_credit: f32,
    #[serde(default)]
    pub subject_data: Vec<SubjectData>,
}
