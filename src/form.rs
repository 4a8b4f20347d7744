//! Pending add-form values and the required-field gate in front of the store.
//!
//! A submission with any required field empty is dropped without an error;
//! the caller sees `None` and the store is left untouched.

use crate::model::{
    parse_date, Attendance, AttendanceStatus, ModelError, NewAttendance, NewStudent, NewSubject,
    Student, Subject,
};
use crate::store::Store;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentDraft {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectDraft {
    pub name: String,
    pub teacher: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    pub student_id: String,
    pub subject_id: String,
    pub date: String,
    pub status: String,
}

impl AttendanceDraft {
    /// First student, first subject, the given day, `Hadir`.
    pub fn defaults(store: &Store, today: NaiveDate) -> Self {
        Self {
            student_id: store
                .students()
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            subject_id: store
                .subjects()
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            date: crate::model::format_date(today),
            status: AttendanceStatus::Hadir.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Draft {
    Student(StudentDraft),
    Subject(SubjectDraft),
    Attendance(AttendanceDraft),
}

impl Draft {
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Draft::Student(_) => &["name", "class"],
            Draft::Subject(_) => &["name", "teacher"],
            Draft::Attendance(_) => &["studentId", "subjectId", "date", "status"],
        }
    }

    /// Select and date controls only hold valid values or nothing, so those
    /// fields refuse anything else. Free-text fields take any string.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ModelError> {
        let slot = match (self, field) {
            (Draft::Student(d), "name") => &mut d.name,
            (Draft::Student(d), "class") => &mut d.class,
            (Draft::Subject(d), "name") => &mut d.name,
            (Draft::Subject(d), "teacher") => &mut d.teacher,
            (Draft::Attendance(d), "studentId") => &mut d.student_id,
            (Draft::Attendance(d), "subjectId") => &mut d.subject_id,
            (Draft::Attendance(d), "date") => {
                if !value.is_empty() {
                    parse_date(value)?;
                }
                &mut d.date
            }
            (Draft::Attendance(d), "status") => {
                if !value.is_empty() {
                    value.parse::<AttendanceStatus>()?;
                }
                &mut d.status
            }
            (_, other) => return Err(ModelError::UnknownField(other.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        match self {
            Draft::Student(d) => !d.name.is_empty() && !d.class.is_empty(),
            Draft::Subject(d) => !d.name.is_empty() && !d.teacher.is_empty(),
            Draft::Attendance(d) => {
                !d.student_id.is_empty()
                    && !d.subject_id.is_empty()
                    && !d.date.is_empty()
                    && !d.status.is_empty()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submitted {
    Student(Student),
    Subject(Subject),
    Attendance(Attendance),
}

/// Appends the drafted record when every required field is filled.
pub fn submit(store: &mut Store, draft: &Draft) -> Option<Submitted> {
    if !draft.is_complete() {
        tracing::debug!(fields = ?draft.field_names(), "submission rejected: required field empty");
        return None;
    }
    let created = match draft {
        Draft::Student(d) => Submitted::Student(
            store
                .add_student(NewStudent {
                    name: d.name.clone(),
                    class: d.class.clone(),
                })
                .clone(),
        ),
        Draft::Subject(d) => Submitted::Subject(
            store
                .add_subject(NewSubject {
                    name: d.name.clone(),
                    teacher: d.teacher.clone(),
                })
                .clone(),
        ),
        Draft::Attendance(d) => {
            let (Ok(date), Ok(status)) =
                (parse_date(&d.date), d.status.parse::<AttendanceStatus>())
            else {
                tracing::debug!("submission rejected: date or status unreadable");
                return None;
            };
            Submitted::Attendance(
                store
                    .add_attendance(NewAttendance {
                        student_id: d.student_id.clone(),
                        subject_id: d.subject_id.clone(),
                        date,
                        status,
                    })
                    .clone(),
            )
        }
    };
    Some(created)
}
