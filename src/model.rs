use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown attendance status: {0} (expected Hadir, Sakit, Izin or Alpha)")]
    UnknownStatus(String),
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("date must be YYYY-MM-DD: {0}")]
    BadDate(String),
    #[error("no add form is open on this page")]
    ModalClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub teacher: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Hadir,
    Sakit,
    Izin,
    Alpha,
}

impl AttendanceStatus {
    /// Order used by the status select in the attendance form.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Hadir,
        AttendanceStatus::Sakit,
        AttendanceStatus::Izin,
        AttendanceStatus::Alpha,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "Hadir",
            AttendanceStatus::Sakit => "Sakit",
            AttendanceStatus::Izin => "Izin",
            AttendanceStatus::Alpha => "Alpha",
        }
    }

    /// Badge colour for the attendance table.
    pub fn tone(self) -> &'static str {
        match self {
            AttendanceStatus::Hadir => "green",
            AttendanceStatus::Sakit => "yellow",
            AttendanceStatus::Izin => "blue",
            AttendanceStatus::Alpha => "red",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: u64,
    pub student_id: String,
    pub subject_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Student fields supplied by the add form; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubject {
    pub name: String,
    pub teacher: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub student_id: String,
    pub subject_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Strict `YYYY-MM-DD`: chrono alone also takes unpadded fields like `2024-8-1`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ModelError> {
    let b = raw.as_bytes();
    let shaped = b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        return Err(ModelError::BadDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ModelError::BadDate(raw.to_string()))
}

pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parses_only_the_four_names() {
        assert_eq!("Alpha".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Alpha));
        assert_eq!(
            "alpha".parse::<AttendanceStatus>(),
            Err(ModelError::UnknownStatus("alpha".into()))
        );
        assert_eq!(AttendanceStatus::Sakit.tone(), "yellow");
    }

    #[test]
    fn attendance_serializes_camel_case_with_plain_date() {
        let att = Attendance {
            id: 4,
            student_id: "S001".into(),
            subject_id: "M01".into(),
            date: parse_date("2024-08-01").expect("date"),
            status: AttendanceStatus::Alpha,
        };
        let v = serde_json::to_value(&att).expect("json");
        assert_eq!(
            v,
            json!({
                "id": 4,
                "studentId": "S001",
                "subjectId": "M01",
                "date": "2024-08-01",
                "status": "Alpha"
            })
        );
    }

    #[test]
    fn parse_date_rejects_non_calendar_values() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("01/08/2024").is_err());
        assert_eq!(format_date(parse_date("2024-02-29").expect("leap")), "2024-02-29");
    }

    #[test]
    fn parse_date_requires_padded_ten_char_form() {
        for raw in [
            "24-8-1",
            "2024-8-1",
            "2024-08-1",
            " 2024-08-01 ",
            "2024-08-01\n",
            "2024/08/01",
        ] {
            assert_eq!(
                parse_date(raw),
                Err(ModelError::BadDate(raw.to_string())),
                "{raw:?}"
            );
        }
        assert_eq!(
            parse_date("0024-08-01").map(format_date),
            Ok("0024-08-01".to_string())
        );
    }
}
