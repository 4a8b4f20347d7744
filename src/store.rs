use crate::ids;
use crate::model::{
    Attendance, AttendanceStatus, NewAttendance, NewStudent, NewSubject, Student, Subject,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub students: usize,
    pub subjects: usize,
    pub attendance: usize,
}

/// The three collections, in insertion order. Append-only.
#[derive(Debug, Default, Clone)]
pub struct Store {
    students: Vec<Student>,
    subjects: Vec<Subject>,
    attendance: Vec<Attendance>,
    students_rev: u64,
    subjects_rev: u64,
}

impl Store {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut store = Self::empty();
        for (name, class) in [
            ("Ahmad Dahlan", "10A"),
            ("Budi Santoso", "10B"),
            ("Citra Lestari", "11A"),
        ] {
            store.add_student(NewStudent {
                name: name.into(),
                class: class.into(),
            });
        }
        for (name, teacher) in [
            ("Matematika", "Dra. Endang S."),
            ("Bahasa Indonesia", "Drs. Hartono"),
            ("Fisika", "Dr. Wati"),
        ] {
            store.add_subject(NewSubject {
                name: name.into(),
                teacher: teacher.into(),
            });
        }
        let seed_day = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap_or_default();
        for (student_id, subject_id, status) in [
            ("S001", "M01", AttendanceStatus::Hadir),
            ("S002", "M01", AttendanceStatus::Izin),
            ("S003", "M02", AttendanceStatus::Sakit),
        ] {
            store.add_attendance(NewAttendance {
                student_id: student_id.into(),
                subject_id: subject_id.into(),
                date: seed_day,
                status,
            });
        }
        store
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn attendance(&self) -> &[Attendance] {
        &self.attendance
    }

    pub fn counts(&self) -> Counts {
        Counts {
            students: self.students.len(),
            subjects: self.subjects.len(),
            attendance: self.attendance.len(),
        }
    }

    /// Bumped on every student append; lookup caches compare against it.
    pub fn students_rev(&self) -> u64 {
        self.students_rev
    }

    pub fn subjects_rev(&self) -> u64 {
        self.subjects_rev
    }

    pub fn add_student(&mut self, new: NewStudent) -> &Student {
        let student = Student {
            id: ids::next_student_id(self.students.len()),
            name: new.name,
            class: new.class,
        };
        tracing::info!(id = %student.id, name = %student.name, "student added");
        self.students.push(student);
        self.students_rev += 1;
        &self.students[self.students.len() - 1]
    }

    pub fn add_subject(&mut self, new: NewSubject) -> &Subject {
        let subject = Subject {
            id: ids::next_subject_id(self.subjects.len()),
            name: new.name,
            teacher: new.teacher,
        };
        tracing::info!(id = %subject.id, name = %subject.name, "subject added");
        self.subjects.push(subject);
        self.subjects_rev += 1;
        &self.subjects[self.subjects.len() - 1]
    }

    /// Student and subject ids are stored as given; they are not checked
    /// against the other collections.
    pub fn add_attendance(&mut self, new: NewAttendance) -> &Attendance {
        let att = Attendance {
            id: ids::next_attendance_id(self.attendance.len()),
            student_id: new.student_id,
            subject_id: new.subject_id,
            date: new.date,
            status: new.status,
        };
        tracing::info!(
            id = att.id,
            student_id = %att.student_id,
            subject_id = %att.subject_id,
            status = %att.status,
            "attendance added"
        );
        self.attendance.push(att);
        &self.attendance[self.attendance.len() - 1]
    }
}
