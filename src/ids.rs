//! Identifier generation.
//!
//! Ids derive from the collection length at insertion time. That only holds
//! while collections are append-only and written by a single session; adding
//! deletion would need a persistent counter instead.

pub fn next_student_id(count: usize) -> String {
    format!("S{:03}", count + 1)
}

pub fn next_subject_id(count: usize) -> String {
    format!("M{:02}", count + 1)
}

pub fn next_attendance_id(count: usize) -> u64 {
    count as u64 + 1
}
