use crate::model::{Student, Subject};
use crate::store::Store;
use std::collections::HashMap;

/// Label shown for an attendance record whose student or subject id is unknown.
pub const FALLBACK_LABEL: &str = "N/A";

#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    pub fn from_students(students: &[Student]) -> Self {
        Self {
            names: students
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect(),
        }
    }

    pub fn from_subjects(subjects: &[Subject]) -> Self {
        Self {
            names: subjects
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn name_or_fallback(&self, id: &str) -> &str {
        self.get(id).unwrap_or(FALLBACK_LABEL)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

#[derive(Debug, Default)]
struct Cached {
    rev: Option<u64>,
    index: NameIndex,
}

/// Student and subject name maps, rebuilt only when the store revision for
/// that collection moves.
#[derive(Debug, Default)]
pub struct LookupCache {
    students: Cached,
    subjects: Cached,
    rebuilds: u64,
}

impl LookupCache {
    pub fn refresh(&mut self, store: &Store) {
        if self.students.rev != Some(store.students_rev()) {
            self.students.index = NameIndex::from_students(store.students());
            self.students.rev = Some(store.students_rev());
            self.rebuilds += 1;
            tracing::debug!(entries = self.students.index.len(), "student name index rebuilt");
        }
        if self.subjects.rev != Some(store.subjects_rev()) {
            self.subjects.index = NameIndex::from_subjects(store.subjects());
            self.subjects.rev = Some(store.subjects_rev());
            self.rebuilds += 1;
            tracing::debug!(entries = self.subjects.index.len(), "subject name index rebuilt");
        }
    }

    pub fn indexes(&mut self, store: &Store) -> (&NameIndex, &NameIndex) {
        self.refresh(store);
        (&self.students.index, &self.subjects.index)
    }

    #[cfg(test)]
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewStudent;

    #[test]
    fn known_ids_resolve_and_unknown_fall_back() {
        let store = Store::seeded();
        let students = NameIndex::from_students(store.students());
        let subjects = NameIndex::from_subjects(store.subjects());
        assert_eq!(students.name_or_fallback("S002"), "Budi Santoso");
        assert_eq!(subjects.name_or_fallback("M03"), "Fisika");
        assert_eq!(students.name_or_fallback("S404"), FALLBACK_LABEL);
        assert_eq!(subjects.get("M99"), None);
    }

    #[test]
    fn cache_rebuilds_only_after_a_change() {
        let mut store = Store::seeded();
        let mut cache = LookupCache::default();
        cache.refresh(&store);
        assert_eq!(cache.rebuilds(), 2);
        cache.refresh(&store);
        assert_eq!(cache.rebuilds(), 2);

        store.add_student(NewStudent {
            name: "Dedi".into(),
            class: "12B".into(),
        });
        let (students, _) = cache.indexes(&store);
        assert_eq!(students.name_or_fallback("S004"), "Dedi");
        assert_eq!(cache.rebuilds(), 3);
    }
}
