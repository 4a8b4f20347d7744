//! Page, sidebar and add-modal state plus the table/modal models the UI renders.
//!
//! Nothing here mutates the store except `ViewState::submit`, which goes
//! through the form gate.

use crate::form::{self, AttendanceDraft, Draft, StudentDraft, SubjectDraft, Submitted};
use crate::lookup::LookupCache;
use crate::model::{AttendanceStatus, ModelError};
use crate::store::Store;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const APP_TITLE: &str = "PenilaianApp";
pub const ADD_LABEL: &str = "Tambah Data";
pub const SUBMIT_LABEL: &str = "Simpan";
pub const CANCEL_LABEL: &str = "Batal";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    #[serde(rename = "Data Siswa")]
    Students,
    #[serde(rename = "Mata Pelajaran")]
    Subjects,
    #[serde(rename = "Absensi")]
    Attendance,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 3] = [Page::Students, Page::Subjects, Page::Attendance];

    pub fn label(self) -> &'static str {
        match self {
            Page::Students => "Data Siswa",
            Page::Subjects => "Mata Pelajaran",
            Page::Attendance => "Absensi",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::Students => "Daftar Siswa",
            Page::Subjects => "Daftar Mata Pelajaran",
            Page::Attendance => "Daftar Absensi",
        }
    }

    pub fn modal_title(self) -> &'static str {
        match self {
            Page::Students => "Tambah Data Siswa",
            Page::Subjects => "Tambah Data Mata Pelajaran",
            Page::Attendance => "Tambah Data Absensi",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Page::Students => &["ID Siswa", "Nama Lengkap", "Kelas"],
            Page::Subjects => &["ID Mapel", "Nama Mata Pelajaran", "Guru Pengampu"],
            Page::Attendance => &["Tanggal", "Nama Siswa", "Mata Pelajaran", "Status"],
        }
    }

    fn index(self) -> usize {
        match self {
            Page::Students => 0,
            Page::Subjects => 1,
            Page::Attendance => 2,
        }
    }
}

impl FromStr for Page {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ModelError::UnknownPage(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow {
    pub id: u64,
    pub date: String,
    pub student_name: String,
    pub subject_name: String,
    pub status: AttendanceStatus,
    pub tone: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableRows {
    Students(Vec<crate::model::Student>),
    Subjects(Vec<crate::model::Subject>),
    Attendance(Vec<AttendanceRow>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableModel {
    pub page: Page,
    pub heading: &'static str,
    pub add_label: &'static str,
    pub columns: &'static [&'static str],
    pub rows: TableRows,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceOptions {
    pub students: Vec<SelectOption>,
    pub subjects: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalModel {
    pub page: Page,
    pub open: bool,
    pub title: &'static str,
    pub fields: &'static [&'static str],
    pub draft: Draft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AttendanceOptions>,
    pub submit_label: &'static str,
    pub cancel_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub app_title: &'static str,
    pub page: Page,
    pub title: &'static str,
    pub sidebar_open: bool,
    pub pages: Vec<&'static str>,
    pub modal: ModalModel,
}

#[derive(Debug, Clone)]
struct ModalState {
    open: bool,
    draft: Draft,
}

#[derive(Debug)]
pub struct ViewState {
    page: Page,
    sidebar_open: bool,
    modals: [ModalState; 3],
    today: NaiveDate,
    lookup: LookupCache,
}

fn blank_draft(page: Page, store: &Store, today: NaiveDate) -> Draft {
    match page {
        Page::Students => Draft::Student(StudentDraft::default()),
        Page::Subjects => Draft::Subject(SubjectDraft::default()),
        Page::Attendance => Draft::Attendance(AttendanceDraft::defaults(store, today)),
    }
}

impl ViewState {
    /// `today` seeds the date field of the attendance form.
    pub fn new(store: &Store, today: NaiveDate) -> Self {
        let modals = Page::ALL.map(|p| ModalState {
            open: false,
            draft: blank_draft(p, store, today),
        });
        Self {
            page: Page::Students,
            sidebar_open: false,
            modals,
            today,
            lookup: LookupCache::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[cfg(test)]
    pub fn is_modal_open(&self) -> bool {
        self.modals[self.page.index()].open
    }

    #[cfg(test)]
    pub fn draft(&self) -> &Draft {
        &self.modals[self.page.index()].draft
    }

    pub fn select_page(&mut self, page: Page) {
        tracing::debug!(page = page.label(), "page selected");
        self.page = page;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Opening an already open modal keeps its pending values.
    pub fn open_modal(&mut self, store: &Store) {
        let (page, today) = (self.page, self.today);
        let modal = &mut self.modals[page.index()];
        if !modal.open {
            modal.open = true;
            modal.draft = blank_draft(page, store, today);
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), ModelError> {
        let modal = &mut self.modals[self.page.index()];
        if !modal.open {
            return Err(ModelError::ModalClosed);
        }
        modal.draft.set_field(field, value)
    }

    /// On success the modal closes and its values reset; a rejected
    /// submission leaves both as they were.
    pub fn submit(&mut self, store: &mut Store) -> Option<Submitted> {
        let page = self.page;
        if !self.modals[page.index()].open {
            return None;
        }
        let created = form::submit(store, &self.modals[page.index()].draft)?;
        self.reset_modal(page, store);
        Some(created)
    }

    pub fn cancel(&mut self, store: &Store) {
        self.reset_modal(self.page, store);
    }

    fn reset_modal(&mut self, page: Page, store: &Store) {
        self.modals[page.index()] = ModalState {
            open: false,
            draft: blank_draft(page, store, self.today),
        };
    }

    pub fn attendance_rows(&mut self, store: &Store) -> Vec<AttendanceRow> {
        let (students, subjects) = self.lookup.indexes(store);
        store
            .attendance()
            .iter()
            .map(|a| AttendanceRow {
                id: a.id,
                date: crate::model::format_date(a.date),
                student_name: students.name_or_fallback(&a.student_id).to_string(),
                subject_name: subjects.name_or_fallback(&a.subject_id).to_string(),
                status: a.status,
                tone: a.status.tone(),
            })
            .collect()
    }

    pub fn lookup(&mut self) -> &mut LookupCache {
        &mut self.lookup
    }

    pub fn table(&mut self, store: &Store, page: Page) -> TableModel {
        let rows = match page {
            Page::Students => TableRows::Students(store.students().to_vec()),
            Page::Subjects => TableRows::Subjects(store.subjects().to_vec()),
            Page::Attendance => TableRows::Attendance(self.attendance_rows(store)),
        };
        TableModel {
            page,
            heading: page.heading(),
            add_label: ADD_LABEL,
            columns: page.columns(),
            rows,
        }
    }

    pub fn modal(&self, store: &Store) -> ModalModel {
        let page = self.page;
        let state = &self.modals[page.index()];
        let options = (page == Page::Attendance).then(|| AttendanceOptions {
            students: store
                .students()
                .iter()
                .map(|s| SelectOption {
                    value: s.id.clone(),
                    label: s.name.clone(),
                })
                .collect(),
            subjects: store
                .subjects()
                .iter()
                .map(|s| SelectOption {
                    value: s.id.clone(),
                    label: s.name.clone(),
                })
                .collect(),
            statuses: AttendanceStatus::ALL
                .into_iter()
                .map(|s| SelectOption {
                    value: s.as_str().to_string(),
                    label: s.as_str().to_string(),
                })
                .collect(),
        });
        ModalModel {
            page,
            open: state.open,
            title: page.modal_title(),
            fields: state.draft.field_names(),
            draft: state.draft.clone(),
            options,
            submit_label: SUBMIT_LABEL,
            cancel_label: CANCEL_LABEL,
        }
    }

    pub fn snapshot(&self, store: &Store) -> ViewSnapshot {
        ViewSnapshot {
            app_title: APP_TITLE,
            page: self.page,
            title: self.page.label(),
            sidebar_open: self.sidebar_open(),
            pages: Page::ALL.iter().map(|p| p.label()).collect(),
            modal: self.modal(store),
        }
    }
}
