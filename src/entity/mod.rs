//! Per-resource schema shared by the list view, table and edit dialog.
//!
//! Courses and universities differ only in their fields, columns and
//! statistics; everything else (fetch, search, dialog, save, delete) is
//! written once against [`Entity`].

mod course;
mod university;

pub(crate) use course::UNKNOWN_UNIVERSITY;

use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldKind {
    Text,
    LongText,
    Integer,
    Decimal,
    Email,
    Url,
    Phone,
    Flag,
    /// Comma-separated on screen, an ordered string list on the wire.
    List,
    /// Select over the loaded universities; empty means "none".
    UniversityRef,
}

impl FieldKind {
    /// Never a browser-validated type (`number`, `email`, `url`): raw text
    /// has to reach the draft so coercion and the server decide.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Phone => "tel",
            _ => "text",
        }
    }

    /// Mobile keyboard hint.
    pub fn input_mode(self) -> &'static str {
        match self {
            Self::Integer => "numeric",
            Self::Decimal => "decimal",
            Self::Email => "email",
            Self::Url => "url",
            Self::Phone => "tel",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Spans both grid columns in the dialog.
    pub wide: bool,
}

impl FieldSpec {
    pub(crate) const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            wide: false,
        }
    }

    pub(crate) const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub(crate) const fn wide(mut self) -> Self {
        self.wide = true;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Tone {
    #[default]
    Plain,
    Muted,
    Positive,
    Negative,
}

/// One rendered table cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Cell {
    pub text: String,
    pub detail: Option<String>,
    pub href: Option<String>,
    pub tone: Tone,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        let d = detail.into();
        self.detail = (!d.trim().is_empty()).then_some(d);
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// A display-only summary figure.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Stat {
    pub label: &'static str,
    pub value: String,
    pub caption: &'static str,
    pub color: &'static str,
}

/// Transient, name-addressable copy of a record being edited.
pub(crate) trait Draft: Clone + Default + PartialEq + Send + Sync + 'static {
    /// `None` in create mode.
    fn id(&self) -> Option<i64>;

    fn get(&self, field: &str) -> String;

    /// Assigns exactly one field. Unknown names are ignored.
    fn set(&mut self, field: &str, value: String);
}

pub(crate) trait Entity: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Draft: Draft;
    type Payload: Serialize;
    type Scope: Clone + Default + PartialEq + Send + Sync + 'static;
    type Related: Clone + Default + Send + Sync + 'static;

    /// Lowercase singular, used in messages ("course").
    const NOUN: &'static str;
    /// Capitalised singular ("Course").
    const TITLE: &'static str;
    /// Lowercase plural ("courses").
    const PLURAL: &'static str;
    /// Page heading ("Courses").
    const HEADING: &'static str;
    /// Page route ("/courses").
    const ROUTE: &'static str;
    const SEARCH_HINT: &'static str;

    fn id(&self) -> i64;

    /// Fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    fn label(&self) -> String;

    fn columns() -> &'static [&'static str];

    fn cells(&self, related: &Self::Related) -> Vec<Cell>;

    fn form_fields() -> &'static [FieldSpec];

    /// Choices for select-type fields as `(value, label)`.
    fn options(_field: &FieldSpec, _related: &Self::Related) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Edit-mode seed; absent optional fields become empty strings.
    fn to_draft(&self) -> Self::Draft;

    fn payload(draft: &Self::Draft) -> Self::Payload;

    fn stats(records: &[Self]) -> Vec<Stat>;

    fn detail_href(&self) -> String {
        format!("{}/{}", Self::ROUTE, self.id())
    }
}

/// Records whose search fields contain `term`, ignoring case. Empty term keeps all.
pub(crate) fn filter_records<E: Entity>(records: &[E], term: &str) -> Vec<E> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.search_fields()
                .into_iter()
                .any(|f| f.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, University};

    fn course(id: i64, code: &str, title: &str, dept: &str) -> Course {
        Course {
            id,
            course_code: Some(code.into()),
            title: Some(title.into()),
            description: None,
            credit_hours: Some(3),
            department: Some(dept.into()),
            semester: None,
            academic_year: None,
            instructor: Some("Dr. Searchable".into()),
            prerequisites: None,
            tuition_fee: None,
            is_active: Some(true),
            university_id: None,
        }
    }

    fn university(id: i64, name: &str, location: &str) -> University {
        University {
            id,
            name: name.into(),
            location: location.into(),
            website: Some("https://match.edu".into()),
            contact_email: None,
            contact_phone: None,
            established_year: None,
            departments: None,
            faculties: None,
        }
    }

    #[test]
    fn empty_term_returns_full_collection() {
        let all = vec![course(1, "CS101", "Intro", "CS"), course(2, "MA1", "Calc", "Math")];
        assert_eq!(filter_records(&all, ""), all);
    }

    #[test]
    fn course_search_matches_title_code_and_department_case_insensitively() {
        let all = vec![
            course(1, "CS101", "Intro to Programming", "Computer Science"),
            course(2, "MA201", "Linear Algebra", "Mathematics"),
            course(3, "PH110", "Mechanics", "Physics"),
        ];
        let ids = |term: &str| -> Vec<i64> {
            filter_records(&all, term).iter().map(|c| c.id).collect()
        };
        assert_eq!(ids("PROGRAM"), vec![1]);
        assert_eq!(ids("ma2"), vec![2]);
        assert_eq!(ids("physics"), vec![3]);
        assert_eq!(ids("a"), vec![1, 2, 3]);
        // instructor is not a search field
        assert!(ids("searchable").is_empty());
    }

    #[test]
    fn course_search_skips_missing_fields() {
        let mut c = course(1, "X1", "T", "D");
        c.title = None;
        c.course_code = None;
        assert!(filter_records(&[c.clone()], "t").is_empty());
        assert_eq!(filter_records(&[c], "d").len(), 1);
    }

    #[test]
    fn university_search_matches_name_and_location_only() {
        let all = vec![
            university(1, "Stanford", "California"),
            university(2, "Oxford", "England"),
        ];
        assert_eq!(filter_records(&all, "ford").len(), 2);
        assert_eq!(filter_records(&all, "ENG")[0].id, 2);
        assert!(filter_records(&all, "match.edu").is_empty());
    }

    #[test]
    fn field_kind_hints() {
        assert_eq!(FieldKind::Integer.input_type(), "text");
        assert_eq!(FieldKind::Integer.input_mode(), "numeric");
        assert_eq!(FieldKind::Url.input_type(), "text");
        assert_eq!(FieldKind::Url.input_mode(), "url");
        assert_eq!(FieldKind::Decimal.input_mode(), "decimal");
        assert_eq!(FieldKind::List.input_type(), "text");
    }

    #[test]
    fn no_form_field_is_browser_validated() {
        let kinds = Course::form_fields()
            .iter()
            .chain(University::form_fields())
            .map(|f| f.kind);
        for kind in kinds {
            assert!(
                !matches!(kind.input_type(), "number" | "email" | "url"),
                "{kind:?} would let the browser reject input"
            );
        }
    }
}
