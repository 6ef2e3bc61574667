use super::{Cell, Draft, Entity, FieldKind, FieldSpec, Stat, Tone};
use crate::models::{Course, CoursePayload, CourseScope, University};
use crate::stats::CourseStats;
use crate::util::{format_money, format_thousands, parse_amount, parse_count, parse_optional_int};

pub(crate) const UNKNOWN_UNIVERSITY: &str = "Unknown University";

/// Display name for a course's university reference.
pub(crate) fn university_name(id: Option<i64>, universities: &[University]) -> String {
    id.and_then(|id| universities.iter().find(|u| u.id == id))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_UNIVERSITY.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CourseDraft {
    pub id: Option<i64>,
    pub course_code: String,
    pub title: String,
    pub description: String,
    pub credit_hours: String,
    pub department: String,
    pub semester: String,
    pub academic_year: String,
    pub instructor: String,
    pub prerequisites: String,
    pub tuition_fee: String,
    pub is_active: bool,
    pub university_id: String,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            id: None,
            course_code: String::new(),
            title: String::new(),
            description: String::new(),
            credit_hours: String::new(),
            department: String::new(),
            semester: String::new(),
            academic_year: String::new(),
            instructor: String::new(),
            prerequisites: String::new(),
            tuition_fee: String::new(),
            is_active: true,
            university_id: String::new(),
        }
    }
}

impl Draft for CourseDraft {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn get(&self, field: &str) -> String {
        match field {
            "courseCode" => self.course_code.clone(),
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "creditHours" => self.credit_hours.clone(),
            "department" => self.department.clone(),
            "semester" => self.semester.clone(),
            "academicYear" => self.academic_year.clone(),
            "instructor" => self.instructor.clone(),
            "prerequisites" => self.prerequisites.clone(),
            "tuitionFee" => self.tuition_fee.clone(),
            "isActive" => self.is_active.to_string(),
            "universityId" => self.university_id.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "courseCode" => self.course_code = value,
            "title" => self.title = value,
            "description" => self.description = value,
            "creditHours" => self.credit_hours = value,
            "department" => self.department = value,
            "semester" => self.semester = value,
            "academicYear" => self.academic_year = value,
            "instructor" => self.instructor = value,
            "prerequisites" => self.prerequisites = value,
            "tuitionFee" => self.tuition_fee = value,
            "isActive" => self.is_active = value == "true",
            "universityId" => self.university_id = value,
            _ => tracing::debug!(field, "ignoring unknown course field"),
        }
    }
}

const COURSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("courseCode", "Course code", FieldKind::Text).required(),
    FieldSpec::new("title", "Title", FieldKind::Text).required(),
    FieldSpec::new("description", "Description", FieldKind::LongText).wide(),
    FieldSpec::new("creditHours", "Credit hours", FieldKind::Integer).required(),
    FieldSpec::new("department", "Department", FieldKind::Text).required(),
    FieldSpec::new("semester", "Semester", FieldKind::Text),
    FieldSpec::new("academicYear", "Academic year", FieldKind::Text),
    FieldSpec::new("instructor", "Instructor", FieldKind::Text),
    FieldSpec::new("prerequisites", "Prerequisites", FieldKind::Text),
    FieldSpec::new("tuitionFee", "Tuition fee", FieldKind::Decimal),
    FieldSpec::new("universityId", "University", FieldKind::UniversityRef),
    FieldSpec::new("isActive", "Active", FieldKind::Flag),
];

impl Entity for Course {
    type Draft = CourseDraft;
    type Payload = CoursePayload;
    type Scope = CourseScope;
    type Related = Vec<University>;

    const NOUN: &'static str = "course";
    const TITLE: &'static str = "Course";
    const PLURAL: &'static str = "courses";
    const HEADING: &'static str = "Courses";
    const ROUTE: &'static str = "/courses";
    const SEARCH_HINT: &'static str = "Search by title, code or department…";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [&self.title, &self.course_code, &self.department]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect()
    }

    fn label(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    fn columns() -> &'static [&'static str] {
        &["Course", "Department", "University", "Credits", "Fee", "Status"]
    }

    fn cells(&self, universities: &Vec<University>) -> Vec<Cell> {
        let department = self.department.clone().unwrap_or_default();
        let department_cell = if department.trim().is_empty() {
            Cell::text("—").tone(Tone::Muted)
        } else {
            Cell::text(department.clone()).link(format!(
                "/courses?department={}",
                urlencoding::encode(&department)
            ))
        };

        let university_cell = match self.university_id {
            Some(id) => Cell::text(university_name(Some(id), universities))
                .link(format!("/universities/{id}")),
            None => Cell::text(UNKNOWN_UNIVERSITY).tone(Tone::Muted),
        };

        let active = self.is_active.unwrap_or(true);

        vec![
            Cell::text(self.label())
                .detail(self.course_code.clone().unwrap_or_default())
                .link(self.detail_href()),
            department_cell,
            university_cell,
            Cell::text(self.credit_hours.unwrap_or(0).to_string()),
            match self.tuition_fee {
                Some(fee) => Cell::text(format_money(fee)),
                None => Cell::text("—").tone(Tone::Muted),
            },
            Cell::text(if active { "Active" } else { "Inactive" }).tone(if active {
                Tone::Positive
            } else {
                Tone::Negative
            }),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        COURSE_FIELDS
    }

    fn options(field: &FieldSpec, universities: &Vec<University>) -> Vec<(String, String)> {
        if field.kind != FieldKind::UniversityRef {
            return Vec::new();
        }
        std::iter::once((String::new(), "No university".to_string()))
            .chain(
                universities
                    .iter()
                    .map(|u| (u.id.to_string(), u.name.clone())),
            )
            .collect()
    }

    fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            id: Some(self.id),
            course_code: self.course_code.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            credit_hours: self.credit_hours.map(|v| v.to_string()).unwrap_or_default(),
            department: self.department.clone().unwrap_or_default(),
            semester: self.semester.clone().unwrap_or_default(),
            academic_year: self.academic_year.clone().unwrap_or_default(),
            instructor: self.instructor.clone().unwrap_or_default(),
            prerequisites: self.prerequisites.clone().unwrap_or_default(),
            tuition_fee: self.tuition_fee.map(|v| v.to_string()).unwrap_or_default(),
            is_active: self.is_active.unwrap_or(true),
            university_id: self.university_id.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    fn payload(d: &CourseDraft) -> CoursePayload {
        CoursePayload {
            id: d.id,
            course_code: d.course_code.clone(),
            title: d.title.clone(),
            description: d.description.clone(),
            credit_hours: parse_count(&d.credit_hours),
            department: d.department.clone(),
            semester: d.semester.clone(),
            academic_year: d.academic_year.clone(),
            instructor: d.instructor.clone(),
            prerequisites: d.prerequisites.clone(),
            tuition_fee: parse_amount(&d.tuition_fee),
            is_active: d.is_active,
            university_id: parse_optional_int(&d.university_id),
        }
    }

    fn stats(records: &[Course]) -> Vec<Stat> {
        let s = CourseStats::from_courses(records);
        vec![
            Stat {
                label: "Total Courses",
                value: s.total.to_string(),
                caption: "In the catalog",
                color: "#3f51b5",
            },
            Stat {
                label: "Total Revenue",
                value: format_thousands(s.total_revenue),
                caption: "Sum of tuition fees",
                color: "#4caf50",
            },
            Stat {
                label: "Departments",
                value: s.departments.to_string(),
                caption: "Distinct departments",
                color: "#ff9800",
            },
            Stat {
                label: "Avg. Credits",
                value: s.average_credit_hours.to_string(),
                caption: "Per course",
                color: "#f50057",
            },
        ]
    }
}
