use serde::{Deserialize, Serialize};

/// Course record as returned by the course service.
///
/// Every field except the id is lenient on read: older rows may carry nulls
/// where the form now always submits a value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Course {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credit_hours: Option<u32>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub prerequisites: Option<String>,
    #[serde(default)]
    pub tuition_fee: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,

    /// Weak reference to `University::id`; lookup only.
    #[serde(default)]
    pub university_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct University {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub established_year: Option<i32>,
    #[serde(default)]
    pub departments: Option<Vec<String>>,
    #[serde(default)]
    pub faculties: Option<Vec<String>>,
}

impl University {
    pub fn department_count(&self) -> usize {
        self.departments.as_ref().map(Vec::len).unwrap_or(0)
    }
}

/// Body sent on course create/update. Numeric fields are already coerced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CoursePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub course_code: String,
    pub title: String,
    pub description: String,
    pub credit_hours: u32,
    pub department: String,
    pub semester: String,
    pub academic_year: String,
    pub instructor: String,
    pub prerequisites: String,
    pub tuition_fee: Option<f64>,
    pub is_active: bool,
    pub university_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UniversityPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub website: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub established_year: Option<i32>,
    pub departments: Vec<String>,
    pub faculties: Vec<String>,
}

/// Which slice of the course catalog a list fetch asks for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum CourseScope {
    #[default]
    All,
    Active,
    University(i64),
    Department(String),
}

impl CourseScope {
    /// Reads `?active=true`, `?university=<id>` or `?department=<name>`.
    /// University wins over department, department over active.
    pub fn from_query(
        active: Option<&str>,
        university: Option<&str>,
        department: Option<&str>,
    ) -> Self {
        if let Some(id) = university.and_then(|v| v.trim().parse::<i64>().ok()) {
            return Self::University(id);
        }
        if let Some(dept) = department.map(str::trim).filter(|d| !d.is_empty()) {
            return Self::Department(dept.to_string());
        }
        if matches!(active.map(str::trim), Some("true") | Some("1")) {
            return Self::Active;
        }
        Self::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_contract_deserialize_with_nulls() {
        let json = r#"{
            "id": 7,
            "courseCode": "CS101",
            "title": "Intro",
            "description": null,
            "creditHours": 3,
            "department": "CS",
            "semester": "Fall",
            "academicYear": "2024-2025",
            "instructor": null,
            "prerequisites": null,
            "tuitionFee": null,
            "isActive": true,
            "universityId": null
        }"#;
        let c: Course = serde_json::from_str(json).expect("course should parse");
        assert_eq!(c.id, 7);
        assert_eq!(c.course_code.as_deref(), Some("CS101"));
        assert_eq!(c.credit_hours, Some(3));
        assert!(c.tuition_fee.is_none());
        assert!(c.university_id.is_none());
    }

    #[test]
    fn university_contract_deserialize_missing_lists() {
        let json = r#"{"id": 1, "name": "MIT", "location": "Cambridge"}"#;
        let u: University = serde_json::from_str(json).expect("university should parse");
        assert_eq!(u.name, "MIT");
        assert_eq!(u.department_count(), 0);
        assert!(u.faculties.is_none());
    }

    #[test]
    fn course_payload_uses_camel_case_and_omits_missing_id() {
        let p = CoursePayload {
            id: None,
            course_code: "CS101".into(),
            title: "Intro".into(),
            description: String::new(),
            credit_hours: 0,
            department: "CS".into(),
            semester: String::new(),
            academic_year: String::new(),
            instructor: String::new(),
            prerequisites: String::new(),
            tuition_fee: None,
            is_active: true,
            university_id: Some(2),
        };
        let v = serde_json::to_value(p).expect("should serialize");
        assert!(v.get("id").is_none());
        assert_eq!(v["courseCode"], "CS101");
        assert_eq!(v["creditHours"], 0);
        assert!(v["tuitionFee"].is_null());
        assert_eq!(v["universityId"], 2);
        assert_eq!(v["isActive"], true);
    }

    #[test]
    fn course_scope_from_query_precedence() {
        assert_eq!(CourseScope::from_query(None, None, None), CourseScope::All);
        assert_eq!(
            CourseScope::from_query(Some("true"), None, None),
            CourseScope::Active
        );
        assert_eq!(
            CourseScope::from_query(Some("true"), Some("4"), Some("CS")),
            CourseScope::University(4)
        );
        assert_eq!(
            CourseScope::from_query(None, Some("abc"), Some(" Math ")),
            CourseScope::Department("Math".into())
        );
        assert_eq!(
            CourseScope::from_query(Some("no"), None, Some("  ")),
            CourseScope::All
        );
    }
}
