use super::{Cell, Draft, Entity, FieldKind, FieldSpec, Stat, Tone};
use crate::models::{University, UniversityPayload};
use crate::stats::UniversityStats;
use crate::util::{join_list, parse_optional_int, split_list};

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct UniversityDraft {
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub website: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub established_year: String,
    /// Comma-separated.
    pub departments: String,
    /// Comma-separated.
    pub faculties: String,
}

impl Draft for UniversityDraft {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn get(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "location" => self.location.clone(),
            "website" => self.website.clone(),
            "contactEmail" => self.contact_email.clone(),
            "contactPhone" => self.contact_phone.clone(),
            "establishedYear" => self.established_year.clone(),
            "departments" => self.departments.clone(),
            "faculties" => self.faculties.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "location" => self.location = value,
            "website" => self.website = value,
            "contactEmail" => self.contact_email = value,
            "contactPhone" => self.contact_phone = value,
            "establishedYear" => self.established_year = value,
            "departments" => self.departments = value,
            "faculties" => self.faculties = value,
            _ => tracing::debug!(field, "ignoring unknown university field"),
        }
    }
}

const UNIVERSITY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text).required(),
    FieldSpec::new("location", "Location", FieldKind::Text).required(),
    FieldSpec::new("website", "Website", FieldKind::Url),
    FieldSpec::new("contactEmail", "Contact email", FieldKind::Email),
    FieldSpec::new("contactPhone", "Contact phone", FieldKind::Phone),
    FieldSpec::new("establishedYear", "Established year", FieldKind::Integer),
    FieldSpec::new("departments", "Departments (comma separated)", FieldKind::List).wide(),
    FieldSpec::new("faculties", "Faculties (comma separated)", FieldKind::List).wide(),
];

impl Entity for University {
    type Draft = UniversityDraft;
    type Payload = UniversityPayload;
    type Scope = ();
    type Related = ();

    const NOUN: &'static str = "university";
    const TITLE: &'static str = "University";
    const PLURAL: &'static str = "universities";
    const HEADING: &'static str = "Universities";
    const ROUTE: &'static str = "/universities";
    const SEARCH_HINT: &'static str = "Search by name or location…";

    fn id(&self) -> i64 {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn columns() -> &'static [&'static str] {
        &["University", "Location", "Contact", "Established", "Departments"]
    }

    fn cells(&self, _related: &()) -> Vec<Cell> {
        let website = self.website.clone().unwrap_or_default();
        let contact = [&self.contact_email, &self.contact_phone]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
            .collect::<Vec<_>>();

        vec![
            Cell::text(self.name.clone())
                .detail(website)
                .link(self.detail_href()),
            Cell::text(self.location.clone()),
            match contact.as_slice() {
                [] => Cell::text("—").tone(Tone::Muted),
                [first, rest @ ..] => Cell::text(*first).detail(rest.join(" · ")),
            },
            match self.established_year {
                Some(year) => Cell::text(year.to_string()),
                None => Cell::text("—").tone(Tone::Muted),
            },
            Cell::text(self.department_count().to_string()),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        UNIVERSITY_FIELDS
    }

    fn to_draft(&self) -> UniversityDraft {
        UniversityDraft {
            id: Some(self.id),
            name: self.name.clone(),
            location: self.location.clone(),
            website: self.website.clone().unwrap_or_default(),
            contact_email: self.contact_email.clone().unwrap_or_default(),
            contact_phone: self.contact_phone.clone().unwrap_or_default(),
            established_year: self
                .established_year
                .map(|y| y.to_string())
                .unwrap_or_default(),
            departments: join_list(self.departments.as_deref().unwrap_or_default()),
            faculties: join_list(self.faculties.as_deref().unwrap_or_default()),
        }
    }

    fn payload(d: &UniversityDraft) -> UniversityPayload {
        UniversityPayload {
            id: d.id,
            name: d.name.clone(),
            location: d.location.clone(),
            website: d.website.clone(),
            contact_email: d.contact_email.clone(),
            contact_phone: d.contact_phone.clone(),
            established_year: parse_optional_int(&d.established_year),
            departments: split_list(&d.departments),
            faculties: split_list(&d.faculties),
        }
    }

    fn stats(records: &[University]) -> Vec<Stat> {
        let s = UniversityStats::from_universities(records);
        vec![
            Stat {
                label: "Total Universities",
                value: s.total.to_string(),
                caption: "Registered institutions",
                color: "#3f51b5",
            },
            Stat {
                label: "Modern Universities",
                value: s.modern.to_string(),
                caption: "Established after 2000",
                color: "#4caf50",
            },
            Stat {
                label: "Locations",
                value: s.locations.to_string(),
                caption: "Distinct locations",
                color: "#ff9800",
            },
            Stat {
                label: "Avg. Departments",
                value: s.average_departments.to_string(),
                caption: "Per university",
                color: "#f50057",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> University {
        University {
            id: 11,
            name: "ETH Zurich".into(),
            location: "Zurich".into(),
            website: None,
            contact_email: Some("info@ethz.ch".into()),
            contact_phone: None,
            established_year: Some(1855),
            departments: Some(vec!["Physics".into(), "Architecture".into()]),
            faculties: None,
        }
    }

    #[test]
    fn default_draft_is_all_empty() {
        let d = UniversityDraft::default();
        assert_eq!(d.id(), None);
        for f in UNIVERSITY_FIELDS {
            assert_eq!(d.get(f.name), "", "field {} should start empty", f.name);
        }
    }

    #[test]
    fn to_draft_copies_fields_with_empty_defaults() {
        let d = sample().to_draft();
        assert_eq!(d.id, Some(11));
        assert_eq!(d.name, "ETH Zurich");
        assert_eq!(d.website, "");
        assert_eq!(d.contact_email, "info@ethz.ch");
        assert_eq!(d.established_year, "1855");
        assert_eq!(d.departments, "Physics, Architecture");
        assert_eq!(d.faculties, "");
    }

    #[test]
    fn payload_parses_year_and_lists() {
        let mut d = sample().to_draft();
        d.set("establishedYear", "nineteen".into());
        d.set("faculties", "Engineering, Sciences,".into());
        let p = University::payload(&d);
        assert_eq!(p.id, Some(11));
        assert_eq!(p.established_year, None);
        assert_eq!(p.departments, vec!["Physics", "Architecture"]);
        assert_eq!(p.faculties, vec!["Engineering", "Sciences"]);

        let v = serde_json::to_value(&p).expect("should serialize");
        assert_eq!(v["contactEmail"], "info@ethz.ch");
        assert!(v["establishedYear"].is_null());
    }

    #[test]
    fn contact_cell_joins_available_channels() {
        let mut u = sample();
        u.contact_phone = Some("+41 44".into());
        let cells = u.cells(&());
        assert_eq!(cells[2].text, "info@ethz.ch");
        assert_eq!(cells[2].detail.as_deref(), Some("+41 44"));

        u.contact_email = None;
        u.contact_phone = None;
        assert_eq!(u.cells(&())[2].tone, Tone::Muted);
    }
}
