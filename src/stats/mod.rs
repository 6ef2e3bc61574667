use crate::models::{Course, University};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregates shown above the course table. Recomputed on every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CourseStats {
    pub total: usize,
    /// Missing fees count as zero.
    pub total_revenue: f64,
    pub departments: usize,
    /// Floor of the mean; zero for an empty catalog.
    pub average_credit_hours: u32,
}

impl CourseStats {
    pub fn from_courses(courses: &[Course]) -> Self {
        let total = courses.len();
        let total_revenue: f64 = courses.iter().filter_map(|c| c.tuition_fee).sum();
        let departments = distinct(courses.iter().map(|c| c.department.as_deref().unwrap_or("")));
        let credits: u64 = courses
            .iter()
            .map(|c| u64::from(c.credit_hours.unwrap_or(0)))
            .sum();

        Self {
            total,
            total_revenue,
            departments,
            average_credit_hours: floor_mean(credits, total),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct UniversityStats {
    pub total: usize,
    /// Established after 2000.
    pub modern: usize,
    pub locations: usize,
    pub average_departments: u32,
}

impl UniversityStats {
    pub fn from_universities(universities: &[University]) -> Self {
        let total = universities.len();
        let modern = universities
            .iter()
            .filter(|u| u.established_year.is_some_and(|y| y > 2000))
            .count();
        let locations = distinct(universities.iter().map(|u| u.location.as_str()));
        let departments: u64 = universities.iter().map(|u| u.department_count() as u64).sum();

        Self {
            total,
            modern,
            locations,
            average_departments: floor_mean(departments, total),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DepartmentShare {
    pub name: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DashboardStats {
    pub total_universities: usize,
    pub total_courses: usize,
    pub active_courses: usize,
    pub total_revenue: f64,
    pub departments: usize,
    /// Largest departments first, at most five.
    pub department_distribution: Vec<DepartmentShare>,
    /// Last five courses of the collection, newest first.
    pub recent_courses: Vec<Course>,
    pub featured_universities: Vec<University>,
}

const DISTRIBUTION_LIMIT: usize = 5;
const RECENT_LIMIT: usize = 5;
const FEATURED_LIMIT: usize = 3;

impl DashboardStats {
    pub fn compute(universities: &[University], courses: &[Course], active: &[Course]) -> Self {
        let course_stats = CourseStats::from_courses(courses);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for c in courses {
            *counts.entry(c.department.as_deref().unwrap_or("")).or_default() += 1;
        }
        let mut department_distribution: Vec<DepartmentShare> = counts
            .into_iter()
            .map(|(name, count)| DepartmentShare {
                name: name.to_string(),
                count,
            })
            .collect();
        // BTreeMap already yields names in order, so a stable sort keeps ties alphabetical.
        department_distribution.sort_by(|a, b| b.count.cmp(&a.count));
        department_distribution.truncate(DISTRIBUTION_LIMIT);

        let recent_courses = courses.iter().rev().take(RECENT_LIMIT).cloned().collect();
        let featured_universities = universities.iter().take(FEATURED_LIMIT).cloned().collect();

        Self {
            total_universities: universities.len(),
            total_courses: course_stats.total,
            active_courses: active.len(),
            total_revenue: course_stats.total_revenue,
            departments: course_stats.departments,
            department_distribution,
            recent_courses,
            featured_universities,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.collect::<BTreeSet<_>>().len()
}

fn floor_mean(sum: u64, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    u32::try_from(sum / count as u64).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i64, dept: &str, credits: Option<u32>, fee: Option<f64>) -> Course {
        Course {
            id,
            course_code: Some(format!("C{id}")),
            title: Some(format!("Course {id}")),
            description: None,
            credit_hours: credits,
            department: Some(dept.into()),
            semester: None,
            academic_year: None,
            instructor: None,
            prerequisites: None,
            tuition_fee: fee,
            is_active: Some(true),
            university_id: None,
        }
    }

    fn uni(id: i64, location: &str, year: Option<i32>, depts: usize) -> University {
        University {
            id,
            name: format!("U{id}"),
            location: location.into(),
            website: None,
            contact_email: None,
            contact_phone: None,
            established_year: year,
            departments: Some((0..depts).map(|i| format!("D{i}")).collect()),
            faculties: None,
        }
    }

    #[test]
    fn revenue_treats_missing_fee_as_zero() {
        let courses = vec![
            course(1, "CS", Some(3), Some(100.0)),
            course(2, "CS", Some(4), Some(200.0)),
            course(3, "Math", Some(2), None),
        ];
        let s = CourseStats::from_courses(&courses);
        assert_eq!(s.total, 3);
        assert_eq!(s.total_revenue, 300.0);
        assert_eq!(s.departments, 2);
        assert_eq!(s.average_credit_hours, 3);
    }

    #[test]
    fn empty_catalog_has_zero_averages() {
        let s = CourseStats::from_courses(&[]);
        assert_eq!(s, CourseStats::default());
        assert_eq!(UniversityStats::from_universities(&[]), UniversityStats::default());
    }

    #[test]
    fn average_credit_hours_floors() {
        let courses = vec![course(1, "A", Some(3), None), course(2, "A", Some(4), None)];
        assert_eq!(CourseStats::from_courses(&courses).average_credit_hours, 3);
    }

    #[test]
    fn university_stats() {
        let unis = vec![
            uni(1, "Paris", Some(1257), 4),
            uni(2, "Paris", Some(2005), 1),
            uni(3, "Lyon", None, 0),
        ];
        let s = UniversityStats::from_universities(&unis);
        assert_eq!(s.total, 3);
        assert_eq!(s.modern, 1);
        assert_eq!(s.locations, 2);
        assert_eq!(s.average_departments, 1);
    }

    #[test]
    fn dashboard_distribution_recent_and_featured() {
        let unis: Vec<University> = (1..=4).map(|i| uni(i, "X", None, 0)).collect();
        let courses = vec![
            course(1, "Math", None, Some(50.0)),
            course(2, "CS", None, None),
            course(3, "CS", None, None),
            course(4, "Art", None, None),
            course(5, "Bio", None, None),
            course(6, "Chem", None, None),
            course(7, "Dance", None, None),
        ];
        let active = vec![courses[0].clone()];
        let d = DashboardStats::compute(&unis, &courses, &active);

        assert_eq!(d.total_universities, 4);
        assert_eq!(d.total_courses, 7);
        assert_eq!(d.active_courses, 1);
        assert_eq!(d.total_revenue, 50.0);
        assert_eq!(d.departments, 6);

        let names: Vec<&str> = d.department_distribution.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["CS", "Art", "Bio", "Chem", "Dance"]);
        assert_eq!(d.department_distribution[0].count, 2);

        let recent: Vec<i64> = d.recent_courses.iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);
        assert_eq!(d.featured_universities.len(), 3);
    }
}
