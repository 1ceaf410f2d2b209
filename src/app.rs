use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    error::Result,
    interface::Transport,
    model::{Mode, SearchParams, Term},
    registration::ZagwebRegistration,
};

/// Catalogue vs. schedule comparison for one subject in one term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReport {
    /// Every catalogue course of the subject, course number -> title.
    pub all_courses: BTreeMap<String, String>,
    /// Courses with at least one section this term.
    pub courses_being_offered: BTreeMap<String, String>,
    /// Catalogue course numbers without a section this term.
    pub not_offered: Vec<String>,
}

/// Collects `courseNumber -> courseTitle` from a search response's `data`
/// rows. Rows missing either field are skipped.
pub fn course_titles(response: &Value) -> BTreeMap<String, String> {
    response["data"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| {
                    let number = row["courseNumber"].as_str()?;
                    let title = row["courseTitle"].as_str()?;
                    Some((number.to_string(), title.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

impl CourseReport {
    pub fn from_responses(courses: &Value, classes: &Value) -> Self {
        let all_courses = course_titles(courses);
        let courses_being_offered = course_titles(classes);
        let not_offered = all_courses
            .keys()
            .filter(|number| !courses_being_offered.contains_key(*number))
            .cloned()
            .collect();

        Self {
            all_courses,
            courses_being_offered,
            not_offered,
        }
    }
}

/// Selects `term` in search mode, then compares the subject's catalogue with
/// the sections scheduled for that term.
pub async fn build_report<T: Transport>(
    zag: &mut ZagwebRegistration<T>,
    term: &str,
    subject: &str,
    page_max_size: u32,
) -> Result<CourseReport> {
    zag.change_mode(term, Mode::Search).await?;

    let params = SearchParams::new()
        .term(term)
        .subject(subject)
        .page_max_size(page_max_size.to_string());

    let courses = zag.get_courses(&params).await?;
    let classes = zag.get_classes(&params).await?;

    let report = CourseReport::from_responses(&courses, &classes);
    log::info!(
        "{subject} in {term}: {} catalogue courses, {} offered",
        report.all_courses.len(),
        report.courses_being_offered.len()
    );
    Ok(report)
}

pub fn print_terms(terms: &[Term]) {
    println!("============================================");
    for (idx, term) in terms.iter().enumerate() {
        println!("{:>3}. {:<8}{}", idx + 1, term.code, term.description);
    }
    println!("============================================");
}
