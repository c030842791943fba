// src/render/structured.rs
//! Structured, section-based view of a candidate profile
//!
//! Each section is guarded independently. An empty section produces nothing at
//! all; placeholders such as `N/A` only ever appear at the field level.

use crate::render::markup::Element;
use crate::types::profile::{present, CandidateProfile, Education, Experience};

pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";
pub const MISSING_START: &str = "N/A";
pub const MISSING_END: &str = "Present";
pub const MISSING_YEAR: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredView {
    pub header: HeaderView,
    pub experience: Vec<ExperienceCard>,
    pub education: Vec<EducationCard>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub name: String,
    /// `(label, value)` pairs for the contact fields that are present.
    pub contacts: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceCard {
    pub role: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationCard {
    pub institution: String,
    pub degree: String,
    pub class_of: String,
}

impl StructuredView {
    pub fn project(profile: &CandidateProfile) -> Self {
        Self {
            header: HeaderView::project(profile),
            experience: profile.experience.iter().map(ExperienceCard::project).collect(),
            education: profile.education.iter().map(EducationCard::project).collect(),
            skills: profile.skills.clone(),
        }
    }

    /// Section headings that will be rendered, in order.
    pub fn section_titles(&self) -> Vec<&'static str> {
        let mut titles = Vec::new();
        if !self.experience.is_empty() {
            titles.push("Experience");
        }
        if !self.education.is_empty() {
            titles.push("Education");
        }
        if !self.skills.is_empty() {
            titles.push("Skills");
        }
        titles
    }

    pub fn to_elements(&self) -> Vec<Element> {
        let mut sections = vec![self.header.to_element()];

        if !self.experience.is_empty() {
            sections.push(section(
                "Experience",
                self.experience.iter().map(ExperienceCard::to_element),
            ));
        }

        if !self.education.is_empty() {
            sections.push(section(
                "Education",
                self.education.iter().map(EducationCard::to_element),
            ));
        }

        if !self.skills.is_empty() {
            let tags = Element::new("div").class("skills-list").children(
                self.skills
                    .iter()
                    .map(|skill| Element::new("span").class("skill-tag").text(skill.as_str())),
            );
            sections.push(section("Skills", std::iter::once(tags)));
        }

        sections
    }
}

impl HeaderView {
    fn project(profile: &CandidateProfile) -> Self {
        let name = present(&profile.name)
            .unwrap_or(UNKNOWN_CANDIDATE)
            .to_string();

        let mut contacts = Vec::new();
        if let Some(info) = &profile.contact_info {
            let fields = [
                ("Email:", &info.email),
                ("Phone:", &info.phone),
                ("LinkedIn:", &info.linkedin),
                ("GitHub:", &info.github),
            ];
            for (label, value) in fields {
                if let Some(value) = present(value) {
                    contacts.push((label, value.to_string()));
                }
            }
        }

        Self { name, contacts }
    }

    fn to_element(&self) -> Element {
        let contact_row = Element::new("div").class("contact-row").children(
            self.contacts.iter().map(|(label, value)| {
                Element::new("span")
                    .class("contact-item")
                    .child(Element::new("strong").text(*label))
                    .text(format!(" {}", value))
            }),
        );

        Element::new("div")
            .class("profile-header")
            .child(Element::new("h2").class("candidate-name").text(self.name.as_str()))
            .child(contact_row)
    }
}

impl ExperienceCard {
    fn project(entry: &Experience) -> Self {
        Self {
            role: present(&entry.role).unwrap_or_default().to_string(),
            company: present(&entry.company).unwrap_or_default().to_string(),
            dates: format!(
                "{} - {}",
                present(&entry.start_date).unwrap_or(MISSING_START),
                present(&entry.end_date).unwrap_or(MISSING_END)
            ),
            description: present(&entry.description).unwrap_or_default().to_string(),
        }
    }

    fn to_element(&self) -> Element {
        Element::new("div")
            .class("card")
            .child(Element::new("h4").class("card-title").text(self.role.as_str()))
            .child(Element::new("div").class("card-subtitle").text(self.company.as_str()))
            .child(Element::new("div").class("card-meta").text(self.dates.as_str()))
            .child(Element::new("p").class("card-body").text(self.description.as_str()))
    }
}

impl EducationCard {
    fn project(entry: &Education) -> Self {
        Self {
            institution: present(&entry.institution).unwrap_or_default().to_string(),
            degree: present(&entry.degree).unwrap_or_default().to_string(),
            class_of: format!(
                "Class of {}",
                present(&entry.graduation_year).unwrap_or(MISSING_YEAR)
            ),
        }
    }

    fn to_element(&self) -> Element {
        Element::new("div")
            .class("card")
            .child(Element::new("h4").class("card-title").text(self.institution.as_str()))
            .child(Element::new("div").class("card-subtitle").text(self.degree.as_str()))
            .child(Element::new("div").class("card-meta").text(self.class_of.as_str()))
    }
}

fn section<I>(title: &'static str, body: I) -> Element
where
    I: IntoIterator<Item = Element>,
{
    Element::new("div")
        .class("section")
        .child(Element::new("h3").class("section-title").text(title))
        .children(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markup::render_all;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn view(raw: serde_json::Value) -> StructuredView {
        StructuredView::project(&CandidateProfile::from_value(&raw))
    }

    fn select_text(html: &str, selector: &str) -> Vec<String> {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse(selector).unwrap();
        doc.select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_name_only_renders_header_without_sections() {
        let v = view(json!({"name": "Grace Hopper"}));
        let html = render_all(&v.to_elements());

        assert_eq!(select_text(&html, "h2"), vec!["Grace Hopper"]);
        assert!(select_text(&html, "h3").is_empty());
        assert!(select_text(&html, ".contact-item").is_empty());
        assert!(v.section_titles().is_empty());
    }

    #[test]
    fn test_missing_name_falls_back() {
        assert_eq!(view(json!({})).header.name, UNKNOWN_CANDIDATE);
        assert_eq!(view(json!({"name": ""})).header.name, UNKNOWN_CANDIDATE);
        assert_eq!(view(json!({"name": null})).header.name, UNKNOWN_CANDIDATE);
    }

    #[test]
    fn test_contact_row_lists_present_fields_in_order() {
        let v = view(json!({
            "contact_info": {"github": "gh/ada", "email": "ada@example.com", "phone": "", "linkedin": null}
        }));
        let html = render_all(&v.to_elements());

        assert_eq!(
            select_text(&html, ".contact-item"),
            vec!["Email: ada@example.com", "GitHub: gh/ada"]
        );
    }

    #[test]
    fn test_experience_without_dates() {
        let v = view(json!({"experience": [{"role": "Engineer", "company": "Acme"}]}));
        let html = render_all(&v.to_elements());

        assert_eq!(select_text(&html, ".card-meta"), vec!["N/A - Present"]);
        assert_eq!(select_text(&html, ".card-title"), vec!["Engineer"]);
        assert_eq!(select_text(&html, ".card-subtitle"), vec!["Acme"]);
        assert_eq!(select_text(&html, ".card-body"), vec![""]);
    }

    #[test]
    fn test_experience_dates_default_independently() {
        let v = view(json!({"experience": [
            {"start_date": "2019"},
            {"end_date": "2021"},
            {"start_date": "2018", "end_date": "2020"}
        ]}));
        let dates: Vec<_> = v.experience.iter().map(|c| c.dates.as_str()).collect();
        assert_eq!(dates, vec!["2019 - Present", "N/A - 2021", "2018 - 2020"]);
    }

    #[test]
    fn test_missing_role_company_description_are_blank() {
        let v = view(json!({"experience": [{}]}));
        let card = &v.experience[0];
        assert_eq!(card.role, "");
        assert_eq!(card.company, "");
        assert_eq!(card.description, "");
    }

    #[test]
    fn test_education_class_of() {
        let v = view(json!({"education": [
            {"institution": "MIT", "degree": "BSc", "graduation_year": "2015"},
            {"institution": "ETH"}
        ]}));
        let html = render_all(&v.to_elements());

        assert_eq!(
            select_text(&html, ".card-meta"),
            vec!["Class of 2015", "Class of N/A"]
        );
        assert_eq!(select_text(&html, "h3"), vec!["Education"]);
    }

    #[test]
    fn test_skills_heading_only_when_non_empty() {
        let empty = render_all(&view(json!({"skills": []})).to_elements());
        assert!(select_text(&empty, "h3").is_empty());

        let v = view(json!({"skills": ["Rust", "SQL", "Rust"]}));
        let html = render_all(&v.to_elements());
        assert_eq!(select_text(&html, "h3"), vec!["Skills"]);
        assert_eq!(select_text(&html, ".skill-tag"), vec!["Rust", "SQL", "Rust"]);
    }

    #[test]
    fn test_section_order() {
        let v = view(json!({
            "skills": ["Go"],
            "education": [{"institution": "MIT"}],
            "experience": [{"role": "Dev"}]
        }));
        assert_eq!(v.section_titles(), vec!["Experience", "Education", "Skills"]);

        let html = render_all(&v.to_elements());
        assert_eq!(select_text(&html, "h3"), vec!["Experience", "Education", "Skills"]);
    }

    #[test]
    fn test_hostile_values_stay_text() {
        let payload = "<img src=x onerror=alert(1)>";
        let v = view(json!({
            "name": payload,
            "skills": [payload],
            "experience": [{"description": "<script>steal()</script>"}]
        }));
        let html = render_all(&v.to_elements());

        assert!(!html.contains("<img"));
        assert!(!html.contains("<script>"));
        assert_eq!(select_text(&html, "h2"), vec![payload]);
        assert_eq!(select_text(&html, ".skill-tag"), vec![payload]);

        let doc = Html::parse_fragment(&html);
        assert_eq!(doc.select(&Selector::parse("img").unwrap()).count(), 0);
        assert_eq!(doc.select(&Selector::parse("script").unwrap()).count(), 0);
    }
}
