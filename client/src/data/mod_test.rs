use std::collections::HashSet;

use super::architectures::{ARCHITECTURES, architecture_for};
use super::education::{EDUCATION, EducationStatus, completed_education, education_sorted, in_progress_education};
use super::experience::{EXPERIENCES, current_experience, experiences_sorted};
use super::personal::{PERSONAL, SEO};
use super::projects::{PROJECTS, ProjectCategory, featured_projects, projects_by_category};
use super::skills::{SKILL_CATEGORIES, all_skills, category_by_id};

// =============================================================
// personal
// =============================================================

#[test]
fn first_name_is_the_first_word() {
    assert_eq!(PERSONAL.first_name(), "Souleymane");
}

#[test]
fn social_email_points_at_contact_email() {
    assert_eq!(PERSONAL.social.email, format!("mailto:{}", PERSONAL.contact.email));
}

#[test]
fn seo_author_matches_name() {
    assert_eq!(SEO.author, PERSONAL.name);
    assert!(SEO.site_url.starts_with("https://"));
}

#[test]
fn seo_absolute_url_joins_with_single_slash() {
    assert_eq!(SEO.absolute_url("/images/og-image.jpg"), "https://yourdomain.com/images/og-image.jpg");
    assert_eq!(SEO.absolute_url("cv.pdf"), "https://yourdomain.com/cv.pdf");
}

#[test]
fn seo_keywords_are_comma_separated() {
    let csv = SEO.keywords_csv();
    assert!(csv.starts_with("AI Engineer, ML Engineer"));
    assert_eq!(csv.split(", ").count(), SEO.keywords.len());
}

// =============================================================
// experience
// =============================================================

#[test]
fn exactly_one_current_position() {
    assert_eq!(EXPERIENCES.iter().filter(|e| e.current).count(), 1);
    assert_eq!(current_experience().map(|e| e.id), Some("akkodis-research"));
}

#[test]
fn experiences_sorted_newest_first() {
    let ids: Vec<_> = experiences_sorted().iter().map(|e| e.id).collect();
    assert_eq!(ids, ["akkodis-research", "liebherr-aerospace"]);
}

#[test]
fn experience_ids_are_unique() {
    let ids: HashSet<_> = EXPERIENCES.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), EXPERIENCES.len());
}

#[test]
fn every_referenced_architecture_exists() {
    for exp in EXPERIENCES {
        for project in exp.projects {
            if let Some(id) = project.architecture_id {
                assert!(architecture_for(id).is_some(), "missing architecture {id}");
            }
        }
    }
}

// =============================================================
// projects
// =============================================================

#[test]
fn all_projects_are_featured() {
    assert_eq!(featured_projects().len(), PROJECTS.len());
}

#[test]
fn projects_by_category_filters() {
    let agentic: Vec<_> = projects_by_category(ProjectCategory::AgenticAi).iter().map(|p| p.id).collect();
    assert_eq!(agentic, ["blog-generator", "ai-chatbots"]);
    assert!(projects_by_category(ProjectCategory::MlOps).is_empty());
}

#[test]
fn category_labels() {
    assert_eq!(ProjectCategory::RealTimeMl.label(), "Real-time ML");
    assert_eq!(ProjectCategory::Rag.label(), "RAG");
}

// =============================================================
// skills
// =============================================================

#[test]
fn there_are_eight_skill_categories() {
    assert_eq!(SKILL_CATEGORIES.len(), 8);
}

#[test]
fn all_skills_removes_duplicates_in_first_seen_order() {
    let skills = all_skills();
    let unique: HashSet<_> = skills.iter().collect();
    assert_eq!(unique.len(), skills.len());
    assert_eq!(skills.first(), Some(&"Pandas"));
    assert_eq!(skills.iter().filter(|s| **s == "Kibana").count(), 1);
    assert!(skills.contains(&"Grafana"));
}

#[test]
fn category_lookup_by_id() {
    assert_eq!(category_by_id("rag").map(|c| c.icon), Some("🔍"));
    assert!(category_by_id("unknown").is_none());
}

// =============================================================
// education
// =============================================================

#[test]
fn education_status_filters() {
    let in_progress: Vec<_> = in_progress_education().iter().map(|e| e.id).collect();
    assert_eq!(in_progress, ["udacity-genai", "wqu-applied-ai"]);
    assert_eq!(completed_education().len(), 4);
    assert_eq!(
        EDUCATION.iter().filter(|e| e.status == EducationStatus::Expected).count(),
        1
    );
}

#[test]
fn education_sorted_newest_first() {
    let sorted = education_sorted();
    assert_eq!(sorted.len(), EDUCATION.len());
    assert!(sorted.windows(2).all(|w| w[0].start_date >= w[1].start_date));
    assert_eq!(sorted.last().map(|e| e.id), Some("esat-engineering"));
}

// =============================================================
// architectures
// =============================================================

#[test]
fn architecture_edges_reference_known_nodes() {
    for arch in ARCHITECTURES {
        let ids: HashSet<_> = arch.nodes.iter().map(|n| n.id).collect();
        for edge in arch.edges {
            assert!(ids.contains(edge.from), "{}: unknown {}", arch.project_id, edge.from);
            assert!(ids.contains(edge.to), "{}: unknown {}", arch.project_id, edge.to);
        }
    }
}

#[test]
fn architecture_lookup() {
    assert_eq!(architecture_for("rag-docs").map(|a| a.nodes.len()), Some(14));
    assert!(architecture_for("nope").is_none());
}
