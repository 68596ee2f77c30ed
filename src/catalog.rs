//! Skill Catalog
//!
//! Grouping, filtering and counting for the skills page.

use crate::models::{Skill, SkillLevel};

pub const ALL_CATEGORIES: &str = "all";
pub const OVERVIEW_LIMIT: usize = 10;

/// Skills grouped by category, groups in first-appearance order.
pub fn group_by_category(skills: &[Skill]) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        let category = skill.category_or_other();
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((category.to_string(), vec![skill.clone()])),
        }
    }
    groups
}

/// `all` followed by the sorted unique categories.
pub fn categories(skills: &[Skill]) -> Vec<String> {
    let mut unique: Vec<String> = skills.iter().map(|s| s.category_or_other().to_string()).collect();
    unique.sort();
    unique.dedup();
    std::iter::once(ALL_CATEGORIES.to_string()).chain(unique).collect()
}

pub fn filter_by_category(skills: &[Skill], active: &str) -> Vec<Skill> {
    if active == ALL_CATEGORIES {
        return skills.to_vec();
    }
    skills.iter().filter(|s| s.category_or_other() == active).cloned().collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkillStats {
    pub total: usize,
    pub categories: usize,
    pub advanced: usize,
}

pub fn stats(skills: &[Skill]) -> SkillStats {
    SkillStats {
        total: skills.len(),
        categories: categories(skills).len() - 1,
        advanced: skills.iter().filter(|s| s.level == SkillLevel::Advanced).count(),
    }
}

/// First `OVERVIEW_LIMIT` members and how many were left out.
pub fn overview(members: &[Skill]) -> (&[Skill], usize) {
    let shown = members.len().min(OVERVIEW_LIMIT);
    (&members[..shown], members.len() - shown)
}

/// "Showing N skills in ..." wording for the active filter.
pub fn scope_label(active: &str) -> &str {
    if active == ALL_CATEGORIES {
        "all categories"
    } else {
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: SkillLevel, category: Option<&str>) -> Skill {
        Skill { id: None, name: name.into(), level, category: category.map(Into::into) }
    }

    fn sample() -> Vec<Skill> {
        vec![
            skill("Java", SkillLevel::Advanced, Some("Languages")),
            skill("Spring", SkillLevel::Intermediate, Some("Backend")),
            skill("Go", SkillLevel::Beginner, Some("Languages")),
            skill("Vim", SkillLevel::Advanced, None),
            skill("Axum", SkillLevel::Intermediate, Some("Backend")),
        ]
    }

    #[test]
    fn test_group_first_appearance_order() {
        let groups = group_by_category(&sample());
        let names: Vec<_> = groups.iter().map(|(n, m)| (n.as_str(), m.len())).collect();
        assert_eq!(names, vec![("Languages", 2), ("Backend", 2), ("Other", 1)]);
    }

    #[test]
    fn test_categories_all_then_sorted() {
        assert_eq!(categories(&sample()), vec!["all", "Backend", "Languages", "Other"]);
        assert_eq!(categories(&[]), vec!["all"]);
    }

    #[test]
    fn test_filter() {
        assert_eq!(filter_by_category(&sample(), "all").len(), 5);
        let backend = filter_by_category(&sample(), "Backend");
        assert_eq!(backend.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(), vec!["Spring", "Axum"]);
        assert_eq!(filter_by_category(&sample(), "Other")[0].name, "Vim");
        assert!(filter_by_category(&sample(), "Nope").is_empty());
    }

    #[test]
    fn test_stats() {
        assert_eq!(stats(&sample()), SkillStats { total: 5, categories: 3, advanced: 2 });
        assert_eq!(stats(&[]), SkillStats::default());
    }

    #[test]
    fn test_overview_limit() {
        let many: Vec<Skill> =
            (0..13).map(|i| skill(&format!("s{}", i), SkillLevel::Intermediate, Some("X"))).collect();
        let (shown, more) = overview(&many);
        assert_eq!((shown.len(), more), (10, 3));
        let (shown, more) = overview(&many[..3]);
        assert_eq!((shown.len(), more), (3, 0));
    }

    #[test]
    fn test_bundled_skill_stats() {
        let bundled = crate::data::skills();
        let stats = stats(&bundled);
        assert_eq!(stats.total, bundled.len());
        assert!(stats.advanced > 0);
        assert_eq!(scope_label("all"), "all categories");
        assert_eq!(scope_label("GIS"), "GIS");
    }
}
