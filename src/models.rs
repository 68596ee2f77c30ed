//! Frontend Models
//!
//! Data structures matching backend entities. Every field except `title`
//! (or `name` for skills) is optional and rendered only when present.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Skill proficiency. Unknown or missing values read as `Intermediate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "advanced" => SkillLevel::Advanced,
            _ => SkillLevel::Intermediate,
        }
    }

    /// CSS modifier, e.g. `level-advanced`
    pub fn css_class(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "level-beginner",
            SkillLevel::Intermediate => "level-intermediate",
            SkillLevel::Advanced => "level-advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SkillLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(SkillLevel::from_str).unwrap_or_default())
    }
}

/// Skill data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    #[serde(default)]
    pub category: Option<String>,
}

impl Skill {
    pub fn category_or_other(&self) -> &str {
        match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => "Other",
        }
    }
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Comma-separated list
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    /// Newline-delimited bullets. Also accepts a JSON array of lines.
    #[serde(default, deserialize_with = "text_or_lines")]
    pub highlights: Option<String>,
}

/// Certification data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

/// Award data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub name_tag: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrLines {
    Text(String),
    Lines(Vec<String>),
}

fn text_or_lines<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<TextOrLines>::deserialize(deserializer)? {
        None => None,
        Some(TextOrLines::Text(text)) => Some(text),
        Some(TextOrLines::Lines(lines)) => Some(lines.join("\n")),
    })
}

/// Treat empty or whitespace-only strings as absent.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parsing() {
        assert_eq!(SkillLevel::from_str("advanced"), SkillLevel::Advanced);
        assert_eq!(SkillLevel::from_str(" Beginner "), SkillLevel::Beginner);
        assert_eq!(SkillLevel::from_str("Guru"), SkillLevel::Intermediate);
    }

    #[test]
    fn test_skill_from_backend_json() {
        let skills: Vec<Skill> = serde_json::from_str(
            r#"[
                {"id": 3, "name": "Java", "level": "ADVANCED", "category": "Languages"},
                {"name": "Git", "level": null},
                {"name": "Docker", "extra": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(skills[0].level, SkillLevel::Advanced);
        assert_eq!(skills[0].id, Some(3));
        assert_eq!(skills[1].level, SkillLevel::Intermediate);
        assert_eq!(skills[1].category_or_other(), "Other");
        assert_eq!(skills[2].level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_project_camel_case_fields() {
        let project: Project = serde_json::from_str(
            r#"{"orderIndex": 2, "title": "Dispatch", "techStack": "Java, Docker",
                "githubLink": "https://github.com/x/y", "liveLink": null,
                "highlights": "A\nB"}"#,
        )
        .unwrap();
        assert_eq!(project.order_index, Some(2));
        assert_eq!(project.tech_stack.as_deref(), Some("Java, Docker"));
        assert_eq!(project.live_link, None);
        assert_eq!(project.highlights.as_deref(), Some("A\nB"));
    }

    #[test]
    fn test_highlights_accepts_list() {
        let project: Project =
            serde_json::from_str(r#"{"title": "T", "highlights": ["one", "two"]}"#).unwrap();
        assert_eq!(project.highlights.as_deref(), Some("one\ntwo"));
        let bare: Project = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(bare.highlights, None);
    }

    #[test]
    fn test_award_and_certification_fields() {
        let award: Award =
            serde_json::from_str(r#"{"title": "Prefect", "org": "School", "nameTag": "(me)"}"#).unwrap();
        assert_eq!(award.name_tag.as_deref(), Some("(me)"));
        let cert: Certification = serde_json::from_str(
            r#"{"title": "AI", "issueDate": "2026", "credentialUrl": "https://c"}"#,
        )
        .unwrap();
        assert_eq!(cert.issue_date.as_deref(), Some("2026"));
        assert_eq!(cert.credential_url.as_deref(), Some("https://c"));
        assert_eq!(cert.credential_id, None);
    }

    #[test]
    fn test_present_skips_blank() {
        assert_eq!(present(&Some("  ".to_string())), None);
        assert_eq!(present(&Some(" x ".to_string())), Some("x"));
        assert_eq!(present(&None), None);
    }
}
