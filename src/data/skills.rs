use crate::models::{Skill, SkillLevel};

use SkillLevel::{Advanced, Intermediate};

const SKILLS: &[(&str, SkillLevel, &str)] = &[
    ("Java", Advanced, "Languages"),
    ("Spring Boot", Intermediate, "Backend"),
    ("Spring Security", Intermediate, "Security"),
    ("JPA/Hibernate", Intermediate, "ORM"),
    ("PostgreSQL", Intermediate, "Database"),
    ("Docker", Intermediate, "DevOps"),
    ("WebSocket", Intermediate, "Real-time"),
    ("REST APIs", Advanced, "Backend"),
    ("JavaScript", Advanced, "Frontend"),
    ("TypeScript", Intermediate, "Frontend"),
    ("React", Intermediate, "Frontend"),
    ("HTML", Advanced, "Frontend"),
    ("CSS", Advanced, "Frontend"),
    ("Leaflet.js", Intermediate, "Mapping"),
    ("OpenStreetMaps", Intermediate, "Mapping"),
    ("Chart.js", Intermediate, "Visualization"),
    ("JWT", Intermediate, "Security"),
    ("Git", Advanced, "Tools"),
    ("Maven", Intermediate, "Tools"),
    ("Node.js", Intermediate, "Backend"),
    ("Socket.io", Intermediate, "Real-time"),
    ("OSRM", Intermediate, "Routing"),
    ("Haversine", Intermediate, "Algorithms"),
    ("OOP Concepts", Advanced, "Concepts"),
    ("Real-time Systems", Intermediate, "Architecture"),
    ("Map Visualization", Intermediate, "GIS"),
    ("Spring Boot Microservices", Intermediate, "Backend"),
    ("Docker Compose", Intermediate, "DevOps"),
    ("PostgreSQL Optimization", Intermediate, "Database"),
    ("React Hooks", Intermediate, "Frontend"),
    ("TypeScript Interfaces", Intermediate, "Frontend"),
    ("REST API Design", Advanced, "Backend"),
    ("WebSocket Implementation", Intermediate, "Real-time"),
    ("Leaflet Map Layers", Intermediate, "GIS"),
    ("Chart.js Customization", Intermediate, "Visualization"),
    ("Spring Security JWT", Intermediate, "Security"),
    ("JPA Query Optimization", Intermediate, "ORM"),
    ("Real-time Data Streaming", Intermediate, "Architecture"),
    ("GIS Data Processing", Intermediate, "GIS"),
    ("Map Rendering Optimization", Intermediate, "Visualization"),
    ("OSRM Routing Algorithms", Intermediate, "Routing"),
    ("Haversine Formula", Intermediate, "Algorithms"),
];

pub fn skills() -> Vec<Skill> {
    SKILLS
        .iter()
        .map(|&(name, level, category)| Skill {
            id: None,
            name: name.to_string(),
            level,
            category: Some(category.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_skills() {
        let all = skills();
        assert_eq!(all.len(), 42);
        assert_eq!(all[0].name, "Java");
        assert!(all.iter().all(|s| s.category.is_some()));
    }
}
