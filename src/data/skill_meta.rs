//! Icons and blurbs for known skill and category names.

pub const DEFAULT_ICON: &str = "⚡";
pub const DEFAULT_DESCRIPTION: &str = "Proficient in this technology with practical project experience.";

const SKILL_ICONS: &[(&str, &str)] = &[
    ("Java", "☕"),
    ("Spring Boot", "🚀"),
    ("Spring Security", "🔒"),
    ("JPA/Hibernate", "💾"),
    ("PostgreSQL", "🐘"),
    ("Docker", "🐳"),
    ("WebSocket", "🔌"),
    ("REST APIs", "🔄"),
    ("JavaScript", "📜"),
    ("TypeScript", "📘"),
    ("React.js", "⚛️"),
    ("React", "⚛️"),
    ("HTML5", "🌐"),
    ("HTML", "🌐"),
    ("CSS", "🎨"),
    ("Leaflet.js", "🗺️"),
    ("OpenStreetMaps", "🌍"),
    ("Chart.js", "📊"),
    ("Haversine", "📍"),
    ("Haversine Formula", "📍"),
    ("OOP Concepts", "🏗️"),
    ("Real-time Systems", "⚡"),
    ("Map Visualization", "📈"),
    ("OSRM", "🛣️"),
    ("Maven", "📦"),
    ("Git", "📝"),
    ("JWT", "🔑"),
    ("Socket.io", "🔗"),
    ("Node.js", "🟢"),
    ("Spring Boot Microservices", "🚀"),
    ("Docker Compose", "🐳"),
    ("PostgreSQL Optimization", "🐘"),
    ("React Hooks", "⚛️"),
    ("TypeScript Interfaces", "📘"),
    ("REST API Design", "🔄"),
    ("WebSocket Implementation", "🔌"),
    ("Leaflet Map Layers", "🗺️"),
    ("Chart.js Customization", "📊"),
    ("Spring Security JWT", "🔒"),
    ("JPA Query Optimization", "💾"),
    ("Real-time Data Streaming", "⚡"),
    ("GIS Data Processing", "🗺️"),
    ("Map Rendering Optimization", "📈"),
    ("OSRM Routing Algorithms", "🛣️"),
];

const SKILL_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Java", "Strong foundation in object-oriented programming, multithreading, and enterprise application development."),
    ("Spring Boot", "Building scalable microservices and REST APIs with auto-configuration and production-ready features."),
    ("Spring Security", "Implementing JWT authentication, authorization, and secure API endpoints."),
    ("JPA/Hibernate", "Object-relational mapping for efficient database operations and complex query handling."),
    ("PostgreSQL", "Relational database design, optimization, and complex query writing."),
    ("Docker", "Containerization for consistent development and deployment environments."),
    ("WebSocket", "Real-time bidirectional communication for live updates and notifications."),
    ("REST APIs", "Designing and implementing RESTful services with proper status codes and error handling."),
    ("JavaScript", "Modern ES6+ features, asynchronous programming, and DOM manipulation."),
    ("TypeScript", "Type-safe JavaScript development with interfaces, generics, and strict typing."),
    ("React.js", "Building reusable components with hooks, context API, and modern state management."),
    ("React", "Building reusable components with hooks, context API, and modern state management."),
    ("HTML5", "Semantic markup, accessibility, and modern browser APIs."),
    ("HTML", "Semantic markup, accessibility, and modern browser APIs."),
    ("CSS", "Responsive design, CSS Grid, Flexbox, and modern styling techniques."),
    ("Leaflet.js", "Interactive map visualization with custom layers, markers, and controls."),
    ("OpenStreetMaps", "Open-source mapping integration and tile layer management."),
    ("Chart.js", "Data visualization with interactive charts and real-time updates."),
    ("Haversine", "Distance calculation algorithms for geospatial applications."),
    ("Haversine Formula", "Distance calculation algorithms for geospatial applications."),
    ("OOP Concepts", "Encapsulation, inheritance, polymorphism, and design patterns."),
    ("Real-time Systems", "Live data processing, WebSocket connections, and instant updates."),
    ("Map Visualization", "Creating interactive maps with custom data layers and visualization."),
    ("OSRM", "Open Source Routing Machine for pathfinding and route optimization."),
    ("Maven", "Dependency management, build automation, and project lifecycle."),
    ("Git", "Version control, branching strategies, and collaborative workflows."),
    ("JWT", "JSON Web Tokens for secure authentication and authorization."),
    ("Socket.io", "Real-time, bidirectional event-based communication."),
    ("Node.js", "Server-side JavaScript for building scalable network applications."),
    ("Spring Boot Microservices", "Designing and implementing microservices architecture with Spring Boot."),
    ("Docker Compose", "Orchestrating multi-container Docker applications with Docker Compose."),
    ("PostgreSQL Optimization", "Database performance tuning, indexing strategies, and query optimization."),
    ("React Hooks", "Using functional components with hooks for state management and side effects."),
    ("TypeScript Interfaces", "Defining contracts and type structures with TypeScript interfaces."),
    ("REST API Design", "Design principles for creating scalable and maintainable RESTful APIs."),
    ("WebSocket Implementation", "Implementing real-time communication protocols for live data."),
    ("Leaflet Map Layers", "Working with tile layers, vector layers, and custom map overlays."),
    ("Chart.js Customization", "Creating custom visualizations and interactive charts with Chart.js."),
    ("Spring Security JWT", "Implementing JWT-based authentication and authorization in Spring."),
    ("JPA Query Optimization", "Optimizing database queries using JPA criteria and native queries."),
    ("Real-time Data Streaming", "Processing and streaming data in real-time applications."),
    ("GIS Data Processing", "Handling and processing geospatial data formats and operations."),
    ("Map Rendering Optimization", "Techniques for optimizing map rendering performance."),
    ("OSRM Routing Algorithms", "Understanding and implementing routing algorithms with OSRM."),
];

const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Languages", "💻"),
    ("Backend", "🔧"),
    ("Security", "🔒"),
    ("ORM", "💾"),
    ("Database", "💾"),
    ("DevOps", "🚀"),
    ("Real-time", "⚡"),
    ("Frontend", "🎨"),
    ("Mapping", "🗺️"),
    ("GIS", "🗺️"),
    ("Visualization", "📊"),
    ("Algorithms", "🧠"),
    ("Concepts", "🏗️"),
    ("Architecture", "⚙️"),
    ("Routing", "🛣️"),
    ("Tools", "🛠️"),
    ("Other", "⚡"),
    ("Containerization", "🐳"),
    ("Database ORM", "💾"),
    ("Data Visualization", "📊"),
    ("System Architecture", "⚙️"),
    ("GIS Tools", "🗺️"),
    ("Authentication", "🔒"),
    ("SQL Databases", "💾"),
    ("Java Framework", "☕"),
    ("Communication Protocol", "🔌"),
    ("API Design", "🔄"),
    ("GIS Libraries", "🗺️"),
    ("Mapping Services", "🗺️"),
    ("Geospatial Algorithms", "📍"),
    ("Programming Languages", "💻"),
    ("Web Technologies", "🌐"),
    ("Core Languages", "💻"),
    ("Programming Paradigms", "🏗️"),
    ("Type-safe JavaScript", "📘"),
    ("UI Libraries", "⚛️"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

pub fn skill_icon(name: &str) -> &'static str {
    lookup(SKILL_ICONS, name).unwrap_or(DEFAULT_ICON)
}

pub fn skill_description(name: &str) -> &'static str {
    lookup(SKILL_DESCRIPTIONS, name).unwrap_or(DEFAULT_DESCRIPTION)
}

pub fn category_icon(category: &str) -> &'static str {
    if category == crate::catalog::ALL_CATEGORIES {
        return "🌟";
    }
    lookup(CATEGORY_ICONS, category).unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_lookups() {
        assert_eq!(skill_icon("Java"), "☕");
        assert_eq!(skill_icon("COBOL"), DEFAULT_ICON);
        assert_eq!(skill_description("Unknown"), DEFAULT_DESCRIPTION);
        assert!(skill_description("Git").starts_with("Version control"));
        assert_eq!(category_icon("all"), "🌟");
        assert_eq!(category_icon("Tools"), "🛠️");
    }

    #[test]
    fn test_every_bundled_skill_has_a_description() {
        for skill in crate::data::skills() {
            assert_ne!(skill_description(&skill.name), DEFAULT_DESCRIPTION, "{}", skill.name);
        }
    }
}
