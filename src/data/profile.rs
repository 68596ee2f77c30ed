//! Profile copy for the home and about pages.

pub const NAME: &str = "Imesh Adheesha";
pub const SUBTITLE: &str = "Software Engineering Undergraduate";
pub const ROLE: &str = "FullStack-Focused Developer";
pub const NAV_TAGLINE: &str = "Software Engineer";

pub const SUMMARY_LINES: &[&str] = &[
    "Software engineering undergraduate with strong Full Stack Development focus.",
    "Experienced in building REST APIs using Spring Boot, PostgreSQL,",
    "and integrating them with React-based frontends.",
];

pub const SUMMARY_POINTS: &[&str] = &[
    "Interested in Fullstack systems, clean architecture, and scalable design",
    "Current CGPA: 3.37 at SLIIT, specializing in Software Engineering",
    "Building practical solutions with modern tech stack",
];

pub const TECH_STACK: &[&str] = &["Spring Boot", "React.js", "PostgreSQL", "Node.js", "Java", "TypeScript"];

/// (label, css modifier)
pub const EDUCATION_BADGES: &[(&str, &str)] = &[
    ("Royal College Colombo Alumni", "badge-royal"),
    ("SLIIT • BSc (Hons) IT • Year 3", "badge-sliit"),
];

pub const PROFILE_IMAGE: &str = "/images/profile-main.jpeg";

/// Animated counter on the about page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub target: f64,
    pub suffix: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Projects", target: 5.0, suffix: "+" },
    Stat { label: "Skills", target: 18.0, suffix: "" },
    Stat { label: "Years Experience", target: 0.0, suffix: "+" },
    Stat { label: "CGPA", target: 3.37, suffix: "" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        icon: "⚡",
        skills: &["React.js", "JavaScript", "TypeScript", "CSS", "HTML5"],
    },
    SkillGroup {
        category: "Backend",
        icon: "🔧",
        skills: &["Node.js", "Java", "C++", "Spring Boot", "MERN Stack"],
    },
    SkillGroup {
        category: "APIs & Tools",
        icon: "🛠️",
        skills: &["Socket.io", "JWT", "Maven", "Docker", "REST APIs"],
    },
    SkillGroup {
        category: "Maps & AI",
        icon: "🧠",
        skills: &["Leaflet.js", "OpenStreetMaps", "Google Maps API", "AI Prompt Engineering"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Honor {
    pub title: &'static str,
    pub organization: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const HONORS: &[Honor] = &[
    Honor {
        title: "Content Creator & Educator",
        organization: "YouTube - imesh weerasuria",
        description: "Run a YouTube channel dedicated to teaching current SLIIT modules with a focus on test preparation, sharing knowledge, and supporting fellow students.",
        icon: "🎓",
        color: "#3b82f6",
    },
    Honor {
        title: "Foundations in Microsoft Office Packages",
        organization: "IDM Nations Campus",
        description: "Successfully completed training in core Microsoft applications including Word, Excel, PowerPoint, and Access, building a strong foundation in productivity tools.",
        icon: "📊",
        color: "#10b981",
    },
    Honor {
        title: "Senior Prefect",
        organization: "Local Dhamma School",
        description: "Served as a senior prefect demonstrating leadership, discipline, and responsibility in managing student activities and upholding school values.",
        icon: "🌟",
        color: "#f59e0b",
    },
    Honor {
        title: "Speech and Drama Training",
        organization: "Wendy Whatmore Academy",
        description: "Engaged in a wide range of speech and drama activities during childhood, enhancing public speaking confidence and creative expression.",
        icon: "🎤",
        color: "#8b5cf6",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "Present",
        event: "3rd Year Undergraduate at SLIIT",
        description: "BSc (Hons) Information Technology specializing in Software Engineering",
        icon: "🎓",
    },
    TimelineEntry {
        year: "2021",
        event: "Royal College Colombo Alumni",
        description: "Old Boy Union Member - Proud Royalist",
        icon: "👑",
    },
    TimelineEntry {
        year: "2020",
        event: "YouTube Channel Launch",
        description: "Started educational content creation for SLIIT students",
        icon: "🎬",
    },
    TimelineEntry {
        year: "2019",
        event: "Microsoft Office Certification",
        description: "Completed comprehensive training in productivity tools",
        icon: "📄",
    },
    TimelineEntry {
        year: "2018",
        event: "Leadership Role",
        description: "Senior Prefect at Local Dhamma School",
        icon: "⭐",
    },
    TimelineEntry {
        year: "2015",
        event: "Creative Development",
        description: "Speech and Drama training at Wendy Whatmore Academy",
        icon: "🎭",
    },
];
