use crate::models::Award;

const AWARDS: &[(i32, &str, &str, Option<&str>, &str)] = &[
    (
        1,
        "Content Creator & Educator",
        "YouTube",
        Some("(Imesh Weerasuria)"),
        "Run a YouTube channel dedicated to teaching current SLIIT modules with a focus on test preparation, sharing knowledge and supporting fellow students.",
    ),
    (
        2,
        "Foundations in Microsoft Office Packages",
        "IDM Nations Campus",
        None,
        "Completed training in Word, Excel, PowerPoint, and Access, building a strong foundation in productivity tools.",
    ),
    (
        3,
        "Senior Prefect",
        "Local Dhamma School",
        None,
        "Served as Senior Prefect, demonstrating leadership, discipline, and responsibility in managing student activities and upholding school values.",
    ),
    (
        4,
        "Speech & Drama Training",
        "Wendy Whatmore Academy",
        None,
        "Engaged in speech and drama activities during childhood, improving public speaking, confidence, and creative expression.",
    ),
];

pub fn awards() -> Vec<Award> {
    AWARDS
        .iter()
        .map(|&(order, title, org, name_tag, description)| Award {
            id: None,
            order_index: Some(order),
            title: title.to_string(),
            org: Some(org.to_string()),
            name_tag: name_tag.map(str::to_string),
            period: None,
            description: Some(description.to_string()),
        })
        .collect()
}
