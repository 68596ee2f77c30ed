use crate::models::Certification;

const CERTIFICATIONS: &[(i32, &str, &str, &str, &str)] = &[
    (
        1,
        "AI / ML Engineer – Stage 1",
        "SLIIT",
        "Jan 2026",
        "Completed Stage 1 of the AI/ML Engineer certification program, covering machine learning fundamentals, supervised learning, and practical model building.",
    ),
    (
        2,
        "Foundations in Microsoft Office Packages",
        "IDM Nations Campus",
        "2023",
        "Comprehensive training in Microsoft Word, Excel, PowerPoint, and Access, building strong productivity and documentation skills.",
    ),
];

pub fn certifications() -> Vec<Certification> {
    CERTIFICATIONS
        .iter()
        .map(|&(order, title, issuer, issue_date, description)| Certification {
            id: None,
            order_index: Some(order),
            title: title.to_string(),
            issuer: Some(issuer.to_string()),
            issue_date: Some(issue_date.to_string()),
            description: Some(description.to_string()),
            credential_id: None,
            credential_url: None,
        })
        .collect()
}
