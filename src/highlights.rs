//! Project Highlights
//!
//! Bullets come from a newline-delimited string. Cards show the first few
//! and a per-card toggle reveals the rest.

pub const VISIBLE_BULLETS: usize = 4;

/// Split on real newlines or the two-character `\n` escape, dropping blanks.
pub fn split_bullets(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    text.replace("\\n", "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn visible_bullets(bullets: &[String], expanded: bool) -> &[String] {
    if expanded {
        bullets
    } else {
        &bullets[..bullets.len().min(VISIBLE_BULLETS)]
    }
}

/// Toggle text, or `None` when everything already fits.
pub fn toggle_label(total: usize, expanded: bool) -> Option<String> {
    if total <= VISIBLE_BULLETS {
        None
    } else if expanded {
        Some("Show less".to_string())
    } else {
        Some(format!("Show {} more", total - VISIBLE_BULLETS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_real_and_escaped_newlines() {
        assert_eq!(split_bullets(Some("A\\nB\n  C \n\n")), vec!["A", "B", "C"]);
        assert!(split_bullets(None).is_empty());
        assert!(split_bullets(Some("  \n ")).is_empty());
    }

    #[test]
    fn test_show_more_cycle() {
        let bullets = split_bullets(Some("A\nB\nC\nD\nE"));
        let mut expanded = false;
        assert_eq!(visible_bullets(&bullets, expanded).len(), 4);
        assert_eq!(toggle_label(bullets.len(), expanded).as_deref(), Some("Show 1 more"));

        expanded = !expanded;
        assert_eq!(visible_bullets(&bullets, expanded).last().map(String::as_str), Some("E"));
        assert_eq!(toggle_label(bullets.len(), expanded).as_deref(), Some("Show less"));

        expanded = !expanded;
        assert_eq!(visible_bullets(&bullets, expanded).len(), 4);
    }

    #[test]
    fn test_no_toggle_when_short() {
        let bullets = split_bullets(Some("A\nB"));
        assert_eq!(visible_bullets(&bullets, false).len(), 2);
        assert_eq!(toggle_label(bullets.len(), false), None);
        assert_eq!(toggle_label(4, true), None);
    }
}
