//! Header and footer shared by every page.

use super::Link;

pub const COMPANY_NAME: &str = "劇團 或素翔鷺";
pub const ROMAN_NAME: &str = "Gekidan Alstro";
pub const COPYRIGHT: &str = "© 2025 Gekidan Alstro. All Rights Reserved.";

/// Footer SNS links.
pub const SNS_LINKS: [Link; 3] = [
    Link {
        label: "X",
        href: "https://twitter.com",
        class: "footer-sns-link",
        aria_label: Some("X (Twitter)"),
    },
    Link {
        label: "Instagram",
        href: "https://instagram.com",
        class: "footer-sns-link",
        aria_label: Some("Instagram"),
    },
    Link {
        label: "YouTube",
        href: "https://youtube.com",
        class: "footer-sns-link",
        aria_label: Some("YouTube"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sns_links_are_external() {
        assert!(SNS_LINKS.iter().all(Link::is_external));
    }
}
