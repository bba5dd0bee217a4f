//! HTML renderer.
//!
//! Turns a [`PageView`] into a complete HTML5 document. Every text node and
//! attribute value goes through [`escape`]; nothing in a catalog can inject
//! markup.

use crate::contact::{FieldKind, FormField};
use crate::domain::{Activity, ActivityStatus, NewsItem};
use crate::filter::FilterView;
use crate::metrics::METRICS;
use crate::pages::{
    activities, contact, shell, Block, Image, Link, PageState, PageView, Section, Site,
    SliderView,
};
use crate::routes::{Route, NAV_ITEMS};

/// Escape text for use in HTML text nodes and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build and render the page for a URL path. Unknown paths render the shell
/// around an empty main area.
pub fn render_path(site: &Site, path: &str, state: &PageState) -> String {
    render_document(&site.page_for_path(path, state))
}

/// Render a full document: shell, header, page sections and footer.
pub fn render_document(page: &PageView<'_>) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape(&page.title)));
    out.push_str("</head>\n<body>\n<div class=\"app\">\n");

    render_header(&mut out, page.route);

    out.push_str("<main class=\"main\">\n");
    for section in &page.sections {
        render_section(&mut out, section);
    }
    out.push_str("</main>\n");

    render_footer(&mut out);

    out.push_str("</div>\n</body>\n</html>\n");
    METRICS.inc_pages_rendered();
    out
}

fn render_header(out: &mut String, active: Option<Route>) {
    out.push_str("<header class=\"header\">\n<div class=\"header-container\">\n");
    out.push_str(&format!(
        "<div class=\"header-logo\"><a href=\"/\"><h1 class=\"header-title\">{}</h1></a></div>\n",
        escape(shell::COMPANY_NAME)
    ));
    out.push_str("<nav class=\"header-nav\">\n<ul class=\"header-menu\">\n");
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        if i > 0 {
            out.push_str("<li class=\"header-menu-divider\" aria-hidden=\"true\">|</li>\n");
        }
        let is_active = active.is_some_and(|r| r.path() == item.href);
        let class = if is_active {
            "header-menu-link is-active"
        } else {
            "header-menu-link"
        };
        out.push_str(&format!(
            "<li class=\"header-menu-item\"><a class=\"{}\" href=\"{}\"{}>{}</a></li>\n",
            class,
            escape(item.href),
            if item.is_external() { new_tab_attrs(item.href) } else { "" },
            escape(item.label)
        ));
    }
    out.push_str("</ul>\n</nav>\n</div>\n</header>\n");
}

fn render_footer(out: &mut String) {
    out.push_str("<footer class=\"footer\">\n<div class=\"footer-container\">\n");
    out.push_str(&format!(
        "<div class=\"footer-brand\"><p class=\"footer-title\">{}</p><p class=\"footer-subtitle\">{}</p></div>\n",
        escape(shell::COMPANY_NAME),
        escape(shell::ROMAN_NAME)
    ));
    out.push_str("<div class=\"footer-sns\">\n");
    for link in &shell::SNS_LINKS {
        render_link(out, link);
    }
    out.push_str("</div>\n");
    out.push_str(&format!(
        "<p class=\"footer-copyright\">{}</p>\n",
        escape(shell::COPYRIGHT)
    ));
    out.push_str("</div>\n</footer>\n");
}

fn render_section(out: &mut String, section: &Section<'_>) {
    out.push_str(&format!("<section class=\"{}\">\n", escape(section.class)));
    for block in &section.blocks {
        render_block(out, block);
    }
    out.push_str("</section>\n");
}

fn render_block(out: &mut String, block: &Block<'_>) {
    match block {
        Block::Hero {
            title,
            roman,
            catchphrase,
            background,
        } => {
            out.push_str(&format!(
                "<div class=\"hero-background\" style=\"background-image: url(&quot;{}&quot;)\"></div>\n",
                escape(background)
            ));
            out.push_str(&format!(
                "<div class=\"hero-content\"><h1 class=\"hero-title\">{}</h1><p class=\"hero-subtitle\">{}</p><p class=\"hero-catchphrase\">{}</p></div>\n",
                escape(title),
                escape(roman),
                escape(catchphrase)
            ));
        }
        Block::Heading { level, class, text } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!(
                "<h{level} class=\"{}\">{}</h{level}>\n",
                escape(class),
                escape(text)
            ));
        }
        Block::Lines { class, lines } => {
            out.push_str(&format!("<div class=\"{}\">\n", escape(class)));
            for line in lines.iter() {
                if line.is_empty() {
                    out.push_str("<br>\n");
                } else {
                    out.push_str(&format!("<p>{}</p>\n", escape(line)));
                }
            }
            out.push_str("</div>\n");
        }
        Block::Note { class, text } => {
            out.push_str(&format!(
                "<p class=\"{}\">{}</p>\n",
                escape(class),
                escape(text)
            ));
        }
        Block::Images(images) => {
            out.push_str("<div class=\"images\">\n");
            for image in images.iter() {
                render_image(out, image);
            }
            out.push_str("</div>\n");
        }
        Block::Links(links) => {
            out.push_str("<div class=\"links\">\n");
            for link in links.iter() {
                render_link(out, link);
            }
            out.push_str("</div>\n");
        }
        Block::News(items) => render_news(out, items),
        Block::Slider(view) => render_slider(out, view),
        Block::Activities(view) => render_activities(out, view),
        Block::ContactForm(fields) => render_contact_form(out, fields),
    }
}

fn new_tab_attrs(href: &str) -> &'static str {
    if href.starts_with("http") {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    } else {
        ""
    }
}

fn render_image(out: &mut String, image: &Image) {
    out.push_str(&format!(
        "<img class=\"{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
        escape(image.class),
        escape(image.src),
        escape(image.alt)
    ));
}

fn render_link(out: &mut String, link: &Link) {
    let aria = link
        .aria_label
        .map(|label| format!(" aria-label=\"{}\"", escape(label)))
        .unwrap_or_default();
    out.push_str(&format!(
        "<a class=\"{}\" href=\"{}\"{}{}>{}</a>\n",
        escape(link.class),
        escape(link.href),
        new_tab_attrs(link.href),
        aria,
        escape(link.label)
    ));
}

fn render_news(out: &mut String, items: &[NewsItem]) {
    out.push_str("<ul class=\"news-list\">\n");
    for item in items {
        out.push_str(&format!(
            "<li class=\"news-item\"><a href=\"{}\"{}><span class=\"news-date\">{}</span><span class=\"news-tag\">{}</span><span class=\"news-item-title\">{}</span></a></li>\n",
            escape(&item.link),
            new_tab_attrs(&item.link),
            escape(&item.date_label()),
            escape(item.tag.label()),
            escape(&item.title)
        ));
    }
    out.push_str("</ul>\n");
}

fn render_slider(out: &mut String, view: &SliderView<'_>) {
    out.push_str("<div class=\"slider-container\">\n");
    if !view.slides.is_empty() {
        out.push_str("<button class=\"slider-arrow slider-arrow-prev\" type=\"button\" aria-label=\"前のスライド\">‹</button>\n");
        out.push_str("<div class=\"slider-track\">\n");
        for (i, slide) in view.slides.iter().enumerate() {
            let active = view.active == Some(i);
            out.push_str(&format!(
                "<a class=\"{}\" href=\"{}\"{} aria-hidden=\"{}\"><img src=\"{}\" alt=\"{}\"><div class=\"slide-info\"><h3 class=\"slide-title\">{}</h3><p class=\"slide-schedule\">{}</p></div></a>\n",
                if active { "slide is-active" } else { "slide" },
                escape(&slide.link),
                new_tab_attrs(&slide.link),
                !active,
                escape(&slide.image_url),
                escape(&slide.title),
                escape(&slide.title),
                escape(&slide.schedule)
            ));
        }
        out.push_str("</div>\n");
        out.push_str("<button class=\"slider-arrow slider-arrow-next\" type=\"button\" aria-label=\"次のスライド\">›</button>\n");
    }
    out.push_str("</div>\n");
}

fn render_activities(out: &mut String, view: &FilterView<'_>) {
    out.push_str("<div class=\"activities-filter\">\n");
    for tag in &view.tags {
        let class = if *tag == view.selected {
            "filter-button is-active"
        } else {
            "filter-button"
        };
        out.push_str(&format!(
            "<button type=\"button\" class=\"{}\" data-tag=\"{}\">{}</button>\n",
            class,
            escape(tag.slug()),
            escape(tag.label())
        ));
    }
    out.push_str("</div>\n");

    if view.partition.is_empty() {
        out.push_str(&format!(
            "<p class=\"activities-empty\">{}</p>\n",
            escape(activities::EMPTY_TEXT)
        ));
        return;
    }

    let groups = [
        (activities::CURRENT_HEADING, &view.partition.current),
        (activities::PAST_HEADING, &view.partition.past),
    ];
    for (heading, list) in groups {
        if list.is_empty() {
            continue;
        }
        out.push_str("<div class=\"activities-group\">\n");
        out.push_str(&format!(
            "<h2 class=\"activities-group-title\">{}</h2>\n",
            escape(heading)
        ));
        out.push_str("<div class=\"activities-list\">\n");
        for activity in list.iter() {
            render_activity_card(out, activity);
        }
        out.push_str("</div>\n</div>\n");
    }
}

fn render_activity_card(out: &mut String, activity: &Activity) {
    let class = match activity.status {
        ActivityStatus::Upcoming => "activity-card",
        ActivityStatus::Past => "activity-card is-past",
    };
    out.push_str(&format!("<article class=\"{}\">\n", class));
    out.push_str(&format!(
        "<p class=\"activity-date\">{}</p>\n<span class=\"activity-tag\">{}</span>\n<h3 class=\"activity-title\">{}</h3>\n<p class=\"activity-description\">{}</p>\n",
        escape(&activity.date_label()),
        escape(activity.tag.label()),
        escape(&activity.title),
        escape(&activity.description)
    ));
    if let Some(href) = &activity.external_link {
        out.push_str(&format!(
            "<a class=\"activity-link\" href=\"{}\"{}>{}</a>\n",
            escape(href),
            new_tab_attrs(href),
            escape(activities::DETAIL_LINK_TEXT)
        ));
    }
    out.push_str("</article>\n");
}

fn render_contact_form(out: &mut String, fields: &[FormField]) {
    out.push_str("<form class=\"contact-form\" method=\"post\" action=\"#\">\n");
    for field in fields {
        out.push_str("<div class=\"form-group\">\n");
        out.push_str(&format!(
            "<label class=\"form-label\" for=\"{}\">{}{}</label>\n",
            escape(field.name),
            escape(field.label),
            if field.required {
                "<span class=\"form-required\">*</span>"
            } else {
                ""
            }
        ));
        let required = if field.required { " required" } else { "" };
        match field.kind {
            FieldKind::TextArea { rows } => out.push_str(&format!(
                "<textarea class=\"form-textarea\" id=\"{}\" name=\"{}\" rows=\"{}\"{}></textarea>\n",
                escape(field.name),
                escape(field.name),
                rows,
                required
            )),
            kind => {
                if let Some(input_type) = kind.input_type() {
                    out.push_str(&format!(
                        "<input class=\"form-input\" type=\"{}\" id=\"{}\" name=\"{}\"{}>\n",
                        input_type,
                        escape(field.name),
                        escape(field.name),
                        required
                    ));
                }
            }
        }
        out.push_str("</div>\n");
    }
    out.push_str(&format!(
        "<button class=\"form-submit\" type=\"submit\">{}</button>\n",
        escape(contact::SUBMIT_LABEL)
    ));
    out.push_str("</form>\n");
}
