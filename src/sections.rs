//! Renders the static content records into the section containers the host
//! page provides. A missing container skips that section and nothing else;
//! the animation layer only ever sees the resulting elements.

use portfolio_core::content::*;
use web_sys as web;

pub fn render_all(document: &web::Document) {
    render_hero(document);
    render_about(document);
    render_projects(document);
    render_skills(document);
    render_experience(document);
    render_education(document);
    render_contact(document);
}

fn container(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("missing #{id}; section skipped");
    }
    el
}

/// Seconds between staggered child entrances for the section around `el`.
fn set_stagger(el: &web::Element, step_sec: f32) {
    if let Ok(Some(section)) = el.closest(".fade-in-section") {
        _ = section.set_attribute("data-stagger", &format!("{step_sec}"));
    }
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn render_hero(document: &web::Document) {
    let Some(el) = container(document, "hero-content") else {
        return;
    };
    let mut html = String::new();
    html.push_str(&format!(
        "<p class=\"hero-subtitle stagger-item\">{}</p>",
        esc(HERO.subtitle)
    ));
    html.push_str("<h1 class=\"hero-title\">");
    for line in HERO.title_lines {
        html.push_str(&format!(
            "<span class=\"hero-title-line stagger-item\">{}</span>",
            esc(line)
        ));
    }
    html.push_str("</h1>");
    html.push_str(&format!(
        "<p class=\"hero-description stagger-item\">{}</p>",
        esc(HERO.description)
    ));
    html.push_str("<div class=\"hero-role stagger-item\">");
    for line in HERO.role_lines {
        html.push_str(&format!("<p>{}</p>", esc(line)));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"stagger-item\"><a href=\"{}\" class=\"cta-button\">{}</a></div>",
        HERO.cta_href,
        esc(HERO.cta_label)
    ));
    el.set_inner_html(&html);
    set_stagger(&el, 0.1);
}

fn render_about(document: &web::Document) {
    let Some(el) = container(document, "about-content") else {
        return;
    };
    let mut html = String::new();
    for para in BIOGRAPHY {
        html.push_str(&format!("<p class=\"stagger-item\">{}</p>", esc(para)));
    }
    html.push_str("<div class=\"highlights stagger-item\">");
    for h in HIGHLIGHTS {
        html.push_str(&format!(
            "<div class=\"highlight\"><div class=\"highlight-value\">{}</div>\
             <div class=\"highlight-label\">{}</div></div>",
            esc(h.value),
            esc(h.label)
        ));
    }
    html.push_str("</div>");
    el.set_inner_html(&html);
    set_stagger(&el, 0.2);
}

fn render_projects(document: &web::Document) {
    let Some(el) = container(document, "projects-grid") else {
        return;
    };
    let mut html = String::new();
    for p in PROJECTS {
        html.push_str("<article class=\"project-card stagger-item\">");
        html.push_str(&format!(
            "<img class=\"project-image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            p.image,
            esc(p.title)
        ));
        html.push_str(&format!("<h3>{}</h3>", esc(p.title)));
        html.push_str(&format!("<p>{}</p>", esc(p.description)));
        html.push_str("<div class=\"project-tags\">");
        for tag in p.tags {
            html.push_str(&format!("<span class=\"tag\">{}</span>", esc(tag)));
        }
        html.push_str("</div>");
        html.push_str(&format!(
            "<span class=\"project-status\">{}</span>",
            esc(p.status)
        ));
        if let Some(link) = p.link {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Project</a>",
                link
            ));
        }
        html.push_str("</article>");
    }
    el.set_inner_html(&html);
    set_stagger(&el, 0.1);
}

fn render_skills(document: &web::Document) {
    let Some(el) = container(document, "skills-grid") else {
        return;
    };
    let mut html = String::new();
    for cat in SKILL_CATEGORIES {
        html.push_str("<div class=\"skill-category stagger-item\">");
        html.push_str(&format!("<h3>{}</h3>", esc(cat.category)));
        for skill in cat.skills {
            html.push_str(&format!(
                "<div class=\"skill-row\"><span>{}</span><span>{}%</span></div>\
                 <div class=\"skill-bar\">\
                 <div class=\"skill-bar-fill\" data-level=\"{}\" style=\"width:0%\"></div>\
                 </div>",
                esc(skill.name),
                skill.level,
                skill.level
            ));
        }
        html.push_str("</div>");
    }
    el.set_inner_html(&html);
    set_stagger(&el, 0.1);
}

fn render_experience(document: &web::Document) {
    let Some(el) = container(document, "experience-list") else {
        return;
    };
    let mut html = String::new();
    for exp in EXPERIENCE {
        html.push_str("<div class=\"experience-card stagger-item\">");
        html.push_str(&format!("<h3>{}</h3>", esc(exp.position)));
        html.push_str(&format!("<p class=\"company\">{}</p>", esc(exp.company)));
        html.push_str(&format!(
            "<p class=\"meta\">{} • {}</p>",
            esc(exp.location),
            esc(exp.dates)
        ));
        html.push_str("<ul>");
        for r in exp.responsibilities {
            html.push_str(&format!("<li>{}</li>", esc(r)));
        }
        html.push_str("</ul></div>");
    }
    el.set_inner_html(&html);
    set_stagger(&el, 0.15);
}

fn render_education(document: &web::Document) {
    if let Some(el) = container(document, "education-list") {
        let mut html = String::new();
        for e in EDUCATION {
            html.push_str(&format!(
                "<div class=\"education-card stagger-item\"><h3>{}</h3>\
                 <p>{}</p><p class=\"meta\">{} • {}</p></div>",
                esc(e.degree),
                esc(e.institution),
                esc(e.status),
                esc(e.year)
            ));
        }
        el.set_inner_html(&html);
        set_stagger(&el, 0.15);
    }
    if let Some(el) = container(document, "certifications-list") {
        let mut html = String::new();
        for c in CERTIFICATIONS {
            html.push_str(&format!(
                "<div class=\"certification-badge stagger-item\"><span>{}</span>\
                 <span class=\"meta\">{} • {}</span></div>",
                esc(c.name),
                esc(c.issuer),
                esc(c.year)
            ));
        }
        el.set_inner_html(&html);
    }
}

fn render_contact(document: &web::Document) {
    let Some(el) = container(document, "contact-body") else {
        return;
    };
    let html = "\
        <form id=\"contact-form\" class=\"contact-form stagger-item\" novalidate>\
        <label for=\"contact-name\">Name</label>\
        <input type=\"text\" id=\"contact-name\" name=\"name\" placeholder=\"Your name\">\
        <p id=\"contact-name-error\" class=\"field-error\" style=\"display:none\"></p>\
        <label for=\"contact-email\">Email</label>\
        <input type=\"email\" id=\"contact-email\" name=\"email\" \
         placeholder=\"your.email@example.com\">\
        <p id=\"contact-email-error\" class=\"field-error\" style=\"display:none\"></p>\
        <label for=\"contact-message\">Message</label>\
        <textarea id=\"contact-message\" name=\"message\" rows=\"6\" \
         placeholder=\"Tell me about your project...\"></textarea>\
        <p id=\"contact-message-error\" class=\"field-error\" style=\"display:none\"></p>\
        <button type=\"submit\" id=\"contact-submit\">Send Message</button>\
        <div id=\"contact-status\" class=\"form-status\" style=\"display:none\"></div>\
        </form>";
    el.set_inner_html(html);
    set_stagger(&el, 0.2);
}
