//! Server-side rendering of the portfolio page.
//!
//! The markup carries every hook the page script binds to (see
//! `folio_shared::markers`): sections with ids, `.nav-link`s pointing at them,
//! `.filter-btn`s and `.project-item`s sharing the `data-tech` attribute, and
//! the `#dark-mode-toggle` button.

use folio_shared::{
    markers::{
        ACTIVE_CLASS, ALL_FILTER, DARK_MODE_CLASS, DARK_MODE_TOGGLE_ID, FILTER_BUTTON_CLASS,
        NAV_LINK_CLASS, PAGE_SECTIONS, PROJECT_ITEM_CLASS, TECH_ATTR, TECH_SEPARATOR,
    },
    ColorScheme, Contact, Profile, Project, SocialLink,
};

/// Module script produced by `wasm-bindgen --target web`.
const SCRIPT_ENTRY: &str = "/static/folio_frontend.js";

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn html_attr_escape(s: &str) -> String {
    html_escape(s).replace('"', "&quot;")
}

fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the complete page for `profile`. `profile.skills` drives the
/// filter buttons and the skills list.
pub fn render_page(profile: &Profile) -> String {
    let name = html_escape(&profile.name);
    let title = html_escape(&profile.title);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} | {title}</title>
    <style>
        {css_vars}
        {base_css}
    </style>
</head>
<body>
    <nav class="navbar">
        <a class="brand" href="#home">{name}</a>
        <ul class="nav-links">
            {nav}
        </ul>
        <button type="button" id="{toggle_id}" aria-label="Toggle dark mode">&#9680;</button>
    </nav>
    <section id="home" class="hero">
        <h1>{name}</h1>
        <p class="headline">{title}</p>
    </section>
    <section id="about">
        <h2>About</h2>
        <p>{bio}</p>
    </section>
    <section id="projects">
        <h2>Projects</h2>
        <div class="filters">
            {filters}
        </div>
        <div class="project-grid">
            {projects}
        </div>
    </section>
    <section id="skills">
        <h2>Skills</h2>
        <ul class="skill-list">
            {skills}
        </ul>
    </section>
    <section id="contact">
        <h2>Contact</h2>
        {contact}
        {social}
    </section>
    <script type="module">
        import init from "{script}";
        init();
    </script>
</body>
</html>"##,
        css_vars = css_variables(&profile.color_scheme),
        base_css = BASE_CSS,
        nav = nav_links(),
        toggle_id = DARK_MODE_TOGGLE_ID,
        bio = html_escape(&profile.bio),
        filters = filter_buttons(&profile.skills),
        projects = profile.projects.iter().map(project_item).collect::<Vec<_>>().join("\n"),
        skills = profile
            .skills
            .iter()
            .map(|skill| format!("<li>{}</li>", html_escape(skill)))
            .collect::<Vec<_>>()
            .join(""),
        contact = contact_block(&profile.contact),
        social = social_links(&profile.social),
        script = SCRIPT_ENTRY,
    )
}

fn css_variables(colors: &ColorScheme) -> String {
    // values land inside a <style> block
    let clean = |value: &str| value.replace(['<', '>', ';', '{', '}'], "");
    format!(
        ":root {{ --primary: {}; --secondary: {}; --background: {}; --text: {}; --accent: {}; }}\n\
         body.{DARK_MODE_CLASS} {{ --background: #121417; --text: #e6e6e6; }}",
        clean(&colors.primary),
        clean(&colors.secondary),
        clean(&colors.background),
        clean(&colors.text),
        clean(&colors.accent),
    )
}

fn nav_links() -> String {
    PAGE_SECTIONS
        .iter()
        .map(|id| {
            format!(
                r##"<li><a class="{NAV_LINK_CLASS}" href="#{id}">{}</a></li>"##,
                capitalize(id)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

fn filter_buttons(skills: &[String]) -> String {
    let mut buttons = vec![format!(
        r#"<button type="button" class="{FILTER_BUTTON_CLASS} {ACTIVE_CLASS}" {TECH_ATTR}="{ALL_FILTER}">All</button>"#
    )];
    buttons.extend(skills.iter().map(|skill| {
        format!(
            r#"<button type="button" class="{FILTER_BUTTON_CLASS}" {TECH_ATTR}="{}">{}</button>"#,
            html_attr_escape(skill),
            html_escape(skill)
        )
    }));
    buttons.join("")
}

fn project_item(project: &Project) -> String {
    let tech = project.tech_stack.join(TECH_SEPARATOR);
    let screenshot = if project.screenshot.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            html_attr_escape(&project.screenshot),
            html_attr_escape(&project.name)
        )
    };
    let demo = if project.demo_url.is_empty() {
        String::new()
    } else {
        format!(r#"<a class="demo" href="{}">Live demo</a>"#, html_attr_escape(&project.demo_url))
    };
    let tags = project
        .tech_stack
        .iter()
        .map(|tech| format!(r#"<span class="tag">{}</span>"#, html_escape(tech)))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<article class="{PROJECT_ITEM_CLASS}" {TECH_ATTR}="{tech}">
                {screenshot}
                <h3><a href="{url}">{name}</a></h3>
                <p>{description}</p>
                <p class="tags">{tags}</p>
                {demo}
            </article>"#,
        tech = html_attr_escape(&tech),
        url = html_attr_escape(&project.url),
        name = html_escape(&project.name),
        description = html_escape(&project.description),
    )
}

fn contact_block(contact: &Contact) -> String {
    let extra = contact
        .extra
        .iter()
        .filter_map(|(key, value)| {
            value.as_str().map(|value| {
                format!("<li>{}: {}</li>", html_escape(&capitalize(key)), html_escape(value))
            })
        })
        .collect::<Vec<_>>()
        .join("");
    format!(
        r#"<p><a href="mailto:{}">{}</a></p><ul class="contact-extra">{extra}</ul>"#,
        html_attr_escape(&contact.email),
        html_escape(&contact.email)
    )
}

fn social_links(links: &[SocialLink]) -> String {
    if links.is_empty() {
        return String::new();
    }
    let items = links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}" aria-label="{}"><i class="{}"></i></a></li>"#,
                html_attr_escape(&link.url),
                html_attr_escape(&link.name),
                html_attr_escape(&link.icon)
            )
        })
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<ul class="social">{items}</ul>"#)
}

const BASE_CSS: &str = concat!(
    "body { margin: 0; font-family: system-ui, sans-serif; background: var(--background); color: var(--text); }\n",
    ".navbar { position: fixed; top: 0; left: 0; right: 0; height: 72px; display: flex; align-items: center; gap: 2rem; padding: 0 2rem; background: var(--primary); }\n",
    ".navbar a { color: #fff; text-decoration: none; }\n",
    ".nav-links { display: flex; gap: 1rem; list-style: none; }\n",
    ".nav-link.active { border-bottom: 2px solid var(--accent); }\n",
    "section { padding: 96px 2rem 2rem; }\n",
    ".filter-btn { border: 1px solid var(--secondary); background: none; color: inherit; padding: .25rem .75rem; border-radius: 999px; }\n",
    ".filter-btn.active { background: var(--accent); color: #fff; }\n",
    ".project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }\n",
    ".tag { margin-right: .5rem; color: var(--secondary); }\n",
);
