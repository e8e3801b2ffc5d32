//! Post page assembly: document shell, rendered fragment, bibliography.
//!
//! The bibliography section is a `<details>` element, collapsed by
//! default; expanding it is plain browser behavior, so the toggle needs
//! no script and no persisted state. The count in the summary reflects
//! the entries actually rendered (unresolvable ids are not counted).

use crate::citations::{CitationRegistry, build_bibliography, used_ids};
use crate::config::SiteConfig;
use crate::content::PostMeta;
use crate::render::Pipeline;
use std::fmt::Write;

/// Render a complete standalone HTML page for one post.
///
/// The fragment and the bibliography are both derived from the raw body;
/// neither depends on the other's output.
pub fn render_post_page(
    meta: &PostMeta,
    body: &str,
    pipeline: &Pipeline<'_>,
    registry: &CitationRegistry,
    config: &SiteConfig,
) -> String {
    let fragment = pipeline.render(body);
    let bibliography = render_bibliography(body, registry);

    let mut html = String::with_capacity(fragment.len() + 2048);
    let lang = &config.base.language;
    let site_title = &config.base.title;
    let base_path = config.base_path();

    write!(
        html,
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <meta name=\"description\" content=\"{}\" />\n\
         <title>{} | {site_title}</title>\n\
         <link rel=\"stylesheet\" href=\"{base_path}/style.css\" />\n\
         </head>\n\
         <body>\n\
         <article class=\"post\">\n\
         <header class=\"post-header\">\n\
         <h1 class=\"post-title\">{}</h1>\n\
         <p class=\"post-meta\">{} · {} · {}</p>\n\
         </header>\n\
         <div class=\"post-content\">\n{fragment}\n</div>\n\
         {bibliography}\
         </article>\n\
         </body>\n\
         </html>\n",
        escape(&meta.description),
        escape(&meta.title),
        escape(&meta.title),
        escape(&meta.date),
        escape(&meta.category),
        escape(&meta.read_time),
    )
    .ok();

    html
}

/// Render the collapsed references section for a raw body.
///
/// Empty-marker bodies still get the section with a zero count, so page
/// structure stays uniform across posts.
pub fn render_bibliography(body: &str, registry: &CitationRegistry) -> String {
    let ids = used_ids(body);
    let entries = build_bibliography(&ids, registry);

    let mut html = String::new();
    write!(
        html,
        "<section class=\"bibliography\">\n\
         <details>\n\
         <summary>References ({})</summary>\n\
         <ol class=\"bibliography-entries\">\n",
        entries.len()
    )
    .ok();

    for (id, citation, formatted) in &entries {
        write!(
            html,
            "<li id=\"citation-{id}\">\
             <span class=\"citation-number\">[{id}]</span> \
             <span class=\"citation-text\">{}</span> \
             <span class=\"{}\">{}</span>",
            escape(formatted),
            citation.kind.badge_class(),
            citation.kind.label(),
        )
        .ok();

        if let Some(url) = &citation.url {
            write!(
                html,
                " <a class=\"citation-source\" href=\"{}\" target=\"_blank\" \
                 rel=\"noopener noreferrer\">source</a>",
                escape(url)
            )
            .ok();
        }
        html.push_str("</li>\n");
    }

    html.push_str("</ol>\n</details>\n</section>\n");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
