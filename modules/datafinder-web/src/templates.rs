use datafinder_common::{DatasetResult, FilterSet, Source};

/// Descriptions are cut to this many characters before the ellipsis.
const DESCRIPTION_LIMIT: usize = 300;

/// Render the search form page. Both catalogs start enabled.
pub fn render_index() -> String {
    let content = format!(
        r#"<div class="container">{}</div>"#,
        render_form("", true, true)
    );
    build_page("Search", &content)
}

/// Render the results page: keyword echo, detected filters, then the
/// numbered result list (or the "nothing found" notice).
pub fn render_results(
    prompt: &str,
    use_kaggle: bool,
    use_huggingface: bool,
    keywords: &str,
    filters: &FilterSet,
    results: &[DatasetResult],
) -> String {
    let mut sections = render_form(prompt, use_kaggle, use_huggingface);

    sections.push_str(&format!(
        r#"<h2>Search Keywords</h2>
<p><code>{}</code></p>"#,
        html_escape(keywords)
    ));

    let filter_entries = filters.display_entries();
    if !filter_entries.is_empty() {
        let items: String = filter_entries
            .iter()
            .map(|(label, value)| {
                format!("<li><strong>{label}</strong>: {}</li>", html_escape(value))
            })
            .collect::<Vec<_>>()
            .join("");
        sections.push_str(&format!("<h2>Filters</h2><ul class=\"filters\">{items}</ul>"));
    }

    sections.push_str("<h2>Search Results</h2>");

    if results.is_empty() {
        sections.push_str(
            r#"<div class="notice">No datasets found. Try adjusting your query.</div>"#,
        );
    }

    for (i, result) in results.iter().enumerate() {
        let badge_class = match result.source {
            Source::Kaggle => "badge-kaggle",
            Source::HuggingFace => "badge-huggingface",
        };
        sections.push_str(&format!(
            r#"<div class="result-card">
    <h3>{n}. <a href="{url}" target="_blank" rel="noopener">{title}</a></h3>
    <div class="meta-row"><span class="badge {badge_class}">{source}</span><span>Size: {size}</span><span>Downloads: {downloads}</span></div>
    <p class="description">{description}</p>
</div>"#,
            n = i + 1,
            url = html_escape(&result.url),
            title = html_escape(&result.title),
            source = result.source,
            size = html_escape(&result.size),
            downloads = html_escape(&result.downloads),
            description = html_escape(&truncate_description(&result.description)),
        ));
    }

    build_page("Results", &format!(r#"<div class="container">{sections}</div>"#))
}

/// Render a failed-search page. Failures reach the user as-is; the
/// "nothing found" notice is a different page on purpose.
pub fn render_error(prompt: &str, use_kaggle: bool, use_huggingface: bool, message: &str) -> String {
    let content = format!(
        r#"<div class="container">{form}<div class="error-banner">Search failed: {message}</div></div>"#,
        form = render_form(prompt, use_kaggle, use_huggingface),
        message = html_escape(message),
    );
    build_page("Error", &content)
}

fn render_form(prompt: &str, use_kaggle: bool, use_huggingface: bool) -> String {
    let kaggle_checked = if use_kaggle { " checked" } else { "" };
    let huggingface_checked = if use_huggingface { " checked" } else { "" };
    format!(
        r#"<form action="/search" method="get" class="search-form">
    <input type="text" name="q" value="{prompt}" placeholder="Enter your prompt here">
    <label><input type="checkbox" name="kaggle" value="on"{kaggle_checked}> Search Kaggle</label>
    <label><input type="checkbox" name="hf" value="on"{huggingface_checked}> Search Hugging Face</label>
    <button type="submit">Search</button>
</form>"#,
        prompt = html_escape(prompt),
    )
}

/// First 300 characters of a description, with the ellipsis appended
/// whether or not anything was cut.
fn truncate_description(description: &str) -> String {
    let mut cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    cut.push_str("...");
    cut
}

// --- Helpers ---

fn build_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — Dataset Finder</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;}}
.header{{background:#1a1a1a;color:#fff;padding:12px 24px;display:flex;align-items:center;justify-content:space-between;}}
.header h1{{font-size:18px;font-weight:600;}}
.header nav a{{color:#ccc;text-decoration:none;margin-left:20px;font-size:14px;}}
.header nav a:hover{{color:#fff;}}
.container{{max-width:960px;margin:0 auto;padding:24px;}}
.search-form{{display:flex;gap:12px;align-items:center;flex-wrap:wrap;margin-bottom:24px;}}
.search-form input[type=text]{{flex:1;min-width:280px;padding:8px 12px;border:1px solid #ccc;border-radius:4px;font-size:14px;}}
.search-form label{{font-size:13px;color:#555;display:flex;gap:4px;align-items:center;}}
.search-form button{{padding:8px 20px;background:#0066cc;color:#fff;border:none;border-radius:4px;font-size:14px;cursor:pointer;}}
.search-form button:hover{{background:#004499;}}
h2{{font-size:16px;margin:16px 0 8px;}}
.filters{{list-style:none;margin-bottom:8px;}}
.filters li{{font-size:14px;color:#333;padding:2px 0;}}
.result-card{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:16px;margin-bottom:12px;}}
.result-card:hover{{border-color:#999;}}
.result-card h3{{font-size:16px;margin-bottom:4px;}}
.result-card h3 a{{color:#1a1a1a;text-decoration:none;}}
.result-card h3 a:hover{{color:#0066cc;}}
.result-card .description{{color:#555;font-size:14px;margin-top:8px;}}
.badge{{display:inline-block;padding:2px 8px;border-radius:12px;font-size:11px;font-weight:600;text-transform:uppercase;}}
.badge-kaggle{{background:#e3f2fd;color:#1565c0;}}
.badge-huggingface{{background:#fff3e0;color:#e65100;}}
.meta-row{{display:flex;gap:12px;align-items:center;font-size:12px;color:#888;margin-top:4px;}}
.notice{{background:#fff8e1;border:1px solid #ffecb3;padding:8px 12px;border-radius:4px;font-size:13px;color:#795548;margin-bottom:12px;}}
.error-banner{{background:#fce4ec;border:1px solid #f8bbd0;padding:8px 12px;border-radius:4px;font-size:13px;color:#c62828;margin-bottom:12px;}}
code{{background:#f0f0f0;padding:2px 6px;border-radius:4px;font-size:13px;}}
</style>
</head>
<body>
<div class="header">
    <h1>Dataset Finder</h1>
    <nav><a href="/">New Search</a></nav>
</div>
{content}
</body>
</html>"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
