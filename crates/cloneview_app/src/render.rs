use std::path::Path;

use client_logging::client_warn;
use cloneview_core::AppViewModel;
use cloneview_engine::render_host_page;

/// The output region: a host page embedding the sandboxed preview frame.
pub const PREVIEW_PATH: &str = "preview.html";

pub fn print_intro() {
    println!("Cloneview. Type a URL and press enter to clone it.");
}

pub fn present(view: &AppViewModel) {
    println!("{}", status_line(view));
    if let Some(content) = &view.preview {
        write_preview(Path::new(PREVIEW_PATH), content);
    }
}

fn status_line(view: &AppViewModel) -> String {
    if view.loading {
        format!("Cloning {} ...", view.url_input)
    } else if view.preview.is_some() {
        format!("Done. Preview written to ./{PREVIEW_PATH}")
    } else {
        "Idle.".to_string()
    }
}

fn write_preview(path: &Path, content: &str) {
    let page = render_host_page(content);
    if let Err(err) = std::fs::write(path, page) {
        client_warn!("could not write preview to {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::status_line;
    use cloneview_core::AppViewModel;

    #[test]
    fn loading_view_shows_the_url() {
        let view = AppViewModel {
            url_input: "https://example.com".to_string(),
            loading: true,
            preview: None,
            dirty: true,
        };
        assert_eq!(status_line(&view), "Cloning https://example.com ...");
    }

    #[test]
    fn settled_view_points_at_the_preview_file() {
        let view = AppViewModel {
            url_input: "https://example.com".to_string(),
            loading: false,
            preview: Some("<h1>Example</h1>".to_string()),
            dirty: true,
        };
        assert_eq!(status_line(&view), "Done. Preview written to ./preview.html");
    }

    #[test]
    fn idle_view_is_quiet() {
        let view = AppViewModel::default();
        assert_eq!(status_line(&view), "Idle.");
    }
}
