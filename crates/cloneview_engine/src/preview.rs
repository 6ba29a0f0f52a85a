/// Sandbox token list for the preview frame. Empty means the most
/// restrictive policy: no scripts, no same-origin, no forms, no popups.
/// Must never grow an `allow-scripts` token.
pub const FRAME_SANDBOX: &str = "";

/// Fixed viewport height of the preview frame; overflow scrolls.
pub const FRAME_HEIGHT_PX: u32 = 600;

/// Builds the embedded frame for the given markup, or `None` when there is
/// nothing to render. The markup travels in `srcdoc` with every attribute
/// metacharacter escaped, so the frame receives it verbatim but inert.
pub fn render_frame(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }
    Some(format!(
        "<iframe title=\"Website preview\" sandbox=\"{FRAME_SANDBOX}\" \
         srcdoc=\"{}\" \
         style=\"width: 100%; height: {FRAME_HEIGHT_PX}px; border: 1px solid #ccc; overflow: auto;\">\
         </iframe>",
        escape_attribute(content)
    ))
}

/// Builds the complete host document the shell writes as the output region.
pub fn render_host_page(content: &str) -> String {
    let body = render_frame(content).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Cloneview preview</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_attribute(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
