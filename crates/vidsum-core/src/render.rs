//! HTML fragments for the results region of the page.
//!
//! Every function returns a complete fragment that replaces whatever was
//! shown before. All record text is escaped before interpolation.

use std::fmt::Write as _;

use crate::videos::{TopicResult, VideoSummary};

pub const EMPTY_RESULTS_HTML: &str = "<p class=\"info\">查無相關最新影片，請選擇其他主題。</p>";

pub const CONNECTION_ERROR_HTML: &str =
    "<p class=\"error\">連線錯誤，請檢查後端伺服器是否運行。</p>";

/// Header line above the result cards.
#[must_use]
pub fn render_header(result: &TopicResult) -> String {
    format!(
        "📚 今日新知摘要清單：<strong>{}</strong> ({})",
        escape_html(&result.topic),
        escape_html(&result.date)
    )
}

/// Single error line shown in place of results.
#[must_use]
pub fn render_error(message: &str) -> String {
    format!("<p class=\"error\">錯誤：{}</p>", escape_html(message))
}

/// One card per record, numbered from 1, or the empty-state message.
#[must_use]
pub fn render_results(videos: &[VideoSummary]) -> String {
    if videos.is_empty() {
        return EMPTY_RESULTS_HTML.to_string();
    }

    let mut html = String::from("<div class=\"video-list\">\n");
    for (index, video) in videos.iter().enumerate() {
        render_card(&mut html, index + 1, video);
    }
    html.push_str("</div>\n");
    html
}

fn render_card(html: &mut String, position: usize, video: &VideoSummary) {
    html.push_str("  <div class=\"video-card macaron-shadow\">\n");
    let _ = writeln!(
        html,
        "    <h3>{position}. {}</h3>",
        escape_html(&video.title)
    );
    let _ = writeln!(
        html,
        "    <p>🔗 <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"macaron-link\">觀看影片</a></p>",
        escape_html(&video.link)
    );
    let _ = writeln!(
        html,
        "    <p>📅 <strong>上傳日期:</strong> {}</p>",
        escape_html(&video.upload_date)
    );

    html.push_str("    <h4>💡 摘要（重點整理）:</h4>\n");
    html.push_str("    <ul>\n");
    for point in &video.summary {
        let _ = writeln!(html, "      <li>{}</li>", escape_html(point));
    }
    html.push_str("    </ul>\n");

    if let Some(quote) = &video.quote {
        html.push_str("    <div class=\"quote-box\">\n");
        let _ = writeln!(
            html,
            "      <p>💬 <strong>重要引用/數據:</strong> {}</p>",
            escape_html(quote)
        );
        html.push_str("    </div>\n");
    }

    if let Some(timeline) = &video.timeline {
        let _ = writeln!(
            html,
            "    <p class=\"timeline\">⏱️ <strong>時間軸關鍵段落:</strong> {}</p>",
            escape_html(timeline)
        );
    }

    html.push_str("  </div>\n");
}

/// Escape text for both element content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
