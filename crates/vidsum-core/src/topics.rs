//! The topic catalogue: a fixed table from topic key to video digests.
//!
//! Lookups are pure. The only input besides the topic is the calendar date
//! used for records published "today".

use chrono::NaiveDate;

use crate::dates::{iso_date, utc_today};
use crate::videos::VideoSummary;

/// Recognized topic keys, in the order the client offers them.
pub const TOPIC_KEYS: [&str; 3] = ["人工智慧", "行銷趨勢", "科技新聞"];

#[derive(Debug, Clone, Copy)]
enum Published {
    Today,
    On(&'static str),
}

#[derive(Debug)]
struct Template {
    title: &'static str,
    link: &'static str,
    published: Published,
    summary: &'static [&'static str],
    quote: Option<&'static str>,
    timeline: Option<&'static str>,
}

impl Template {
    fn build(&self, today: NaiveDate) -> VideoSummary {
        let upload_date = match self.published {
            Published::Today => iso_date(today),
            Published::On(date) => date.to_string(),
        };

        VideoSummary {
            title: self.title.to_string(),
            link: self.link.to_string(),
            upload_date,
            summary: self.summary.iter().map(|s| (*s).to_string()).collect(),
            quote: self.quote.map(str::to_string),
            timeline: self.timeline.map(str::to_string),
        }
    }
}

static CATALOGUE: &[(&str, &[Template])] = &[
    (
        "人工智慧",
        &[
            Template {
                title: "【AI 大趨勢】GPT-5 架構洩漏：多模態與 Agent 能力分析",
                link: "https://www.youtube.com/watch?v=ai_latest_v1",
                published: Published::Today,
                summary: &[
                    "採用混合專家模型 (MoE) 實現高效能運算。",
                    "原生支援多模態輸入，包含視覺與聽覺。",
                    "重點發展具備長期記憶的 AI Agent 能力。",
                    "預計將徹底改變軟體開發流程。",
                ],
                quote: Some("「AI Agent 的普及將使人類工作內容從執行轉向監督。」"),
                timeline: Some("01:30 - 模型架構介紹; 03:55 - Agent 應用案例"),
            },
            Template {
                title: "深度解讀：Google I/O 最新 GenAI 工具總整理",
                link: "https://www.youtube.com/watch?v=google_ai_tools",
                published: Published::On("2025-11-25"),
                summary: &[
                    "推出 Project Astra (多模態助理) 的即時互動能力。",
                    "Gemini 獲得了新的程式碼編輯和除錯功能。",
                    "強調模型運行效率與邊緣設備的整合。",
                ],
                quote: Some("「未來的人工智慧將不再是工具，而是真正的協作者。」"),
                timeline: Some("00:45 - Astra 演示; 05:00 - 開發者工具更新"),
            },
        ],
    ),
    (
        "行銷趨勢",
        &[
            Template {
                title: "2025 年行銷新戰場：沉浸式體驗與私域流量經營",
                link: "https://www.youtube.com/watch?v=marketing_trends_1",
                published: Published::Today,
                summary: &[
                    "強調 AR/VR 在產品展示中的應用。",
                    "品牌開始將重心轉向自有 App 和社群群組。",
                    "數據隱私法規促使企業尋求第一方數據。",
                ],
                quote: Some("「私域流量的價值，在於其高轉換率和穩定性。」"),
                timeline: Some("00:50 - AR 體驗範例; 04:10 - 數據策略調整"),
            },
            Template {
                title: "MarTech 工具總覽：如何利用 AI 提升廣告投放 ROI？",
                link: "https://www.youtube.com/watch?v=martech_ai_roi",
                published: Published::On("2025-11-20"),
                summary: &[
                    "利用生成式 AI 自動化廣告文案和創意素材。",
                    "機器學習優化預算分配，提升競價效率。",
                    "歸因模型從最後點擊轉向多觸點路徑分析。",
                ],
                quote: Some("「預計 AI 將使廣告創意產出效率提升 60%。」"),
                timeline: Some("03:00 - 自動化工具介紹; 06:15 - 案例分析"),
            },
        ],
    ),
    (
        "科技新聞",
        &[
            Template {
                title: "全球晶片大戰新進展：Nvidia 與 AMD 最新佈局分析",
                link: "https://www.youtube.com/watch?v=chip_war",
                published: Published::Today,
                summary: &[
                    "先進製程技術的競爭持續升溫。",
                    "異構整合 (Heterogeneous Integration) 成為主流。",
                    "AI 晶片需求帶動供應鏈重組。",
                ],
                quote: Some("「算力即國力。」"),
                timeline: Some("02:00 - 各家財報分析; 05:30 - 供應鏈安全議題"),
            },
            Template {
                title: "太空競賽 2.0：低軌道衛星與量子通訊技術的突破",
                link: "https://www.youtube.com/watch?v=space_tech",
                published: Published::On("2025-11-26"),
                summary: &[
                    "低軌衛星進入商業化量產階段。",
                    "量子加密技術提升通訊安全性。",
                    "衛星物聯網 (IoT) 服務成為新商機。",
                ],
                quote: Some("「通訊權限正從地面轉移到太空。」"),
                timeline: Some("01:00 - LEO 衛星覆蓋率; 04:00 - 安全性挑戰"),
            },
        ],
    ),
];

fn templates_for(topic: &str) -> &'static [Template] {
    CATALOGUE
        .iter()
        .find(|(key, _)| *key == topic)
        .map_or(&[][..], |(_, templates)| *templates)
}

#[must_use]
pub fn is_known_topic(topic: &str) -> bool {
    !templates_for(topic).is_empty()
}

/// Video digests for `topic`, in display order.
///
/// Unknown topics, including the empty string, yield an empty list. Records
/// marked as published today carry `today` as their upload date.
#[must_use]
pub fn lookup(topic: &str, today: NaiveDate) -> Vec<VideoSummary> {
    templates_for(topic)
        .iter()
        .map(|template| template.build(today))
        .collect()
}

/// [`lookup`] against the current UTC date.
#[must_use]
pub fn lookup_today(topic: &str) -> Vec<VideoSummary> {
    lookup(topic, utc_today())
}

#[cfg(test)]
#[path = "topics_test.rs"]
mod tests;
