use crate::domain::model::DrawRecord;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;

/// 以四格縮排輸出 JSON 陣列，中文字元保持原樣
pub fn render_json(records: &[DrawRecord]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| EtlError::ProcessingError {
        message: format!("JSON output is not valid UTF-8: {}", e),
    })
}

pub fn data_statement(variable: &str, json: &str) -> String {
    format!("const {} = {};", variable, json)
}

/// 將模板中所有 placeholder 換成資料宣告
pub fn render_report(template: &str, placeholder: &str, variable: &str, json: &str) -> String {
    template.replace(placeholder, &data_statement(variable, json))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "<!-- JSON_DATA_PLACEHOLDER -->";

    fn sample() -> DrawRecord {
        DrawRecord {
            period: "D20250111".to_string(),
            date: "1/11".to_string(),
            day: "六".to_string(),
            asc: vec![1, 5, 9, 20, 30],
            draw: vec![20, 1, 30, 9, 5],
        }
    }

    #[test]
    fn test_render_json_layout() {
        let json = render_json(&[sample()]).unwrap();

        assert!(json.starts_with("[\n    {\n        \"period\": \"D20250111\",\n"));
        assert!(json.contains("\"day\": \"六\""));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\"asc\": [\n            1,\n            5,"));
        assert!(json.ends_with("    }\n]"));
    }

    #[test]
    fn test_render_json_field_order() {
        let json = render_json(&[sample()]).unwrap();
        let positions: Vec<usize> = ["\"period\"", "\"date\"", "\"day\"", "\"asc\"", "\"draw\""]
            .iter()
            .map(|key| json.find(key).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_render_report_replaces_every_placeholder() {
        let template = format!("<script>{}</script><script>{}</script>", PLACEHOLDER, PLACEHOLDER);
        let html = render_report(&template, PLACEHOLDER, "HISTORY_DATA", "[]");

        assert_eq!(
            html,
            "<script>const HISTORY_DATA = [];</script><script>const HISTORY_DATA = [];</script>"
        );
    }

    #[test]
    fn test_render_report_without_placeholder_is_unchanged() {
        let html = render_report("<html></html>", PLACEHOLDER, "HISTORY_DATA", "[]");
        assert_eq!(html, "<html></html>");
    }
}
