use draw_report::core::loader;
use draw_report::core::reporter::render_json;
use draw_report::{
    DrawRecord, DrawReportPipeline, EtlEngine, EtlError, LocalStorage, TomlConfig,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>歷史開獎矩陣</title></head>
<body>
<table id="matrix"></table>
<script>
<!-- JSON_DATA_PLACEHOLDER -->
HISTORY_DATA.forEach(row => console.log(row.period));
</script>
</body>
</html>
"#;

const ASC_CSV: &str = "日期,號碼1,號碼2,號碼3,號碼4,號碼5\n\
\"2025/1/10\",2,4,6,8,10\n\
\"2025/1/11\",1,5,9,20,30\n\
\"2025/1/9\",3,7,11,15,19\n";

const DRAW_CSV: &str = "日期,號碼1,號碼2,號碼3,號碼4,號碼5\n\
\"2025/1/11\",20,1,30,9,5\n\
\"2025/1/10\",10,2,8,4,6\n\
\"2025/1/9\",19,3,15,7,11\n";

fn config_for(dir: &Path) -> TomlConfig {
    let toml_content = format!(
        r#"
[source]
data_dir = "{}"
json = "history_data.json"
asc_csv = "asc.csv"
draw_csv = "draw.csv"

[report]
template = "historical_matrix.html"
output = "latest_lottery_report.html"
"#,
        dir.display().to_string().replace('\\', "/")
    );
    TomlConfig::from_toml_str(&toml_content).unwrap()
}

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

fn run(dir: &Path) -> draw_report::Result<String> {
    let storage = LocalStorage::new(dir);
    let pipeline = DrawReportPipeline::new(storage, config_for(dir));
    EtlEngine::new(pipeline).run()
}

/// 從輸出的 HTML 取回嵌入的資料
fn embedded_records(dir: &Path) -> Vec<DrawRecord> {
    let html = fs::read_to_string(dir.join("latest_lottery_report.html")).unwrap();
    let start = html.find("const HISTORY_DATA = ").unwrap() + "const HISTORY_DATA = ".len();
    let end = html[start..].find("];").unwrap() + start + 1;
    serde_json::from_str(&html[start..end]).unwrap()
}

#[test]
fn test_end_to_end_from_csv() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "asc.csv", ASC_CSV);
    write(dir, "draw.csv", DRAW_CSV);
    write(dir, "historical_matrix.html", TEMPLATE);

    let output_path = run(dir).unwrap();
    assert!(output_path.ends_with("latest_lottery_report.html"));

    let records = embedded_records(dir);
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        DrawRecord {
            period: "D20250111".to_string(),
            date: "1/11".to_string(),
            day: "六".to_string(),
            asc: vec![1, 5, 9, 20, 30],
            draw: vec![20, 1, 30, 9, 5],
        }
    );
    assert_eq!(records[1].period, "D20250110");
    assert_eq!(records[2].period, "D20250109");
    assert_eq!(records[2].day, "四");

    let html = fs::read_to_string(dir.join("latest_lottery_report.html")).unwrap();
    assert!(html.contains("<title>歷史開獎矩陣</title>"));
    assert!(html.contains("HISTORY_DATA.forEach"));
    assert!(!html.contains("JSON_DATA_PLACEHOLDER"));
}

#[test]
fn test_output_is_sorted_and_complete() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let asc = "date,1,2,3,4,5\n\
               3/2,1,2,3,4,5\n\
               2024/12/30,6,7,8,9,10\n\
               2025/2/1,11,12,13,14,15\n\
               2025/1/20,1,2,3,4\n";
    let draw = "date,1,2,3,4,5\n\
                3/2,5,4,3,2,1\n\
                2024/12/30,10,9,8,7,6\n\
                2025/2/1,15,14,13,12,11\n\
                2025/1/20,4,3,2,1,5\n";
    write(dir, "asc.csv", asc);
    write(dir, "draw.csv", draw);
    write(dir, "historical_matrix.html", TEMPLATE);

    run(dir).unwrap();
    let records = embedded_records(dir);

    let periods: Vec<&str> = records.iter().map(|r| r.period.as_str()).collect();
    assert_eq!(periods, vec!["D20250302", "D20250201", "D20241230"]);
    assert!(records.windows(2).all(|w| w[0].period >= w[1].period));
    assert!(records.iter().all(|r| r.asc.len() == 5 && r.draw.len() == 5));
}

#[test]
fn test_json_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "asc.csv", ASC_CSV);
    write(dir, "draw.csv", DRAW_CSV);
    write(dir, "historical_matrix.html", TEMPLATE);

    run(dir).unwrap();
    let first_pass = embedded_records(dir);

    // 以上一次的輸出作為 JSON 來源，再移除 CSV 確認沒有走備援流程
    write(dir, "history_data.json", &render_json(&first_pass).unwrap());
    fs::remove_file(dir.join("asc.csv")).unwrap();
    fs::remove_file(dir.join("draw.csv")).unwrap();

    run(dir).unwrap();
    let second_pass = embedded_records(dir);

    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_missing_ascending_file_gives_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "draw.csv", DRAW_CSV);
    write(dir, "historical_matrix.html", TEMPLATE);

    let storage = LocalStorage::new(dir);
    assert!(loader::load_from_csv(&storage, "asc.csv", "draw.csv", 2025).is_empty());

    run(dir).unwrap();
    let html = fs::read_to_string(dir.join("latest_lottery_report.html")).unwrap();
    assert!(html.contains("const HISTORY_DATA = [];"));
}

#[test]
fn test_missing_draw_file_gives_empty_report() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "asc.csv", ASC_CSV);
    write(dir, "historical_matrix.html", TEMPLATE);

    run(dir).unwrap();
    assert!(embedded_records(dir).is_empty());
}

#[test]
fn test_missing_template_produces_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "asc.csv", ASC_CSV);
    write(dir, "draw.csv", DRAW_CSV);

    let err = run(dir).unwrap_err();
    assert!(matches!(err, EtlError::TemplateNotFound { .. }));
    assert!(!dir.join("latest_lottery_report.html").exists());
}

#[test]
fn test_unreadable_json_source_falls_back_to_csv() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    write(dir, "history_data.json", "[{\"period\": ");
    write(dir, "asc.csv", ASC_CSV);
    write(dir, "draw.csv", DRAW_CSV);
    write(dir, "historical_matrix.html", TEMPLATE);

    run(dir).unwrap();
    assert_eq!(embedded_records(dir).len(), 3);
}
