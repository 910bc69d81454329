use crate::core::normalizer::parse_draw_date;
use crate::domain::model::{DrawCandidate, NUMBERS_PER_DRAW};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{EtlError, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// 日期欄 + 五個號碼欄
const MIN_COLUMNS: usize = 1 + NUMBERS_PER_DRAW;

/// 優先讀取 JSON 資料檔，不存在或解析失敗時改由兩個 CSV 合併
pub fn load_draws<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Vec<DrawCandidate> {
    match read_json_source(storage, config.json_source()) {
        Ok(Some(records)) => {
            tracing::info!(
                "✅ Loaded {} records from {}",
                records.len(),
                config.json_source()
            );
            return records;
        }
        Ok(None) => {
            tracing::info!("No JSON source at {}", config.json_source());
        }
        Err(e) => {
            tracing::error!(
                "❌ Failed to load {}: {}. Falling back to CSV conversion",
                config.json_source(),
                e
            );
        }
    }

    tracing::info!("🔄 Converting CSV sources...");
    let records = load_from_csv(
        storage,
        config.asc_csv(),
        config.draw_csv(),
        config.default_year(),
    );
    tracing::info!("Merged {} records from CSV", records.len());
    records
}

/// 檔案不存在時回傳 `Ok(None)`
pub fn read_json_source<S: Storage>(storage: &S, path: &str) -> Result<Option<Vec<DrawCandidate>>> {
    let bytes = match read_optional(storage, path)? {
        Some(bytes) => bytes,
        None => return Ok(None),
    };

    let records: Vec<DrawCandidate> = serde_json::from_slice(&bytes)?;
    Ok(Some(records))
}

pub fn load_from_csv<S: Storage>(
    storage: &S,
    asc_path: &str,
    draw_path: &str,
    default_year: i32,
) -> Vec<DrawCandidate> {
    let asc_bytes = match read_optional(storage, asc_path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::error!("❌ Ascending-order file {} not found, no data generated", asc_path);
            return Vec::new();
        }
        Err(e) => {
            tracing::error!("❌ Failed to read {}: {}", asc_path, e);
            return Vec::new();
        }
    };

    let mut merged = match read_ascending_rows(&asc_bytes, default_year) {
        Ok(merged) => merged,
        Err(e) => {
            tracing::error!("❌ Failed to parse {}: {}", asc_path, e);
            return Vec::new();
        }
    };

    match read_optional(storage, draw_path) {
        Ok(Some(bytes)) => match attach_draw_rows(&mut merged, &bytes) {
            Ok(matched) => tracing::debug!("Matched {} draw-order rows", matched),
            Err(e) => tracing::error!("❌ Failed to parse {}: {}", draw_path, e),
        },
        Ok(None) => {
            tracing::warn!(
                "⚠️ Draw-order file {} not found, using ascending-order data only",
                draw_path
            );
        }
        Err(e) => tracing::error!("❌ Failed to read {}: {}", draw_path, e),
    }

    merged.into_candidates()
}

fn read_optional<S: Storage>(storage: &S, path: &str) -> Result<Option<Vec<u8>>> {
    match storage.read_file(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(EtlError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// 依原始日期文字合併，保留第一次出現的位置
#[derive(Debug, Default)]
struct MergedDraws {
    records: Vec<DrawCandidate>,
    index: HashMap<String, usize>,
}

impl MergedDraws {
    fn upsert(&mut self, key: String, candidate: DrawCandidate) {
        match self.index.get(&key) {
            Some(&pos) => self.records[pos] = candidate,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(candidate);
            }
        }
    }

    fn attach_draw(&mut self, key: &str, draw: Vec<u32>) -> bool {
        match self.index.get(key) {
            Some(&pos) => {
                self.records[pos].draw = Some(draw);
                true
            }
            None => false,
        }
    }

    fn into_candidates(self) -> Vec<DrawCandidate> {
        self.records
    }
}

fn csv_reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes)
}

fn read_ascending_rows(bytes: &[u8], default_year: i32) -> Result<MergedDraws> {
    let mut merged = MergedDraws::default();

    for row in csv_reader(bytes).records() {
        let row = row?;
        if row.len() < MIN_COLUMNS {
            continue;
        }

        let date_full = row[0].trim();
        let asc = parse_numbers(&row);

        match parse_draw_date(date_full, default_year) {
            Ok(parsed) => {
                let candidate = DrawCandidate {
                    period: parsed.period_key(),
                    day: parsed.weekday_label().to_string(),
                    date: parsed.month_day,
                    asc,
                    draw: None,
                };
                merged.upsert(date_full.to_string(), candidate);
            }
            Err(e) => tracing::warn!("⚠️ Skipping row dated '{}': {}", date_full, e),
        }
    }

    Ok(merged)
}

fn attach_draw_rows(merged: &mut MergedDraws, bytes: &[u8]) -> Result<usize> {
    let mut matched = 0;

    for row in csv_reader(bytes).records() {
        let row = row?;
        if row.len() < MIN_COLUMNS {
            continue;
        }

        if merged.attach_draw(row[0].trim(), parse_numbers(&row)) {
            matched += 1;
        }
    }

    Ok(matched)
}

/// 只保留純數字欄位，其餘忽略
fn parse_numbers(row: &StringRecord) -> Vec<u32> {
    row.iter()
        .skip(1)
        .take(NUMBERS_PER_DRAW)
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|token| token.parse().ok())
        .collect()
}
