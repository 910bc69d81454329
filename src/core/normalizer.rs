use crate::domain::model::{DrawCandidate, TransformResult};
use crate::utils::error::{EtlError, Result};
use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;

/// 星期一 ~ 星期日
pub const WEEKDAY_LABELS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

/// 解析後的開獎日期
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDate {
    pub date: NaiveDate,
    /// 原始的 月/日 文字 (不補零)
    pub month_day: String,
}

impl DrawDate {
    pub fn period_key(&self) -> String {
        format!("D{}", self.date.format("%Y%m%d"))
    }

    pub fn weekday_label(&self) -> &'static str {
        WEEKDAY_LABELS[self.date.weekday().num_days_from_monday() as usize]
    }
}

/// 解析 `YYYY/M/D` 或 `M/D`，後者套用 `default_year`
pub fn parse_draw_date(raw: &str, default_year: i32) -> Result<DrawDate> {
    let parts: Vec<&str> = raw.split('/').collect();

    let (year, month, day) = match parts.as_slice() {
        [year, month, day] => (parse_component(raw, year, 4..=4)?, *month, *day),
        [month, day] => (default_year, *month, *day),
        _ => {
            return Err(EtlError::DateParseError {
                value: raw.to_string(),
                reason: "expected YYYY/M/D or M/D".to_string(),
            })
        }
    };

    let month_value = parse_component(raw, month, 1..=2)?;
    let day_value = parse_component(raw, day, 1..=2)?;

    let date = u32::try_from(month_value)
        .ok()
        .zip(u32::try_from(day_value).ok())
        .and_then(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
        .ok_or_else(|| EtlError::DateParseError {
            value: raw.to_string(),
            reason: format!("{}/{}/{} is not a calendar date", year, month_value, day_value),
        })?;

    Ok(DrawDate {
        date,
        month_day: format!("{}/{}", month, day),
    })
}

/// 年份固定四位數，月、日為一到兩位數
fn parse_component(raw: &str, part: &str, digits: RangeInclusive<usize>) -> Result<i32> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(EtlError::DateParseError {
            value: raw.to_string(),
            reason: format!("'{}' is not a number", part),
        });
    }

    if !digits.contains(&part.len()) {
        return Err(EtlError::DateParseError {
            value: raw.to_string(),
            reason: format!(
                "'{}' must have {} to {} digits",
                part,
                digits.start(),
                digits.end()
            ),
        });
    }

    part.parse::<i32>().map_err(|e| EtlError::DateParseError {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

/// 換算失敗時回傳空字串，不影響紀錄本身
pub fn weekday_label(raw: &str, default_year: i32) -> String {
    parse_draw_date(raw, default_year)
        .map(|d| d.weekday_label().to_string())
        .unwrap_or_default()
}

/// 過濾號碼不完整的紀錄，並依期別由新到舊排序
pub fn finalize(candidates: Vec<DrawCandidate>) -> TransformResult {
    let total = candidates.len();
    let mut processed_records = Vec::with_capacity(total);

    for candidate in candidates {
        let period = candidate.period.clone();
        match candidate.into_complete() {
            Some(record) => processed_records.push(record),
            None => tracing::debug!("Dropping incomplete draw {}", period),
        }
    }

    // sort_by 為穩定排序，同期別保留載入順序
    processed_records.sort_by(|a, b| b.period.cmp(&a.period));

    TransformResult {
        discarded: total - processed_records.len(),
        processed_records,
    }
}
