use serde::{Deserialize, Serialize};

/// 每期開出的號碼數量
pub const NUMBERS_PER_DRAW: usize = 5;

/// 一期開獎紀錄，欄位順序即為嵌入 HTML 的 JSON 欄位順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// 可排序的期別鍵，例如 `D20250111`
    pub period: String,
    /// 原始的 月/日 文字，例如 `1/11`
    pub date: String,
    /// 星期 (一 ~ 日)，無法換算時為空字串
    pub day: String,
    /// 大小順序
    pub asc: Vec<u32>,
    /// 落球順序
    pub draw: Vec<u32>,
}

/// 載入階段的紀錄，號碼可能不完整或尚未取得落球順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCandidate {
    pub period: String,
    pub date: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub asc: Vec<u32>,
    #[serde(default)]
    pub draw: Option<Vec<u32>>,
}

impl DrawCandidate {
    /// 兩組號碼都恰好五個才成為正式紀錄
    pub fn into_complete(self) -> Option<DrawRecord> {
        let draw = self.draw?;
        if self.asc.len() != NUMBERS_PER_DRAW || draw.len() != NUMBERS_PER_DRAW {
            return None;
        }

        Some(DrawRecord {
            period: self.period,
            date: self.date,
            day: self.day,
            asc: self.asc,
            draw,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub processed_records: Vec<DrawRecord>,
    pub discarded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(asc: Vec<u32>, draw: Option<Vec<u32>>) -> DrawCandidate {
        DrawCandidate {
            period: "D20250111".to_string(),
            date: "1/11".to_string(),
            day: "六".to_string(),
            asc,
            draw,
        }
    }

    #[test]
    fn test_complete_candidate_becomes_record() {
        let record = candidate(vec![1, 5, 9, 20, 30], Some(vec![20, 1, 30, 9, 5]))
            .into_complete()
            .unwrap();
        assert_eq!(record.asc, vec![1, 5, 9, 20, 30]);
        assert_eq!(record.draw, vec![20, 1, 30, 9, 5]);
    }

    #[test]
    fn test_incomplete_candidates_are_rejected() {
        assert!(candidate(vec![1, 5, 9, 20, 30], None).into_complete().is_none());
        assert!(candidate(vec![1, 5, 9, 20], Some(vec![20, 1, 30, 9, 5]))
            .into_complete()
            .is_none());
        assert!(candidate(vec![1, 5, 9, 20, 30], Some(vec![20, 1, 30, 9, 5, 7]))
            .into_complete()
            .is_none());
    }

    #[test]
    fn test_candidate_json_without_draw_defaults_to_none() {
        let json = r#"{"period": "D20250111", "date": "1/11", "asc": [1, 5, 9, 20, 30]}"#;
        let parsed: DrawCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.day, "");
        assert!(parsed.draw.is_none());
    }
}
