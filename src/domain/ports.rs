use crate::domain::model::{DrawCandidate, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// 所有檔名都相對於 Storage 的根目錄
pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn json_source(&self) -> &str;
    fn asc_csv(&self) -> &str;
    fn draw_csv(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_file(&self) -> &str;
    /// 只有 月/日 的日期所套用的年份
    fn default_year(&self) -> i32;
    fn placeholder(&self) -> &str;
    fn data_variable(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<DrawCandidate>>;
    fn transform(&self, data: Vec<DrawCandidate>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
