use query_common::CodecError;
use thiserror::Error;

/// 搜索表单错误
///
/// 只有查询过长需要提示用户，其余都说明页面结构与脚本不匹配。
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("无法识别的年份标签: {0:?}")]
    UnrecognizedYearLabel(String),

    #[error("排序下标超出范围: {0}")]
    OrderingIndexOutOfRange(usize),

    #[error("页面缺少元素: {0}")]
    MissingElement(String),

    #[error("DOM 操作失败: {0}")]
    Dom(String),

    #[error("无效的参数: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

impl FormError {
    /// 查询字符串过长，应提示用户缩短关键词
    pub fn is_query_too_long(&self) -> bool {
        matches!(self, FormError::Codec(CodecError::QueryTooLong { .. }))
    }
}
