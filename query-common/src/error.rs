use thiserror::Error;

/// 查询协议错误 - 编解码、路由解析过程中可能出现的错误
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("查询描述序列化失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("查询字符串过长: {len} 字节, 上限 {max} 字节")]
    QueryTooLong { len: usize, max: usize },

    #[error("未知的关键词类型: {0}")]
    KeywordKind(u8),

    #[error("无效的标签标记: {0}")]
    TagFlag(u8),

    #[error("无效的筛选模式: {0}")]
    TriMode(u8),

    #[error("未知的排序方式: {0}")]
    UnknownOrdering(String),

    #[error("无效的路径: {0}")]
    Route(String),
}
