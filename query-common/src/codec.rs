use crate::error::CodecError;
use crate::models::QueryDescriptor;

/// 查询字符串的最大字节数，超出后后端直接拒绝
pub const MAX_QUERY_LEN: usize = 127;

/// 无任何筛选时的规范查询字符串
pub const CANONICAL_EMPTY_QUERY: &str = "[[],[],[],null,3,1]";

/// 将查询描述序列化为紧凑 JSON
pub fn encode(descriptor: &QueryDescriptor) -> Result<String, CodecError> {
    Ok(serde_json::to_string(descriptor)?)
}

/// 序列化并检查长度上限 (按 UTF-8 字节计)
pub fn encode_bounded(descriptor: &QueryDescriptor) -> Result<String, CodecError> {
    let encoded = encode(descriptor)?;
    if encoded.len() > MAX_QUERY_LEN {
        return Err(CodecError::QueryTooLong {
            len: encoded.len(),
            max: MAX_QUERY_LEN,
        });
    }
    Ok(encoded)
}

/// 从查询字符串恢复查询描述
pub fn decode(query: &str) -> Result<QueryDescriptor, CodecError> {
    Ok(serde_json::from_str(query)?)
}

pub fn is_canonical_empty(encoded: &str) -> bool {
    encoded == CANONICAL_EMPTY_QUERY
}
