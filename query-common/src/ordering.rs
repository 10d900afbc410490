use std::fmt;

use crate::error::CodecError;

/// 排序方式表 - 下标即页面上排序选择器的 `data-ord` 值
pub const ORDERING_TOKENS: [&str; 10] = ["ar", "dr", "al", "dl", "ak", "dk", "ad", "dd", "af", "df"];

/// 排序方向，由排序码首字母决定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// 排序方式 - 两字母排序码的下标
///
/// 第二个字母选择排序依据，其含义由后端定义，这里只当作不透明的值传递。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SortOrder(usize);

impl SortOrder {
    /// 无关键词时的默认排序 (`dr`)
    pub const DEFAULT: SortOrder = SortOrder(1);
    /// 有关键词时的默认排序 (`dl`)
    pub const KEYWORD_DEFAULT: SortOrder = SortOrder(3);

    pub fn from_index(index: usize) -> Option<Self> {
        (index < ORDERING_TOKENS.len()).then_some(SortOrder(index))
    }

    /// 根据排序码查找
    pub fn parse(token: &str) -> Result<Self, CodecError> {
        ORDERING_TOKENS
            .iter()
            .position(|t| *t == token)
            .map(SortOrder)
            .ok_or_else(|| CodecError::UnknownOrdering(token.to_string()))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn token(self) -> &'static str {
        ORDERING_TOKENS[self.0]
    }

    pub fn direction(self) -> Direction {
        if self.token().starts_with('a') {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }

    /// 排序依据字母
    pub fn key(self) -> char {
        self.token().chars().nth(1).unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
