use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// 关键词类型 - 低位表示排除，高位表示模糊匹配
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum KeywordKind {
    /// 必须包含
    Include = 0,
    /// 必须不包含
    Exclude = 1,
    /// 模糊包含
    OptionalInclude = 2,
    /// 模糊排除
    OptionalExclude = 3,
}

impl KeywordKind {
    /// 协议中的数字编码
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_exclude(self) -> bool {
        self.code() & 0b01 != 0
    }

    pub fn is_optional(self) -> bool {
        self.code() & 0b10 != 0
    }
}

impl From<KeywordKind> for u8 {
    fn from(kind: KeywordKind) -> u8 {
        kind.code()
    }
}

impl TryFrom<u8> for KeywordKind {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(KeywordKind::Include),
            1 => Ok(KeywordKind::Exclude),
            2 => Ok(KeywordKind::OptionalInclude),
            3 => Ok(KeywordKind::OptionalExclude),
            other => Err(CodecError::KeywordKind(other)),
        }
    }
}

/// 关键词 - 序列化为 `[类型, "文本"]`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "(KeywordKind, String)", into = "(KeywordKind, String)")]
pub struct KeywordToken {
    pub kind: KeywordKind,
    pub text: String,
}

impl KeywordToken {
    pub fn new(kind: KeywordKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl From<(KeywordKind, String)> for KeywordToken {
    fn from((kind, text): (KeywordKind, String)) -> Self {
        Self { kind, text }
    }
}

impl From<KeywordToken> for (KeywordKind, String) {
    fn from(token: KeywordToken) -> Self {
        (token.kind, token.text)
    }
}

/// 标签筛选项 - 序列化为 `[1|0, "标签名"]`，1 表示包含
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "(u8, String)", into = "(u8, String)")]
pub struct TagFilterEntry {
    pub included: bool,
    pub name: String,
}

impl TagFilterEntry {
    pub fn include(name: impl Into<String>) -> Self {
        Self {
            included: true,
            name: name.into(),
        }
    }

    pub fn exclude(name: impl Into<String>) -> Self {
        Self {
            included: false,
            name: name.into(),
        }
    }
}

impl TryFrom<(u8, String)> for TagFilterEntry {
    type Error = CodecError;

    fn try_from((flag, name): (u8, String)) -> Result<Self, Self::Error> {
        match flag {
            1 => Ok(Self::include(name)),
            0 => Ok(Self::exclude(name)),
            other => Err(CodecError::TagFlag(other)),
        }
    }
}

impl From<TagFilterEntry> for (u8, String) {
    fn from(entry: TagFilterEntry) -> Self {
        (u8::from(entry.included), entry.name)
    }
}

/// 年份区间 - 左闭右开，`None` 表示该端不设限
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "(Option<i32>, Option<i32>)", into = "(Option<i32>, Option<i32>)")]
pub struct YearInterval {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearInterval {
    pub fn new(start: Option<i32>, end: Option<i32>) -> Self {
        Self { start, end }
    }

    /// 单独一年 `[year, year + 1)`
    pub fn single(year: i32) -> Self {
        Self::new(Some(year), Some(year + 1))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start.map_or(true, |start| year >= start) && self.end.map_or(true, |end| year < end)
    }
}

impl From<(Option<i32>, Option<i32>)> for YearInterval {
    fn from((start, end): (Option<i32>, Option<i32>)) -> Self {
        Self { start, end }
    }
}

impl From<YearInterval> for (Option<i32>, Option<i32>) {
    fn from(interval: YearInterval) -> Self {
        (interval.start, interval.end)
    }
}

/// 单项三态筛选的协议值 (R18、收藏)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum TriMode {
    /// 否
    No = 1,
    /// 是
    Yes = 2,
    /// 任意
    #[default]
    Any = 3,
}

impl TriMode {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 后端的解释：`Some(true)` 只要，`Some(false)` 不要，`None` 不限
    pub fn as_filter(self) -> Option<bool> {
        match self {
            TriMode::No => Some(false),
            TriMode::Yes => Some(true),
            TriMode::Any => None,
        }
    }
}

impl From<TriMode> for u8 {
    fn from(mode: TriMode) -> u8 {
        mode.code()
    }
}

impl TryFrom<u8> for TriMode {
    type Error = CodecError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TriMode::No),
            2 => Ok(TriMode::Yes),
            3 => Ok(TriMode::Any),
            other => Err(CodecError::TriMode(other)),
        }
    }
}

type DescriptorWire = (
    Vec<KeywordToken>,
    Vec<TagFilterEntry>,
    Vec<YearInterval>,
    Option<String>,
    TriMode,
    TriMode,
);

/// 查询描述 - 以固定顺序的六元组写入 URL
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(from = "DescriptorWire", into = "DescriptorWire")]
pub struct QueryDescriptor {
    /// 关键词，保持输入顺序
    pub keywords: Vec<KeywordToken>,
    /// 标签筛选
    pub tags: Vec<TagFilterEntry>,
    /// 年份区间
    pub years: Vec<YearInterval>,
    /// 用户名或用户 ID
    pub user: Option<String>,
    pub r18_mode: TriMode,
    pub fav_mode: TriMode,
}

impl QueryDescriptor {
    /// 所有筛选条件都处于默认状态
    pub fn is_unfiltered(&self) -> bool {
        self.keywords.is_empty()
            && self.tags.is_empty()
            && self.years.is_empty()
            && self.user.is_none()
            && self.r18_mode == TriMode::Any
            && self.fav_mode == TriMode::Any
    }
}

impl From<DescriptorWire> for QueryDescriptor {
    fn from((keywords, tags, years, user, r18_mode, fav_mode): DescriptorWire) -> Self {
        Self {
            keywords,
            tags,
            years,
            user,
            r18_mode,
            fav_mode,
        }
    }
}

impl From<QueryDescriptor> for DescriptorWire {
    fn from(d: QueryDescriptor) -> Self {
        (d.keywords, d.tags, d.years, d.user, d.r18_mode, d.fav_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeywordKind::Include, false, false)]
    #[case(KeywordKind::Exclude, true, false)]
    #[case(KeywordKind::OptionalInclude, false, true)]
    #[case(KeywordKind::OptionalExclude, true, true)]
    fn keyword_kind_bits(#[case] kind: KeywordKind, #[case] exclude: bool, #[case] optional: bool) {
        assert_eq!(kind.is_exclude(), exclude);
        assert_eq!(kind.is_optional(), optional);
    }

    #[test]
    fn tokens_serialize_as_pairs() {
        let token = KeywordToken::new(KeywordKind::Exclude, "魔法");
        assert_eq!(serde_json::to_string(&token).unwrap(), r#"[1,"魔法"]"#);

        let tag = TagFilterEntry::exclude("搞笑");
        assert_eq!(serde_json::to_string(&tag).unwrap(), r#"[0,"搞笑"]"#);
    }

    #[test]
    fn open_bounds_serialize_as_null() {
        let interval = YearInterval::new(None, Some(2000));
        assert_eq!(serde_json::to_string(&interval).unwrap(), "[null,2000]");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(serde_json::from_str::<KeywordKind>("4").is_err());
        assert!(serde_json::from_str::<TagFilterEntry>(r#"[2,"x"]"#).is_err());
        assert!(serde_json::from_str::<TriMode>("0").is_err());
    }

    #[rstest]
    #[case(YearInterval::new(Some(2001), Some(2005)), 2004, true)]
    #[case(YearInterval::new(Some(2001), Some(2005)), 2005, false)]
    #[case(YearInterval::new(None, Some(2000)), 1960, true)]
    #[case(YearInterval::new(Some(2015), None), 2014, false)]
    #[case(YearInterval::new(None, None), 1, true)]
    fn interval_is_half_open(#[case] interval: YearInterval, #[case] year: i32, #[case] expected: bool) {
        assert_eq!(interval.contains(year), expected);
    }

    #[test]
    fn default_descriptor_is_unfiltered() {
        let descriptor = QueryDescriptor::default();
        assert!(descriptor.is_unfiltered());
        assert_eq!(descriptor.r18_mode.as_filter(), None);

        let filtered = QueryDescriptor {
            fav_mode: TriMode::No,
            ..QueryDescriptor::default()
        };
        assert!(!filtered.is_unfiltered());
    }
}
