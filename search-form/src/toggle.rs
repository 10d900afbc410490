use query_common::TriMode;
use serde::{Deserialize, Serialize};

/// 筛选项状态
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterState {
    #[default]
    Neutral,
    Positive,
    Negative,
}

impl FilterState {
    pub const POSITIVE_CLASS: &'static str = "Positive";
    pub const NEGATIVE_CLASS: &'static str = "Negative";

    /// 由元素上的状态类名还原，`Positive` 优先
    pub fn from_classes(positive: bool, negative: bool) -> Self {
        if positive {
            FilterState::Positive
        } else if negative {
            FilterState::Negative
        } else {
            FilterState::Neutral
        }
    }

    pub fn class_name(self) -> Option<&'static str> {
        match self {
            FilterState::Neutral => None,
            FilterState::Positive => Some(Self::POSITIVE_CLASS),
            FilterState::Negative => Some(Self::NEGATIVE_CLASS),
        }
    }

    /// R18、收藏筛选的协议值
    pub fn tri_mode(self) -> TriMode {
        match self {
            FilterState::Positive => TriMode::Yes,
            FilterState::Negative => TriMode::No,
            FilterState::Neutral => TriMode::Any,
        }
    }
}

/// 点击时的状态轮转规则
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// 年份: 无 -> 选中 -> 无
    Year,
    /// 标签: 无 -> 包含 -> 排除 -> 无
    Tag,
    /// 单项三态: 任意 -> 是 -> 否 -> 任意，标签文字随状态变化
    Single3,
}

impl CyclePolicy {
    pub fn next(self, state: FilterState) -> FilterState {
        match (self, state) {
            (CyclePolicy::Year, FilterState::Positive) => FilterState::Neutral,
            (CyclePolicy::Year, _) => FilterState::Positive,
            (_, FilterState::Neutral) => FilterState::Positive,
            (_, FilterState::Positive) => FilterState::Negative,
            (_, FilterState::Negative) => FilterState::Neutral,
        }
    }

    /// 需要同步显示的文字
    pub fn label_for(self, state: FilterState) -> Option<&'static str> {
        match self {
            CyclePolicy::Single3 => Some(match state {
                FilterState::Neutral => "任意",
                FilterState::Positive => "是",
                FilterState::Negative => "否",
            }),
            _ => None,
        }
    }
}

/// 一个可点击的筛选项
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterItem {
    /// 显示文字，标签名或年份标签
    pub label: String,
    #[serde(default)]
    pub state: FilterState,
}

impl FilterItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_state(label, FilterState::Neutral)
    }

    pub fn with_state(label: impl Into<String>, state: FilterState) -> Self {
        Self {
            label: label.into(),
            state,
        }
    }

    /// 单项三态控件，文字与状态一致
    pub fn single3(state: FilterState) -> Self {
        let label = CyclePolicy::Single3.label_for(state).unwrap_or_default();
        Self::with_state(label, state)
    }

    /// 按规则前进一步并返回新状态
    pub fn click(&mut self, policy: CyclePolicy) -> FilterState {
        self.state = policy.next(self.state);
        if let Some(label) = policy.label_for(self.state) {
            self.label = label.to_string();
        }
        self.state
    }
}
