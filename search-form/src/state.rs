use serde::{Deserialize, Serialize};

use crate::toggle::{FilterItem, FilterState};

/// 提交时的表单快照
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    /// 关键词输入框原文
    pub keyword_text: String,
    /// 标签筛选项
    pub tags: Vec<FilterItem>,
    /// 年份筛选项
    pub years: Vec<FilterItem>,
    /// 用户输入框原文
    pub user_text: String,
    pub r18: FilterState,
    pub fav: FilterState,
}

impl FormState {
    /// 用户输入为空时视为未填写
    pub fn user(&self) -> Option<&str> {
        (!self.user_text.is_empty()).then_some(self.user_text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_snapshot() {
        let form: FormState = serde_json::from_str(
            r#"{"keywordText":"魔法","tags":[{"label":"奇幻","state":"negative"}],"r18":"positive"}"#,
        )
        .unwrap();
        assert_eq!(form.keyword_text, "魔法");
        assert_eq!(form.tags[0], FilterItem::with_state("奇幻", FilterState::Negative));
        assert!(form.years.is_empty());
        assert_eq!(form.r18, FilterState::Positive);
        assert_eq!(form.fav, FilterState::Neutral);
        assert_eq!(form.user(), None);
    }

    #[test]
    fn whitespace_user_is_kept() {
        let form = FormState {
            user_text: " ".to_string(),
            ..FormState::default()
        };
        assert_eq!(form.user(), Some(" "));
    }
}
