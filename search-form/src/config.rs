use serde::{Deserialize, Serialize};

/// 页面结构配置 - 元素 ID 与类名
///
/// 缺省值与站点模板一致，JS 端只需传入需要覆盖的字段。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    pub keyword_box: String,
    pub user_box: String,
    pub submit_button: String,
    pub year_box: String,
    pub tag_box: String,
    pub r18_box: String,
    pub fav_box: String,
    /// 排序选择器，`data-ord` 保存当前排序下标
    pub sort_mode: String,
    /// 结果面板，`data-orig-base` 保存当前结果页的基础路径
    pub search_panel: String,
    pub pager_submit: String,
    pub pager_value: String,
    /// 筛选项的类名
    pub item_class: String,
    /// 查询过长时的提示
    pub too_long_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            keyword_box: "WorkSearchBox".to_string(),
            user_box: "WorkUserBox".to_string(),
            submit_button: "SubmitWorkSearchBox".to_string(),
            year_box: "year_box".to_string(),
            tag_box: "tag_box".to_string(),
            r18_box: "r18_box".to_string(),
            fav_box: "fav_box".to_string(),
            sort_mode: "WorkSortMode".to_string(),
            search_panel: "WorkSearchPanel".to_string(),
            pager_submit: "PagerSubmit".to_string(),
            pager_value: "PagerValue".to_string(),
            item_class: "WorkFilterItem".to_string(),
            too_long_message: "查询字符串过长，请考虑缩短关键词长度".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_merge_with_defaults() {
        let config: FormConfig = serde_json::from_str(r#"{"tagBox":"genre_box","itemClass":"Chip"}"#).unwrap();
        assert_eq!(config.tag_box, "genre_box");
        assert_eq!(config.item_class, "Chip");
        assert_eq!(config.year_box, "year_box");
        assert_eq!(config.pager_value, "PagerValue");
    }
}
