use query_common::routes::page_url;
use query_common::{Navigation, SortOrder};
use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// 翻页请求
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagerRequest {
    /// 目标页码，从 1 开始
    pub page_number: i64,
    pub min: i64,
    pub max: i64,
    /// 当前排序在排序表中的下标
    pub ordering_index: usize,
    /// 当前结果页的基础路径，默认列表为空串
    #[serde(default)]
    pub base_path: String,
}

impl PagerRequest {
    /// 页码在 `[min, max]` 内，且不小于 1
    pub fn in_range(&self) -> bool {
        self.page_number >= 1 && (self.min..=self.max).contains(&self.page_number)
    }

    /// 计算翻页地址，页码越界或偏移量无法表示时返回 `None` 且不做任何事
    pub fn target(&self) -> Result<Option<String>, FormError> {
        if !self.in_range() {
            return Ok(None);
        }
        let Some(offset) = Navigation::offset_for_page(self.page_number as u64) else {
            return Ok(None);
        };
        let order = SortOrder::from_index(self.ordering_index)
            .ok_or(FormError::OrderingIndexOutOfRange(self.ordering_index))?;
        Ok(Some(page_url(&self.base_path, order, offset)))
    }
}
