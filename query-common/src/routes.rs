use std::fmt;

use crate::error::CodecError;
use crate::ordering::SortOrder;

/// 每页条数
pub const PAGE_SIZE: u64 = 25;

/// 跳转目标
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// 无筛选的默认列表 `/<ord>/<offset>`
    Listing { order: SortOrder, offset: u64 },
    /// 搜索结果 `/search/<query>/<ord>/<offset>`，`query` 为未转义的查询字符串
    Search {
        query: String,
        order: SortOrder,
        offset: u64,
    },
}

impl Navigation {
    /// 第 `page` 页 (从 1 开始) 的偏移量，无法表示时返回 `None`
    pub fn offset_for_page(page: u64) -> Option<u64> {
        page.saturating_sub(1).checked_mul(PAGE_SIZE)
    }

    pub fn order(&self) -> SortOrder {
        match self {
            Navigation::Listing { order, .. } | Navigation::Search { order, .. } => *order,
        }
    }

    pub fn to_url(&self) -> String {
        match self {
            Navigation::Listing { order, offset } => page_url("", *order, *offset),
            Navigation::Search { query, order, offset } => page_url(&search_base(query), *order, *offset),
        }
    }

    /// 解析站内路径，与后端的两条路由对应
    pub fn parse(path: &str) -> Result<Self, CodecError> {
        let bad_route = || CodecError::Route(path.to_string());
        let segments: Vec<&str> = path.strip_prefix('/').ok_or_else(bad_route)?.split('/').collect();

        match segments.as_slice() {
            ["search", query, ord, offset] => {
                let query = urlencoding::decode(query).map_err(|_| bad_route())?.into_owned();
                Ok(Navigation::Search {
                    query,
                    order: SortOrder::parse(ord)?,
                    offset: offset.parse().map_err(|_| bad_route())?,
                })
            }
            [ord, offset] => Ok(Navigation::Listing {
                order: SortOrder::parse(ord)?,
                offset: offset.parse().map_err(|_| bad_route())?,
            }),
            _ => Err(bad_route()),
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// 搜索结果页的基础路径，查询字符串按 URL 组件转义
pub fn search_base(query: &str) -> String {
    format!("/search/{}", urlencoding::encode(query))
}

/// `<base>/<ord>/<offset>`
pub fn page_url(base: &str, order: SortOrder, offset: u64) -> String {
    format!("{}/{}/{}", base, order, offset)
}
