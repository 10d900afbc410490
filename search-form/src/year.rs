use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use query_common::YearInterval;
use regex::Regex;

use crate::error::FormError;

static CLOSED_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(([0-9]{4})\.\.([0-9]{4})\)$").unwrap());
static RANGE_FROM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(([0-9]{4})\.\.\)$").unwrap());
static RANGE_TO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\.\.([0-9]{4})\)$").unwrap());
static SINGLE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// 当前年份标签
pub const NOW_LABEL: &str = "Now";

/// 本地时间的当前年份
pub fn current_year() -> i32 {
    Local::now().year()
}

/// 按当前时间将年份标签转换为区间
pub fn translate_year(label: &str) -> Result<YearInterval, FormError> {
    translate_year_at(label, current_year())
}

/// 将年份标签转换为左闭右开区间
///
/// 支持 `Now`、`(A..B)`、`(A..)`、`(..B)` 与四位年份 `A`。
pub fn translate_year_at(label: &str, current_year: i32) -> Result<YearInterval, FormError> {
    if label == NOW_LABEL {
        return Ok(YearInterval::single(current_year));
    }
    if let Some(caps) = CLOSED_RANGE.captures(label) {
        return Ok(YearInterval::new(Some(parse_year(&caps[1])), Some(parse_year(&caps[2]))));
    }
    if let Some(caps) = RANGE_FROM.captures(label) {
        return Ok(YearInterval::new(Some(parse_year(&caps[1])), None));
    }
    if let Some(caps) = RANGE_TO.captures(label) {
        return Ok(YearInterval::new(None, Some(parse_year(&caps[1]))));
    }
    if SINGLE_YEAR.is_match(label) {
        return Ok(YearInterval::single(parse_year(label)));
    }
    Err(FormError::UnrecognizedYearLabel(label.to_string()))
}

// 只会收到正则匹配过的四位数字
fn parse_year(digits: &str) -> i32 {
    digits.bytes().fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
}
