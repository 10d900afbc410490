use query_common::codec::{self, is_canonical_empty};
use query_common::{Navigation, QueryDescriptor, SortOrder, TagFilterEntry};

use crate::error::FormError;
use crate::keyword::parse_keywords;
use crate::state::FormState;
use crate::toggle::FilterState;
use crate::year::{current_year, translate_year_at};

/// 由表单快照生成查询描述
pub fn build_descriptor(form: &FormState, current_year: i32) -> Result<QueryDescriptor, FormError> {
    let tags = form
        .tags
        .iter()
        .filter_map(|item| match item.state {
            FilterState::Positive => Some(TagFilterEntry::include(item.label.as_str())),
            FilterState::Negative => Some(TagFilterEntry::exclude(item.label.as_str())),
            FilterState::Neutral => None,
        })
        .collect();

    let years = form
        .years
        .iter()
        .filter(|item| item.state == FilterState::Positive)
        .map(|item| translate_year_at(&item.label, current_year))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QueryDescriptor {
        keywords: parse_keywords(&form.keyword_text),
        tags,
        years,
        user: form.user().map(str::to_string),
        r18_mode: form.r18.tri_mode(),
        fav_mode: form.fav.tri_mode(),
    })
}

/// 计算提交后的跳转目标
///
/// 查询字符串超过上限时返回 `QueryTooLong`，调用方不应跳转。
/// 无筛选时直接回到默认列表。
pub fn encode_form(form: &FormState, current_year: i32) -> Result<Navigation, FormError> {
    let descriptor = build_descriptor(form, current_year)?;
    let query = codec::encode_bounded(&descriptor)?;

    if is_canonical_empty(&query) || descriptor.is_unfiltered() {
        return Ok(Navigation::Listing {
            order: SortOrder::DEFAULT,
            offset: 0,
        });
    }

    let order = if descriptor.keywords.is_empty() {
        SortOrder::DEFAULT
    } else {
        SortOrder::KEYWORD_DEFAULT
    };
    Ok(Navigation::Search {
        query,
        order,
        offset: 0,
    })
}

/// 按当前时间提交
pub fn submit(form: &FormState) -> Result<Navigation, FormError> {
    encode_form(form, current_year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::FilterItem;
    use query_common::{KeywordKind, KeywordToken, TriMode, YearInterval};
    use rstest::rstest;

    fn year_items() -> Vec<FilterItem> {
        ["(..2000)", "(2000..2005)", "(2005..2009)", "(2009..2015)", "(2015..)", "Now"]
            .into_iter()
            .map(FilterItem::new)
            .collect()
    }

    fn tag_items() -> Vec<FilterItem> {
        ["奇幻", "科幻", "冒险", "轻小说改", "漫画改", "游戏改", "GAL改", "日常", "搞笑", "里番"]
            .into_iter()
            .map(FilterItem::new)
            .collect()
    }

    fn blank_form() -> FormState {
        FormState {
            tags: tag_items(),
            years: year_items(),
            ..FormState::default()
        }
    }

    #[test]
    fn empty_form_goes_to_default_listing() {
        let nav = encode_form(&blank_form(), 2024).unwrap();
        assert_eq!(nav.to_url(), "/dr/0");
    }

    #[test]
    fn canonical_empty_descriptor_goes_to_default_listing() {
        let form = FormState {
            fav: FilterState::Negative,
            ..blank_form()
        };
        assert_eq!(encode_form(&form, 2024).unwrap().to_url(), "/dr/0");
    }

    #[test]
    fn keywords_select_relevance_order() {
        let form = FormState {
            keyword_text: "魔法 -机战".to_string(),
            ..blank_form()
        };
        let nav = encode_form(&form, 2024).unwrap();
        match &nav {
            Navigation::Search { query, order, offset } => {
                assert_eq!(query, r#"[[[0,"魔法"],[1,"机战"]],[],[],null,3,3]"#);
                assert_eq!(order.token(), "dl");
                assert_eq!(*offset, 0);
            }
            other => panic!("unexpected navigation: {:?}", other),
        }
        assert!(nav.to_url().starts_with("/search/"));
        assert!(nav.to_url().ends_with("/dl/0"));
    }

    #[rstest]
    #[case(FormState { r18: FilterState::Positive, ..blank_form() })]
    #[case(FormState { fav: FilterState::Positive, ..blank_form() })]
    #[case(FormState { user_text: "sai".to_string(), ..blank_form() })]
    fn other_filters_select_default_order(#[case] form: FormState) {
        let nav = encode_form(&form, 2024).unwrap();
        assert!(matches!(nav, Navigation::Search { .. }));
        assert_eq!(nav.order().token(), "dr");
    }

    #[test]
    fn tags_and_years_follow_item_state() {
        let mut form = blank_form();
        form.tags[0].state = FilterState::Positive;
        form.tags[8].state = FilterState::Negative;
        form.years[0].state = FilterState::Positive;
        form.years[5].state = FilterState::Positive;
        form.years[2].state = FilterState::Negative;

        let descriptor = build_descriptor(&form, 2024).unwrap();
        assert_eq!(
            descriptor.tags,
            vec![TagFilterEntry::include("奇幻"), TagFilterEntry::exclude("搞笑")]
        );
        assert_eq!(
            descriptor.years,
            vec![YearInterval::new(None, Some(2000)), YearInterval::new(Some(2024), Some(2025))]
        );
        assert_eq!(descriptor.r18_mode, TriMode::Any);
        assert_eq!(descriptor.user, None);
    }

    #[test]
    fn single_modes_map_to_codes() {
        let form = FormState {
            r18: FilterState::Negative,
            fav: FilterState::Positive,
            ..blank_form()
        };
        let descriptor = build_descriptor(&form, 2024).unwrap();
        assert_eq!(descriptor.r18_mode, TriMode::No);
        assert_eq!(descriptor.fav_mode, TriMode::Yes);
        assert_eq!(
            codec::encode(&descriptor).unwrap(),
            "[[],[],[],null,1,2]"
        );
    }

    #[test]
    fn too_long_query_does_not_navigate() {
        let form = FormState {
            keyword_text: "关键词".repeat(20),
            ..blank_form()
        };
        let err = encode_form(&form, 2024).unwrap_err();
        assert!(err.is_query_too_long());
    }

    #[test]
    fn bad_year_label_is_reported() {
        let form = FormState {
            years: vec![FilterItem::with_state("去年", FilterState::Positive)],
            ..FormState::default()
        };
        assert!(matches!(
            encode_form(&form, 2024),
            Err(FormError::UnrecognizedYearLabel(_))
        ));
    }

    #[test]
    fn neutral_year_labels_are_not_parsed() {
        let form = FormState {
            years: vec![FilterItem::new("去年")],
            ..FormState::default()
        };
        assert_eq!(encode_form(&form, 2024).unwrap().to_url(), "/dr/0");
    }

    #[test]
    fn keyword_order_is_kept_in_descriptor() {
        let form = FormState {
            keyword_text: "*b a".to_string(),
            ..FormState::default()
        };
        let descriptor = build_descriptor(&form, 2024).unwrap();
        assert_eq!(
            descriptor.keywords,
            vec![
                KeywordToken::new(KeywordKind::OptionalInclude, "b"),
                KeywordToken::new(KeywordKind::Include, "a"),
            ]
        );
    }
}
