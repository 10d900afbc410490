use query_common::{KeywordKind, KeywordToken};

/// 解析关键词输入框
///
/// 以空格分词，忽略空词。前缀规则：
/// `-*` / `*-` 模糊排除，`-` 排除，`*` 模糊包含，其余为包含。
/// 结果保持输入顺序，后端依赖该顺序计算相关度。
pub fn parse_keywords(input: &str) -> Vec<KeywordToken> {
    input
        .trim()
        .split(' ')
        .filter(|segment| !segment.is_empty())
        .map(classify)
        .collect()
}

fn classify(token: &str) -> KeywordToken {
    if let Some(rest) = token.strip_prefix("-*").or_else(|| token.strip_prefix("*-")) {
        KeywordToken::new(KeywordKind::OptionalExclude, rest)
    } else if let Some(rest) = token.strip_prefix('-') {
        KeywordToken::new(KeywordKind::Exclude, rest)
    } else if let Some(rest) = token.strip_prefix('*') {
        KeywordToken::new(KeywordKind::OptionalInclude, rest)
    } else {
        KeywordToken::new(KeywordKind::Include, token)
    }
}

/// 将关键词还原为输入框文字，用于回填搜索框
pub fn render_keywords(tokens: &[KeywordToken]) -> String {
    tokens
        .iter()
        .map(|token| {
            let optional = if token.kind.is_optional() { "*" } else { "" };
            let exclude = if token.kind.is_exclude() { "-" } else { "" };
            format!("{}{}{}", optional, exclude, token.text)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("魔法", KeywordKind::Include, "魔法")]
    #[case("-魔法", KeywordKind::Exclude, "魔法")]
    #[case("*魔法", KeywordKind::OptionalInclude, "魔法")]
    #[case("-*魔法", KeywordKind::OptionalExclude, "魔法")]
    #[case("*-魔法", KeywordKind::OptionalExclude, "魔法")]
    #[case("--a", KeywordKind::Exclude, "-a")]
    #[case("**a", KeywordKind::OptionalInclude, "*a")]
    #[case("-", KeywordKind::Exclude, "")]
    #[case("a-b", KeywordKind::Include, "a-b")]
    fn classification(#[case] input: &str, #[case] kind: KeywordKind, #[case] text: &str) {
        assert_eq!(parse_keywords(input), vec![KeywordToken::new(kind, text)]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        let tokens = parse_keywords("  a   -b  ");
        assert_eq!(
            tokens,
            vec![
                KeywordToken::new(KeywordKind::Include, "a"),
                KeywordToken::new(KeywordKind::Exclude, "b"),
            ]
        );
        assert!(parse_keywords("   ").is_empty());
        assert!(parse_keywords("").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let tokens = parse_keywords("z *y -x -*w");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["z", "y", "x", "w"]);
    }

    #[test]
    fn render_refills_search_box() {
        let tokens = parse_keywords("a -b *c *-d");
        assert_eq!(render_keywords(&tokens), "a -b *c *-d");
        assert_eq!(render_keywords(&parse_keywords("-*d")), "*-d");
    }

    proptest! {
        #[test]
        fn combined_prefix_wins(word in "[a-z]{1,8}") {
            for prefix in ["-*", "*-"] {
                let tokens = parse_keywords(&format!("{}{}", prefix, word));
                prop_assert_eq!(tokens[0].kind, KeywordKind::OptionalExclude);
                prop_assert_eq!(&tokens[0].text, &word);
            }
        }

        #[test]
        fn one_token_per_word(words in prop::collection::vec("[-*]{0,2}[a-z]{1,6}", 0..8)) {
            let input = words.join("  ");
            let tokens = parse_keywords(&input);
            prop_assert_eq!(tokens.len(), words.len());
            prop_assert_eq!(parse_keywords(&render_keywords(&tokens)), tokens);
        }
    }
}
