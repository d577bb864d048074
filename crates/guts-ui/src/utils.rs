/// Join class-name fragments into a single class string.
///
/// Fragments are kept in order, `None` and blank fragments are skipped and
/// whitespace is collapsed. A repeated token keeps only its last
/// occurrence, so later fragments stay intact at the end of the string.
pub fn cn<'a, I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a str>>,
{
    let mut tokens: Vec<&'a str> = Vec::new();
    for fragment in fragments {
        let fragment: Option<&'a str> = fragment.into();
        let Some(fragment) = fragment else {
            continue;
        };
        tokens.extend(fragment.split_whitespace());
    }
    tokens
        .iter()
        .enumerate()
        .filter(|&(i, token)| !tokens[i + 1..].contains(token))
        .map(|(_, token)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn joins_in_order() {
        assert_eq!(cn(["a b", "c"]), "a b c");
    }

    #[test]
    fn skips_missing_and_blank_fragments() {
        assert_eq!(cn([Some("a"), None, Some("  "), Some("b")]), "a b");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(cn(["  a\n  b  "]), "a b");
    }

    #[test]
    fn repeated_tokens_keep_last_position() {
        assert_eq!(cn(["a b", "b c", "a"]), "b c a");
    }

    #[test]
    fn trailing_fragment_survives_overlap() {
        assert_eq!(cn(["p-2 m-1", "m-1 p-4"]), "p-2 m-1 p-4");
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(cn(Vec::<&str>::new()), "");
    }
}
