//! Property-based tests for environment expansion and path combination.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::directive::PendMode;
    use crate::environment::Environment;
    use crate::platform::Platforms;
    use crate::script::ScriptBuffer;
    use proptest::prelude::*;

    // ============================================================================
    // expand_placeholders property tests
    // ============================================================================

    proptest! {
        /// Property: text without `%` is never changed
        #[test]
        fn expand_without_percent_is_identity(input in "[^%]*") {
            let env = Environment::from_pairs([("HOME", "/home/x")]);
            prop_assert_eq!(env.expand_placeholders(&input), input);
        }

        /// Property: with an empty environment every placeholder stays literal
        #[test]
        fn expand_with_empty_env_is_identity(input in ".*") {
            let env = Environment::default();
            prop_assert_eq!(env.expand_placeholders(&input), input);
        }

        /// Property: a known placeholder is replaced by its value
        #[test]
        fn expand_known_placeholder(name in "[A-Z_]{1,12}", value in "[a-z0-9/]*") {
            let env = Environment::from_pairs([(name.clone(), value.clone())]);
            let text = format!("lib/%{}%", name);
            prop_assert_eq!(env.expand_placeholders(&text), format!("lib/{}", value));
        }

        /// Property: path lists never contain empty items
        #[test]
        fn path_list_has_no_empty_items(raw in "[a-z:]*") {
            let env = Environment::from_pairs([("LIST", raw)]);
            for item in env.path_list("LIST") {
                prop_assert!(!item.is_empty());
                prop_assert!(!item.contains(':'));
            }
        }
    }

    // ============================================================================
    // platform parsing property tests
    // ============================================================================

    proptest! {
        /// Property: parsed platforms are never empty and never hold whitespace
        #[test]
        fn platforms_have_no_blank_tokens(text in "[a-z0-9 \t\n-]*") {
            let platforms = Platforms::parse(&text);
            for platform in platforms.best_to_worst() {
                prop_assert!(!platform.is_empty());
                prop_assert!(!platform.contains(char::is_whitespace));
            }
        }

        /// Property: worst_to_best is best_to_worst reversed
        #[test]
        fn platform_orders_are_mirrored(names in prop::collection::vec("[a-z]{1,8}", 0..6)) {
            let platforms = Platforms::new(names.clone());
            let mut reversed: Vec<&str> = platforms.best_to_worst().collect();
            reversed.reverse();
            prop_assert_eq!(platforms.worst_to_best().collect::<Vec<_>>(), reversed);
        }
    }

    // ============================================================================
    // pend mode and buffer property tests
    // ============================================================================

    proptest! {
        /// Property: substituting a prior value into the combined form puts
        /// the new directories on the expected side
        #[test]
        fn combine_places_new_dirs(new in "/[a-z]{1,8}(:/[a-z]{1,8}){0,3}", prior in "/[a-z]{1,8}") {
            let prepended = PendMode::Prepend.combine("PATH", &new).replace("${PATH}", &prior);
            let appended = PendMode::Append.combine("PATH", &new).replace("${PATH}", &prior);
            prop_assert_eq!(prepended, format!("{}:{}", new, prior));
            prop_assert_eq!(appended, format!("{}:{}", prior, new));
        }

        /// Property: hoisting never loses or duplicates segments
        #[test]
        fn hoist_tail_is_a_rotation(segments in prop::collection::vec("[a-z]{1,4}", 0..10), n in 0usize..12) {
            let mut buf = ScriptBuffer::new();
            for s in &segments {
                buf.push(s.clone());
            }
            buf.hoist_tail(n);

            let k = n.min(segments.len());
            let mut expected = segments[segments.len() - k..].to_vec();
            expected.extend_from_slice(&segments[..segments.len() - k]);
            prop_assert_eq!(buf.segments(), expected.as_slice());
        }
    }
}
