//! Classification of hook scripts.
//!
//! npm runs `pre<name>`/`post<name>` scripts around `<name>` and runs a fixed
//! set of lifecycle scripts on its own, so these are hidden from the list
//! unless the user asks for them.

/// Lifecycle script names npm runs automatically.
pub const LIFECYCLE_SCRIPTS: [&str; 6] = [
    "install",
    "prepare",
    "publish",
    "version",
    "dependencies",
    "shrinkwrap",
];

const HOOK_PREFIXES: [&str; 2] = ["pre", "post"];

/// Returns true if `name` is a lifecycle script or a `pre`/`post` hook.
///
/// Matching is case-sensitive and the bare prefixes `pre` and `post` are not
/// hooks, since nothing follows them.
#[must_use]
pub fn is_hook(name: &str) -> bool {
    if LIFECYCLE_SCRIPTS.contains(&name) {
        return true;
    }

    HOOK_PREFIXES
        .iter()
        .any(|prefix| name.strip_prefix(prefix).is_some_and(|rest| !rest.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_and_post_hooks() {
        for name in ["prebuild", "pretest", "preinstall", "postbuild", "posttest", "postinstall"] {
            assert!(is_hook(name), "{name} should be a hook");
        }
    }

    #[test]
    fn test_lifecycle_scripts() {
        for name in LIFECYCLE_SCRIPTS {
            assert!(is_hook(name), "{name} should be a hook");
        }
    }

    #[test]
    fn test_regular_scripts() {
        for name in ["build", "test", "start", "lint", "dev", "clean", "deploy", "lint:fix"] {
            assert!(!is_hook(name), "{name} should not be a hook");
        }
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert!(!is_hook("compress"));
        assert!(!is_hook("represent"));
        assert!(is_hook("postpone"));
        assert!(is_hook("preanything"));
    }

    #[test]
    fn test_edge_cases() {
        for name in ["", "pre", "post", "p", "pr", "po", "PreBuild", "PostTest", "INSTALL"] {
            assert!(!is_hook(name), "{name} should not be a hook");
        }
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pre_prefixed_names_are_hooks(rest in "[a-zA-Z0-9:_.-]{1,20}") {
                let name = format!("pre{rest}");
                prop_assert!(is_hook(&name));
            }

            #[test]
            fn post_prefixed_names_are_hooks(rest in "[a-zA-Z0-9:_.-]{1,20}") {
                let name = format!("post{rest}");
                prop_assert!(is_hook(&name));
            }

            #[test]
            fn uppercase_prefixes_are_not_hooks(rest in "[a-z]{1,12}") {
                let pre = format!("Pre{rest}");
                let post = format!("POST{rest}");
                prop_assert!(!is_hook(&pre));
                prop_assert!(!is_hook(&post));
            }

            #[test]
            fn classification_partitions_names(
                names in proptest::collection::vec("[a-z:]{0,10}", 0..20),
            ) {
                let (hooks, regular): (Vec<&String>, Vec<&String>) =
                    names.iter().partition(|name| is_hook(name));
                prop_assert_eq!(hooks.len() + regular.len(), names.len());
                prop_assert!(hooks.iter().all(|name| is_hook(name)));
                prop_assert!(regular.iter().all(|name| !is_hook(name)));
            }
        }
    }
}
