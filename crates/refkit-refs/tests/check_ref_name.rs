use proptest::prelude::*;
use refkit_refs::{
    CheckerConfig, RefNameChecker, RefNameError, ReferenceName, Rule, RuleActionSet, RuleMode,
    StructuralOptions,
};

fn relaxed() -> StructuralOptions {
    StructuralOptions::default()
        .with_allow_one_level(true)
        .with_normalize(true)
}

fn run(
    name: &str,
    options: StructuralOptions,
    actions: RuleActionSet,
) -> (Result<(), RefNameError>, String) {
    let mut checker = RefNameChecker::new(name, options, actions);
    let result = checker.check_ref_name();
    (result, checker.as_str().to_owned())
}

#[test]
fn clean_name_passes_every_rule() {
    let (result, name) = run(
        "refs/heads/main",
        StructuralOptions::default(),
        RuleActionSet::validate_all(),
    );
    assert_eq!(result, Ok(()));
    assert_eq!(name, "refs/heads/main");
}

#[test]
fn earlier_rule_error_wins() {
    let actions = RuleActionSet::default()
        .with(Rule::LeadingDot, RuleMode::Validate)
        .with(Rule::TrailingLock, RuleMode::Validate);
    let (result, _) = run(".a/name.lock", StructuralOptions::default(), actions);
    assert_eq!(result, Err(RefNameError::LeadingDot));
}

#[test]
fn one_level_names() {
    let actions = RuleActionSet::default().with(Rule::AtLeastOneForwardSlash, RuleMode::Validate);
    let strict = StructuralOptions::default();
    let one_level = strict.with_allow_one_level(true);

    assert_eq!(
        run("aname", strict, actions).0,
        Err(RefNameError::AtLeastOneForwardSlash)
    );
    assert_eq!(run("aname", one_level, actions).0, Ok(()));
    assert_eq!(run("a/name", strict, actions).0, Ok(()));
    assert_eq!(run("a/name", one_level, actions).0, Ok(()));
}

#[test]
fn normalize_collapses_slash_runs() {
    let actions =
        RuleActionSet::default().with(Rule::ConsecutiveForwardSlashes, RuleMode::Sanitize);
    let options = StructuralOptions::default().with_normalize(true);

    assert_eq!(run("a//name", options, actions), (Ok(()), "a/name".to_owned()));
    assert_eq!(
        run("a///longer///name", options, actions),
        (Ok(()), "a/longer/name".to_owned())
    );
}

#[test]
fn consecutive_slashes_validate() {
    let actions =
        RuleActionSet::default().with(Rule::ConsecutiveForwardSlashes, RuleMode::Validate);
    let options = StructuralOptions::default();
    for (name, ok) in [
        ("a//name", false),
        ("a/name", true),
        ("a///longer///name", false),
        ("a/longer/name", true),
    ] {
        let expected = if ok {
            Ok(())
        } else {
            Err(RefNameError::ConsecutiveForwardSlashes)
        };
        assert_eq!(run(name, options, actions).0, expected, "{name}");
    }
}

#[test]
fn excluded_characters_validate() {
    let actions = RuleActionSet::default().with(Rule::ExcludedCharacters, RuleMode::Validate);
    assert_eq!(
        run("an^ame", StructuralOptions::default(), actions).0,
        Err(RefNameError::ExcludedCharacters)
    );
    assert_eq!(run("aname", StructuralOptions::default(), actions).0, Ok(()));
}

#[test]
fn refspec_pattern_accepts_interior_wildcard() {
    let config = CheckerConfig::refspec_pattern();
    assert_eq!(
        config.checker("refs/heads/feature*/work").check_ref_name(),
        Ok(())
    );
    assert_eq!(
        config.checker("refs/heads/*").check_ref_name(),
        Err(RefNameError::ExcludedCharacters)
    );
    assert_eq!(
        config.checker("refs/*/heads/*").check_ref_name(),
        Err(RefNameError::ExcludedCharacters)
    );
    assert_eq!(
        CheckerConfig::strict().checker("refs/heads/feature*/work").check_ref_name(),
        Err(RefNameError::ExcludedCharacters)
    );
}

#[test]
fn sanitize_everything_at_once() {
    let name = ReferenceName::new("./refs//heads/ma~in..@{1}.lock")
        .check(&CheckerConfig::sanitizing())
        .unwrap();
    assert_eq!(name.as_str(), "refs/heads/main1}");
}

#[test]
fn builders_produce_valid_names() {
    let config = CheckerConfig::strict();
    for name in [
        ReferenceName::branch("feature/auth"),
        ReferenceName::tag("v1.0.0"),
        ReferenceName::note("commits"),
        ReferenceName::remote("origin", "main"),
        ReferenceName::remote_head("origin"),
    ] {
        let checked = name.clone().check(&config).unwrap();
        assert_eq!(checked, name);
    }
}

#[test]
fn head_needs_one_level() {
    assert_eq!(
        ReferenceName::head().check(&CheckerConfig::strict()),
        Err(RefNameError::AtLeastOneForwardSlash)
    );
    let one_level = CheckerConfig::new(
        StructuralOptions::default().with_allow_one_level(true),
        RuleActionSet::validate_all(),
    );
    assert_eq!(
        ReferenceName::head().check(&one_level),
        Ok(ReferenceName::head())
    );
}

const NAME_CHARS: &str = "[a-z./@{~^:?* \\t\\[-]{0,24}";

/// Names built only from lowercase path components, which pass every rule.
const CLEAN_NAMES: &str = "[a-z]{1,8}(/[a-z]{1,8}){0,3}";

proptest! {
    #[test]
    fn clean_names_are_left_alone(name in CLEAN_NAMES) {
        let (validated, _) = run(&name, relaxed(), RuleActionSet::validate_all());
        prop_assert_eq!(validated, Ok(()));

        let (sanitized, rewritten) = run(&name, relaxed(), RuleActionSet::sanitize_all());
        prop_assert_eq!(sanitized, Ok(()));
        prop_assert_eq!(rewritten, name);
    }

    #[test]
    fn relaxed_sanitize_never_fails(name in NAME_CHARS) {
        let (result, rewritten) = run(&name, relaxed(), RuleActionSet::sanitize_all());
        prop_assert_eq!(result, Ok(()));
        prop_assert!(rewritten.len() <= name.len());
    }

    #[test]
    fn repeated_sanitize_reaches_valid_fixed_point(name in NAME_CHARS) {
        let mut current = name.clone();
        let mut passes = 0;
        loop {
            let (_, next) = run(&current, relaxed(), RuleActionSet::sanitize_all());
            passes += 1;
            if next == current {
                break;
            }
            prop_assert!(next.len() < current.len());
            current = next;
        }
        prop_assert!(passes <= name.len() + 1);

        let (validated, _) = run(&current, relaxed(), RuleActionSet::validate_all());
        prop_assert_eq!(validated, Ok(()));
    }
}
