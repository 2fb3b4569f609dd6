use super::*;
use crate::parser::ParseOutcome;

// ============================================================================
// Grammar
// ============================================================================

#[test]
fn test_phrase() {
    let outcome = phrase().parse("id/:uid", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.text, "id");
    assert_eq!(outcome.next_position, 2);
}

#[test]
fn test_phrase_requires_one_character() {
    assert_eq!(phrase().parse("/x", 0), ParseOutcome::failure(0));
    assert_eq!(phrase().parse("", 0), ParseOutcome::failure(0));
}

#[test]
fn test_phrase_alphabet() {
    assert_eq!(phrase().parse("v-a1_b.c~(x)*!'", 0).next_position, 15);
    // 'G' is part of the alphabet like every other ASCII letter
    assert_eq!(phrase().parse("GET", 0).text, "GET");
    assert_eq!(phrase().parse("a:b", 0).text, "a");
}

#[test]
fn test_static_segment() {
    let outcome = static_segment().parse("/foo/bar", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.text, "/foo");
    assert_eq!(outcome.next_position, 4);
    assert_eq!(outcome.attribute(TYPE_KEY), Some(STATIC_TYPE));
    assert_eq!(outcome.attribute(PHRASE_KEY), Some("foo"));
}

#[test]
fn test_static_segment_rejects_param() {
    assert!(!static_segment().parse("/:id", 0).matched);
}

#[test]
fn test_param_segment() {
    let outcome = param_segment().parse("/:id/:uid", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.text, "/:id");
    assert_eq!(outcome.next_position, 4);
    assert_eq!(outcome.attribute(TYPE_KEY), Some(PARAMS_TYPE));
    assert_eq!(outcome.attribute(PHRASE_KEY), Some("id"));
    assert_eq!(outcome.attribute("id"), Some(""));
}

#[test]
fn test_param_segment_named_type_keeps_description() {
    let outcome = param_segment().parse("/:type", 0);
    assert_eq!(outcome.attribute(TYPE_KEY), Some(PARAMS_TYPE));
    assert_eq!(outcome.attribute(PHRASE_KEY), Some("type"));
}

#[test]
fn test_template_segment_prefers_param() {
    let outcome = template_segment().parse("/:id", 0);
    assert_eq!(outcome.attribute(TYPE_KEY), Some(PARAMS_TYPE));

    let outcome = template_segment().parse("/id", 0);
    assert_eq!(outcome.attribute(TYPE_KEY), Some(STATIC_TYPE));
}

#[test]
fn test_param_value_segment() {
    let outcome = param_value_segment("id").parse("/123/456", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.text, "/123");
    assert_eq!(outcome.attribute("id"), Some("123"));
    assert_eq!(outcome.attributes.len(), 1);
}

// ============================================================================
// Compiler
// ============================================================================

#[test]
fn test_compile_extracts_params() {
    let outcome = compile("/api/v1/entries/:id/:query").parse("/api/v1/entries/123/hello", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.text, "/api/v1/entries/123/hello");
    assert_eq!(outcome.attribute("id"), Some("123"));
    assert_eq!(outcome.attribute("query"), Some("hello"));
    assert_eq!(outcome.attributes.len(), 2);
}

#[test]
fn test_compile_static_mismatch() {
    let parser = compile("/api/v1/entries/:id");
    assert_eq!(
        parser.parse("/api/v2/entries/123", 0),
        ParseOutcome::failure(0)
    );
}

#[test]
fn test_compile_missing_segment() {
    assert!(!compile("/a/:b/c").parse("/a/1", 0).matched);
    assert!(compile("/a/:b/c").parse("/a/1/c", 0).matched);
}

#[test]
fn test_compiled_static_literal_is_exact() {
    // "/api" is a literal, so "/apix" still matches its prefix
    let outcome = compile("/api").parse("/apix", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.next_position, 4);
}

#[test]
fn test_compile_truncates_at_unparsable_remainder() {
    let parser = compile("/a/:b/#rest");
    let outcome = parser.parse("/a/1/whatever", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.next_position, 4);
    assert_eq!(outcome.attribute("b"), Some("1"));
}

#[test]
fn test_compile_empty_template_matches_empty_prefix() {
    let outcome = compile("").parse("/anything", 0);
    assert!(outcome.matched);
    assert_eq!(outcome.next_position, 0);
}

#[test]
fn test_compile_duplicate_param_last_writer_wins() {
    let outcome = compile("/:id/x/:id").parse("/1/x/2", 0);
    assert_eq!(outcome.attribute("id"), Some("2"));
}

#[test]
fn test_compile_is_idempotent() {
    let template = "/api/v1/entries/:id/:name";
    let path = "/api/v1/entries/123/hoge";
    let first = compile(template).parse(path, 0);
    let second = compile(template).parse(path, 0);
    assert_eq!(first, second);
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_compile_strict_accepts_well_formed() {
    let parser = compile_strict("/users/:id/posts/:post_id").unwrap();
    let outcome = parser.parse("/users/7/posts/abc", 0);
    assert_eq!(outcome.attribute("id"), Some("7"));
    assert_eq!(outcome.attribute("post_id"), Some("abc"));
}

#[test]
fn test_compile_strict_rejects_remainder() {
    let err = compile_strict("/a/:b/#rest").unwrap_err();
    assert_eq!(
        err,
        TemplateError::UnparsedRemainder {
            template: "/a/:b/#rest".to_string(),
            position: 5,
        }
    );
    assert_eq!(
        err.to_string(),
        "route template '/a/:b/#rest' cannot be parsed from byte 5: '/#rest'"
    );
}

#[test]
fn test_compile_strict_rejects_trailing_slash_and_root() {
    assert!(matches!(
        compile_strict("/a/"),
        Err(TemplateError::UnparsedRemainder { position: 2, .. })
    ));
    assert!(matches!(
        compile_strict("/"),
        Err(TemplateError::UnparsedRemainder { position: 0, .. })
    ));
}

#[test]
fn test_compile_strict_rejects_empty() {
    assert_eq!(compile_strict("").unwrap_err(), TemplateError::Empty);
}

#[test]
fn test_compile_strict_rejects_duplicate_param() {
    let err = compile_strict("/:id/x/:id").unwrap_err();
    assert_eq!(
        err,
        TemplateError::DuplicateParameter {
            template: "/:id/x/:id".to_string(),
            name: "id".to_string(),
        }
    );
}

#[test]
fn test_compiled_route_param_names() {
    let route = CompiledRoute::new("/a/:x/b/:y", false).unwrap();
    assert_eq!(route.template(), "/a/:x/b/:y");
    assert_eq!(route.param_names(), ["x".to_string(), "y".to_string()]);
    assert_eq!(route.parser().label(), "route(/a/:x/b/:y)");
    assert_eq!(route.parse("/a/1/b/2").attribute("y"), Some("2"));
}

#[test]
fn test_compiled_route_lenient_never_fails() {
    assert!(CompiledRoute::new("not a template", false).is_ok());
    assert!(CompiledRoute::new("not a template", true).is_err());
}
