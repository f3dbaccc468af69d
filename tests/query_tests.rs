#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Query scanning and editing tests
use fast_uri::{Field, QueryScanner, Token, Uri, UriBase};

fn parse(input: &str) -> Uri {
    Uri::parse(input).unwrap()
}

#[test]
fn test_query_get_repeated_keys() {
    let uri = parse("http://h/?a=1&a=2&b=3");
    assert_eq!(uri.query_get("a"), ["1", "2"]);
    assert_eq!(uri.query_get("b"), ["3"]);
    assert!(uri.query_get("c").is_empty());
}

#[test]
fn test_query_get_decodes() {
    let uri = parse("http://h/?q=a+b&name=caf%C3%A9&k%20ey=v&amp=%26");
    assert_eq!(uri.query_get("q"), ["a b"]);
    assert_eq!(uri.query_get("name"), ["caf\u{e9}"]);
    assert_eq!(uri.query_get("k ey"), ["v"]);
    assert_eq!(uri.query_get("amp"), ["&"]);
}

#[test]
fn test_semicolon_separator() {
    let uri = parse("http://h/?a=1;b=2&c=3");
    assert_eq!(uri.query_get("b"), ["2"]);
    assert_eq!(uri.query_keys().len(), 3);
}

#[test]
fn test_query_keys() {
    let uri = parse("http://h/?z=1&flag&a=2&z=3&&=x");
    let keys: Vec<String> = uri.query_keys().into_iter().collect();
    assert_eq!(keys, ["a", "flag", "z"]);
    assert!(parse("http://h/").query_keys().is_empty());
}

#[test]
fn test_query_hash() {
    let uri = parse("http://h/?a=1&b&a=2&c=");
    let hash = uri.query_hash();
    assert_eq!(hash.len(), 3);
    assert_eq!(hash["a"], ["1", "2"]);
    assert!(hash["b"].is_empty());
    assert_eq!(hash["c"], [""]);
}

#[test]
fn test_query_set_replaces_all_values() {
    let mut uri = parse("http://h/?a=1&b=2&a=3");
    uri.query_set("a", ["x", "y"]).unwrap();
    assert_eq!(uri.query(), "b=2&a=x&a=y");
    assert_eq!(uri.query_get("a"), ["x", "y"]);
}

#[test]
fn test_query_set_adds_missing_key() {
    let mut uri = parse("http://h/");
    uri.query_set("q", ["rust lang"]).unwrap();
    assert_eq!(uri.to_string(), "http://h/?q=rust%20lang");
}

#[test]
fn test_query_set_encodes_separators() {
    let mut uri = parse("http://h/?x=1");
    uri.query_set("k&=", ["a&b=c#d"]).unwrap();
    assert_eq!(uri.query(), "x=1&k%26%3D=a%26b%3Dc%23d");
    assert_eq!(uri.query_get("k&="), ["a&b=c#d"]);
}

#[test]
fn test_query_set_plus_round_trips() {
    let mut uri = parse("http://h/");
    uri.query_set("sum", ["1+1"]).unwrap();
    assert_eq!(uri.query(), "sum=1%2B1");
    assert_eq!(uri.query_get("sum"), ["1+1"]);
}

#[test]
fn test_query_set_empty_removes() {
    let mut uri = parse("http://h/?a=1&b=2");
    uri.query_set("a", Vec::<String>::new()).unwrap();
    assert_eq!(uri.query(), "b=2");
    uri.query_set("b", Vec::<String>::new()).unwrap();
    assert_eq!(uri.query(), "");
    assert_eq!(uri.to_string(), "http://h/");
}

#[test]
fn test_query_set_matches_decoded_keys() {
    let mut uri = parse("http://h/?my%20key=1&other=2");
    uri.query_set("my key", ["3"]).unwrap();
    assert_eq!(uri.query(), "other=2&my%20key=3");
}

#[test]
fn test_set_param_separator() {
    let mut uri = parse("http://h/?a=1&b=2");
    uri.set_param("c", ["3"], ';').unwrap();
    assert_eq!(uri.query(), "a=1;b=2;c=3");
}

#[test]
fn test_update_query_keyset() {
    let mut uri = parse("http://h/?a=1&b=2&c=3");
    uri.update_query_keyset([("a", false), ("d", true)], '&').unwrap();
    assert_eq!(uri.query(), "b=2&c=3&d");
}

#[test]
fn test_update_query_keyset_keeps_listed_true() {
    let mut uri = parse("http://h/?a=1&b=2&a=3");
    uri.update_query_keyset([("a", true), ("b", false)], '&').unwrap();
    assert_eq!(uri.query(), "a=1&a=3");
}

#[test]
fn test_update_query_keyset_last_flag_wins() {
    let mut uri = parse("http://h/?a=1");
    uri.update_query_keyset([("a", true), ("a", false), ("x", false), ("x", true)], '&')
        .unwrap();
    assert_eq!(uri.query(), "x");
}

#[test]
fn test_update_query_keyset_appends_in_order() {
    let mut uri = parse("http://h/");
    let keys = vec![("z".to_string(), true), ("a b".to_string(), true)];
    uri.update_query_keyset(keys, '&').unwrap();
    assert_eq!(uri.query(), "z&a%20b");
    assert_eq!(uri.query_keys().len(), 2);
}

#[test]
fn test_update_query_keyset_drops_empty_keys() {
    let mut uri = parse("http://h/?&&a=1&=orphan");
    uri.update_query_keyset(Vec::<(&str, bool)>::new(), '&').unwrap();
    assert_eq!(uri.query(), "a=1");
}

#[test]
fn test_scanner_over_stored_query() {
    let uri = parse("http://h/?a=1&flag");
    let tokens: Vec<Token<'_>> = QueryScanner::new(uri.raw(Field::Query)).collect();
    assert_eq!(tokens, [Token::Param { key: "a", value: "1" }, Token::Key("flag")]);
}
