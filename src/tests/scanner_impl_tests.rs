use crate::scanner::*;

fn categories(source: &str) -> Vec<TokenType> {
    tokenize(source).iter().map(|t| t.ty).collect()
}

fn values(source: &str) -> Vec<String> {
    tokenize(source).into_iter().map(|t| t.text).collect()
}

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn test_scan_empty() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_lossless_partition() {
    // Concatenating token texts reproduces the input exactly. JSX children
    // text is the one documented exception (whitespace collapsing), so
    // these samples stay outside JSX children.
    let samples = [
        "const x = 'a\\'b' + `t${1 + 2}s`;",
        "// line\n/* block */ /re/gi + x / 2",
        "let 你好 = 1.5;\r\nfoo.bar(你好)",
        "a < b; () => ({});",
        "`unterminated ${ template",
        "'unterminated string",
        "/* unterminated comment",
    ];
    for source in samples {
        let tokens = tokenize(source);
        assert_eq!(concat(&tokens), source, "lossless failed for {source:?}");
    }
}

#[test]
fn test_closed_category_set() {
    let source = "const x = <div a={1}>t {`${/re/}`}</div>; // done";
    for token in tokenize(source) {
        let id = token.ty.id() as usize;
        assert!(id < TOKEN_TYPE_NAMES.len());
        assert_eq!(token.ty.name(), TOKEN_TYPE_NAMES[id]);
    }
}

#[test]
fn test_round_trip_idempotence() {
    let source = "const v = /a[/]b/g + `x${<p>hi</p>}`";
    let first = tokenize(source);
    // Interleave a call on a different input; no state may leak across
    // invocations.
    let _ = tokenize("another(input) / 2");
    let second = tokenize(source);
    assert_eq!(first, second);
}

#[test]
fn test_division_vs_regex() {
    assert_eq!(
        categories("123 - /555/ + 444;"),
        vec![
            TokenType::Class,
            TokenType::Space,
            TokenType::Sign,
            TokenType::Space,
            TokenType::Str,
            TokenType::Space,
            TokenType::Sign,
            TokenType::Space,
            TokenType::Class,
            TokenType::Sign,
        ]
    );
    assert_eq!(
        values("123 - /555/ + 444;"),
        vec!["123", " ", "-", " ", "/555/", " ", "+", " ", "444", ";"]
    );
}

#[test]
fn test_division_after_call_expression() {
    // The first /reg/ is a regex literal; the slash on the next line
    // follows a closing `()` and divides, producing three plain tokens.
    let tokens = tokenize("/reg/.test('str')()\n/reg/.test('str')");
    assert_eq!(tokens[0], Token::new(TokenType::Str, "/reg/"));
    let after_break: Vec<_> = tokens
        .iter()
        .skip_while(|t| t.ty != TokenType::Break)
        .skip(1)
        .take(3)
        .cloned()
        .collect();
    assert_eq!(
        after_break,
        vec![
            Token::new(TokenType::Sign, "/"),
            Token::new(TokenType::Identifier, "reg"),
            Token::new(TokenType::Sign, "/"),
        ]
    );
}

#[test]
fn test_division_after_bracket() {
    assert_eq!(
        values("arr[0] / 2"),
        vec!["arr", "[", "0", "]", " ", "/", " ", "2"]
    );
    assert_eq!(
        categories("arr[0] / 2"),
        vec![
            TokenType::Identifier,
            TokenType::Sign,
            TokenType::Class,
            TokenType::Sign,
            TokenType::Space,
            TokenType::Sign,
            TokenType::Space,
            TokenType::Class,
        ]
    );
}

#[test]
fn test_division_after_interpolation_close() {
    // The `}` closing an interpolation ends an expression, so a following
    // slash divides; a block `}` does not.
    let tokens = tokenize("`${a}`/2");
    let slash = tokens.iter().find(|t| t.text == "/").expect("slash token");
    assert_eq!(slash.ty, TokenType::Sign);

    let tokens = tokenize("if (x) {}\n/re/.test(s)");
    let regex = tokens.iter().find(|t| t.text.starts_with("/re")).expect("regex token");
    assert_eq!(regex.ty, TokenType::Str);
    assert_eq!(regex.text, "/re/");
}

#[test]
fn test_keyword_vs_member_name() {
    let tokens = tokenize("promise.catch(log)");
    assert_eq!(tokens[2], Token::new(TokenType::Identifier, "catch"));
    // The same word is a keyword when it is not a member name.
    let tokens = tokenize("try {} catch (e) {}");
    let catch = tokens.iter().find(|t| t.text == "catch").expect("catch token");
    assert_eq!(catch.ty, TokenType::Keyword);
}

#[test]
fn test_jsx_text_segmentation() {
    let tokens = tokenize("<Foo>This is content</Foo>");
    assert_eq!(
        tokens.iter().map(|t| t.ty).collect::<Vec<_>>(),
        vec![
            TokenType::Sign,
            TokenType::Identifier,
            TokenType::Sign,
            TokenType::JsxLiterals,
            TokenType::Sign,
            TokenType::Identifier,
            TokenType::Sign,
        ]
    );
    assert_eq!(tokens[3].text, "This is content");
}

#[test]
fn test_template_nesting() {
    let tokens = tokenize("`a ${ c + `text` } b`");
    let expected = vec![
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Str, "a "),
        Token::new(TokenType::Sign, "${"),
        Token::new(TokenType::Space, " "),
        Token::new(TokenType::Identifier, "c"),
        Token::new(TokenType::Space, " "),
        Token::new(TokenType::Sign, "+"),
        Token::new(TokenType::Space, " "),
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Str, "text"),
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Space, " "),
        Token::new(TokenType::Sign, "}"),
        Token::new(TokenType::Str, " b"),
        Token::new(TokenType::Str, "`"),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn test_template_jsx_template_composition() {
    // Template -> interpolation -> JSX -> expression -> nested template,
    // then all the way back out. Exercises unbounded stack nesting.
    let tokens = tokenize("`${<div>{`x`}</div>}`");
    let expected = vec![
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Sign, "${"),
        Token::new(TokenType::Sign, "<"),
        Token::new(TokenType::Identifier, "div"),
        Token::new(TokenType::Sign, ">"),
        Token::new(TokenType::Sign, "{"),
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Str, "x"),
        Token::new(TokenType::Str, "`"),
        Token::new(TokenType::Sign, "}"),
        Token::new(TokenType::Sign, "</"),
        Token::new(TokenType::Identifier, "div"),
        Token::new(TokenType::Sign, ">"),
        Token::new(TokenType::Sign, "}"),
        Token::new(TokenType::Str, "`"),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn test_class_bucket_overload() {
    assert_eq!(categories("123"), vec![TokenType::Class]);
    assert_eq!(categories("Array"), vec![TokenType::Class]);
    assert_eq!(categories("Date"), vec![TokenType::Class]);
    assert_eq!(categories("_private"), vec![TokenType::Class]);
    assert_eq!(categories("foo"), vec![TokenType::Identifier]);
    assert_eq!(categories("3.14"), vec![TokenType::Class]);
}

#[test]
fn test_newline_aborts_regex_scan() {
    // No closing slash before the line break: the slash is division.
    let tokens = tokenize("- /a\nb/");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Sign, "-"),
            Token::new(TokenType::Space, " "),
            Token::new(TokenType::Sign, "/"),
            Token::new(TokenType::Identifier, "a"),
            Token::new(TokenType::Break, "\n"),
            Token::new(TokenType::Identifier, "b"),
            Token::new(TokenType::Sign, "/"),
        ]
    );
}

#[test]
fn test_regex_character_class_and_flags() {
    assert_eq!(values("/a[/]b/gi"), vec!["/a[/]b/gi"]);
    assert_eq!(categories("/a[/]b/gi"), vec![TokenType::Str]);
}

#[test]
fn test_break_vs_space() {
    assert_eq!(
        tokenize("a \t b"),
        vec![
            Token::new(TokenType::Identifier, "a"),
            Token::new(TokenType::Space, " \t "),
            Token::new(TokenType::Identifier, "b"),
        ]
    );
    assert_eq!(
        tokenize("x\r\ny"),
        vec![
            Token::new(TokenType::Identifier, "x"),
            Token::new(TokenType::Break, "\r\n"),
            Token::new(TokenType::Identifier, "y"),
        ]
    );
}

#[test]
fn test_jsx_children_placeholders_and_gaps() {
    // Whitespace after an opening tag is children content (placeholders per
    // line); whitespace straight before the closing tag is a structural
    // break.
    let tokens = tokenize("<div>\n  <p>Text</p>\n</div>");
    let expected = vec![
        Token::new(TokenType::Sign, "<"),
        Token::new(TokenType::Identifier, "div"),
        Token::new(TokenType::Sign, ">"),
        Token::new(TokenType::JsxLiterals, ""),
        Token::new(TokenType::JsxLiterals, ""),
        Token::new(TokenType::Sign, "<"),
        Token::new(TokenType::Identifier, "p"),
        Token::new(TokenType::Sign, ">"),
        Token::new(TokenType::JsxLiterals, "Text"),
        Token::new(TokenType::Sign, "</"),
        Token::new(TokenType::Identifier, "p"),
        Token::new(TokenType::Sign, ">"),
        Token::new(TokenType::Break, "\n"),
        Token::new(TokenType::Sign, "</"),
        Token::new(TokenType::Identifier, "div"),
        Token::new(TokenType::Sign, ">"),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn test_jsx_fragment_has_no_children_context() {
    let tokens = tokenize("<>\n<Foo/>\n</>");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Sign, "<"),
            Token::new(TokenType::Sign, ">"),
            Token::new(TokenType::Break, "\n"),
            Token::new(TokenType::Sign, "<"),
            Token::new(TokenType::Identifier, "Foo"),
            Token::new(TokenType::Sign, "/>"),
            Token::new(TokenType::Break, "\n"),
            Token::new(TokenType::Sign, "</"),
            Token::new(TokenType::Sign, ">"),
        ]
    );
}

#[test]
fn test_relational_less_than_is_a_sign() {
    assert_eq!(
        tokenize("a < b"),
        vec![
            Token::new(TokenType::Identifier, "a"),
            Token::new(TokenType::Space, " "),
            Token::new(TokenType::Sign, "<"),
            Token::new(TokenType::Space, " "),
            Token::new(TokenType::Identifier, "b"),
        ]
    );
    // After `)` the `<` compares as well.
    let tokens = tokenize("f() <div>");
    let less = tokens.iter().find(|t| t.text == "<").expect("less-than");
    assert_eq!(less.ty, TokenType::Sign);
    assert!(!tokens.iter().any(|t| t.ty == TokenType::JsxLiterals));
}

#[test]
fn test_unterminated_constructs_never_fail() {
    // Best-effort termination at end of input, no panic, nothing dropped.
    let cases = [
        "'abc",
        "\"abc",
        "`abc",
        "`abc ${ x",
        "/* no close",
        "<div",
        "<div>text",
        "/abc",
    ];
    for source in cases {
        let tokens = tokenize(source);
        assert!(!tokens.is_empty(), "no tokens for {source:?}");
    }
    assert_eq!(
        tokenize("'abc"),
        vec![
            Token::new(TokenType::Str, "'"),
            Token::new(TokenType::Str, "abc"),
        ]
    );
    assert_eq!(
        tokenize("/* no close"),
        vec![Token::new(TokenType::Comment, "/* no close")]
    );
    assert_eq!(
        tokenize("/abc"),
        vec![Token::new(TokenType::Str, "/abc")]
    );
}

#[test]
fn test_token_type_contract() {
    assert_eq!(
        TOKEN_TYPE_NAMES,
        [
            "keyword",
            "identifier",
            "class",
            "sign",
            "string",
            "comment",
            "jsxliterals",
            "break",
            "space",
        ]
    );
    assert_eq!(TokenType::Keyword.id(), 0);
    assert_eq!(TokenType::Identifier.id(), 1);
    assert_eq!(TokenType::Class.id(), 2);
    assert_eq!(TokenType::Sign.id(), 3);
    assert_eq!(TokenType::Str.id(), 4);
    assert_eq!(TokenType::Comment.id(), 5);
    assert_eq!(TokenType::JsxLiterals.id(), 6);
    assert_eq!(TokenType::Break.id(), 7);
    assert_eq!(TokenType::Space.id(), 8);
    assert_eq!(TokenType::Str.name(), "string");
}
