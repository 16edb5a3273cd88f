use ere_reader::{CorpusConfig, Error, strip::strip_markup};

fn empty_config() -> CorpusConfig {
    CorpusConfig {
        retain_tags: Default::default(),
        retain_attributes: Default::default(),
        ..CorpusConfig::default()
    }
}

#[test]
fn strips_every_tag() {
    let out = strip_markup("<doc><p>Hello</p></doc>", &empty_config()).unwrap();
    assert_eq!(out.trim(), "Hello");
    assert!(!out.contains('<') && !out.contains('>'));
}

#[test]
fn output_length_matches_input() {
    let input = "<doc><p>Hello</p></doc>";
    let out = strip_markup(input, &empty_config()).unwrap();
    assert_eq!(out.len(), input.len());
    // text content stays at its original offset
    assert_eq!(out.find("Hello"), input.find("Hello"));
}

#[test]
fn retains_whitelisted_attribute_values_in_place() {
    let input = r#"<post author="alice">Hi there</post>"#;
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert_eq!(out.find("alice"), input.find("alice"));
    assert_eq!(out.find("Hi there"), input.find("Hi there"));
    assert!(out.find("alice").unwrap() < out.find("Hi there").unwrap());
}

#[test]
fn drops_attributes_outside_the_whitelist() {
    let input = r#"<post author="alice" id="99">text</post>"#;
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert!(!out.contains("99"));
    assert!(out.contains("alice"));
    assert!(out.contains("text"));
}

#[test]
fn retained_attributes_only_apply_to_retained_tags() {
    let input = r#"<div author="bob">x</div>"#;
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert!(!out.contains("bob"));
    assert!(out.contains('x'));
}

#[test]
fn quote_orig_author_is_retained_by_default() {
    let input = r#"<quote orig_author="carol">said so</quote>"#;
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert_eq!(out.find("carol"), input.find("carol"));
    assert!(out.contains("said so"));
}

#[test]
fn plain_text_is_unchanged() {
    let input = "Just plain text.\nNo markup at all.";
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert_eq!(out, input);
}

#[test]
fn stripping_is_idempotent() {
    let input = r#"<post author="alice">Hi there</post>"#;
    let once = strip_markup(input, &CorpusConfig::default()).unwrap();
    let twice = strip_markup(&once, &CorpusConfig::default()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn entity_references_stay_as_written() {
    let input = "<doc>a &amp; b</doc>";
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert_eq!(out.find("a &amp; b"), input.find("a &amp; b"));
    assert!(!out.contains("a & b"));
}

#[test]
fn cdata_payload_is_kept_without_delimiters() {
    let input = "<doc><![CDATA[x < y]]></doc>";
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert_eq!(out.trim(), "x < y");
    assert!(!out.contains("CDATA"));
}

#[test]
fn comments_and_pis_are_blanked() {
    let input = "<doc><!-- hidden --><?pi data?>text</doc>";
    let out = strip_markup(input, &CorpusConfig::default()).unwrap();
    assert!(!out.contains("hidden"));
    assert!(!out.contains("data"));
    assert_eq!(out.find("text"), input.find("text"));
}

#[test]
fn unclosed_tag_emits_the_parseable_prefix() {
    let out = strip_markup("hello <world", &CorpusConfig::default()).unwrap();
    assert_eq!(out, "hello ");
}

#[test]
fn unparseable_input_is_a_markup_error() {
    let err = strip_markup("<", &CorpusConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Markup { .. }), "{err}");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(strip_markup("", &CorpusConfig::default()).unwrap(), "");
}
