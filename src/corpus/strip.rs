use std::borrow::Cow;
use std::collections::BTreeSet;
use std::ops::Range;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::config::CorpusConfig;
use crate::error::{Error, Result};

/// Strips all XML markup from `original` while preserving character offsets.
///
/// Rendering is deterministic: every markup character becomes a single
/// space, so the output has exactly the same character count as the input
/// and every retained character sits at its original offset. Text content
/// (including CDATA payloads) is kept verbatim in place, and for tags in
/// `retain_tags` the values of attributes in `retain_attributes` are kept
/// in place as well. Entity references in text are left as written.
///
/// Malformed input is handled best-effort: a parse failure after some
/// prefix has been consumed truncates the output to that prefix, while
/// input that cannot be parsed at all fails with [`Error::Markup`].
pub fn strip_markup(original: &str, config: &CorpusConfig) -> Result<String> {
    let mut reader = Reader::from_str(original);
    let reader_config = reader.config_mut();
    reader_config.check_end_names = false;
    reader_config.allow_unmatched_ends = true;

    // Byte ranges of the input that survive stripping, in ascending order.
    let mut keep: Vec<Range<usize>> = Vec::new();
    let mut cursor = 0usize;
    let mut parsed_to = original.len();

    loop {
        let event = reader.read_event();
        let end = reader.buffer_position() as usize;
        match event {
            Ok(Event::Eof) => break,
            Ok(Event::Text(_)) => keep.push(cursor..end),
            Ok(Event::CData(_)) => {
                // keep the payload, drop the <![CDATA[ and ]]> delimiters
                if end >= cursor + 12 {
                    keep.push(cursor + 9..end - 3);
                }
            }
            Ok(Event::Start(tag) | Event::Empty(tag)) => {
                if is_retained_tag(&tag, &config.retain_tags) {
                    keep_attribute_values(
                        original,
                        &tag,
                        cursor..end,
                        &config.retain_attributes,
                        &mut keep,
                    );
                }
            }
            // end tags, comments, PIs, doctype: markup only, all blanked
            Ok(_) => {}
            Err(source) => {
                if cursor == 0 {
                    return Err(Error::Markup {
                        offset: reader.error_position() as usize,
                        reason: source.to_string(),
                    });
                }
                parsed_to = cursor;
                break;
            }
        }
        cursor = end;
    }

    Ok(render(original, &keep, parsed_to))
}

fn is_retained_tag(tag: &BytesStart<'_>, retain_tags: &BTreeSet<String>) -> bool {
    let name = tag.name();
    let name = String::from_utf8_lossy(name.as_ref());
    retain_tags.contains(name.as_ref())
}

/// Records the byte ranges of whitelisted attribute values inside `span`.
fn keep_attribute_values(
    original: &str,
    tag: &BytesStart<'_>,
    span: Range<usize>,
    retain_attributes: &BTreeSet<String>,
    keep: &mut Vec<Range<usize>>,
) {
    for attribute in tag.attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attribute.key.as_ref());
        if !retain_attributes.contains(key.as_ref()) {
            continue;
        }
        // Attribute values borrow from the input, so the value's position in
        // the original string follows from its pointer offset.
        if let Cow::Borrowed(value) = &attribute.value {
            let base = original.as_ptr() as usize;
            let offset = (value.as_ptr() as usize).wrapping_sub(base);
            if offset >= span.start && offset + value.len() <= span.end {
                keep.push(offset..offset + value.len());
            }
        }
    }
}

/// Renders the output: characters inside a kept range pass through,
/// everything else up to `parsed_to` becomes a space.
fn render(original: &str, keep: &[Range<usize>], parsed_to: usize) -> String {
    let mut out = String::with_capacity(parsed_to);
    let mut ranges = keep.iter().peekable();
    for (position, ch) in original.char_indices() {
        if position >= parsed_to {
            break;
        }
        while ranges.peek().is_some_and(|r| r.end <= position) {
            ranges.next();
        }
        if ranges.peek().is_some_and(|r| r.start <= position) {
            out.push(ch);
        } else {
            out.push(' ');
        }
    }
    out
}
