//! Decoding for backend search snippets.
//!
//! The backend excerpts matched content as HTML, wrapping matched terms in
//! `<b>`-style tags. None of that markup is trusted here: highlight tags
//! become span boundaries, every other tag is stripped, and entities are
//! decoded, so renderers only ever see plain text plus match flags.

/// A run of snippet text, flagged when it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSpan {
  pub text: String,
  pub highlighted: bool,
}

enum Tag {
  Open,
  Close,
  Other,
}

/// Decode snippet HTML into plain-text spans with highlight flags.
pub fn decode_snippet(html: &str) -> Vec<SnippetSpan> {
  let mut spans = Vec::new();
  let mut text = String::new();
  let mut depth = 0usize;
  let mut rest = html;

  while let Some(open) = rest.find('<') {
    text.push_str(&rest[..open]);
    rest = &rest[open..];
    let Some(close) = rest.find('>') else {
      // Unterminated tag: keep it as literal text.
      break;
    };
    let tag = &rest[1..close];
    rest = &rest[close + 1..];
    match classify(tag) {
      Tag::Open => {
        flush(&mut spans, &mut text, depth > 0);
        depth += 1;
      }
      Tag::Close => {
        flush(&mut spans, &mut text, depth > 0);
        depth = depth.saturating_sub(1);
      }
      Tag::Other => {}
    }
  }
  text.push_str(rest);
  flush(&mut spans, &mut text, depth > 0);
  spans
}

/// Snippet text with all markup removed.
pub fn snippet_plain(html: &str) -> String {
  decode_snippet(html).into_iter().map(|span| span.text).collect()
}

fn classify(tag: &str) -> Tag {
  let tag = tag.trim();
  let (closing, name) = match tag.strip_prefix('/') {
    Some(rest) => (true, rest),
    None => (false, tag),
  };
  let name: String = name
    .chars()
    .take_while(|c| c.is_ascii_alphanumeric())
    .collect::<String>()
    .to_ascii_lowercase();
  match name.as_str() {
    "b" | "em" | "strong" => {
      if closing {
        Tag::Close
      } else {
        Tag::Open
      }
    }
    _ => Tag::Other,
  }
}

fn flush(spans: &mut Vec<SnippetSpan>, text: &mut String, highlighted: bool) {
  if text.is_empty() {
    return;
  }
  spans.push(SnippetSpan {
    text: unescape(text),
    highlighted,
  });
  text.clear();
}

fn unescape(text: &str) -> String {
  if !text.contains('&') {
    return text.to_string();
  }
  let mut out = String::with_capacity(text.len());
  let mut rest = text;
  while let Some(amp) = rest.find('&') {
    out.push_str(&rest[..amp]);
    rest = &rest[amp..];
    // Entities are short; an unmatched ampersand is literal text.
    let Some(semi) = rest[..rest.len().min(12)].find(';') else {
      out.push('&');
      rest = &rest[1..];
      continue;
    };
    let entity = &rest[1..semi];
    let decoded = match entity {
      "amp" => Some('&'),
      "lt" => Some('<'),
      "gt" => Some('>'),
      "quot" => Some('"'),
      "apos" => Some('\''),
      _ => parse_numeric(entity),
    };
    match decoded {
      Some(c) => {
        out.push(c);
        rest = &rest[semi + 1..];
      }
      None => {
        out.push('&');
        rest = &rest[1..];
      }
    }
  }
  out.push_str(rest);
  out
}

fn parse_numeric(entity: &str) -> Option<char> {
  let digits = entity.strip_prefix('#')?;
  let code = match digits.strip_prefix(['x', 'X']) {
    Some(hex) => u32::from_str_radix(hex, 16).ok()?,
    None => digits.parse().ok()?,
  };
  char::from_u32(code)
}
