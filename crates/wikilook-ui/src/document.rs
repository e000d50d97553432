use std::borrow::Cow;

use wikilook_types::LookupResult;

/// Popup text content: the title as heading and the extract as readable text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub heading: String,
    pub body: String,
}

impl Document {
    pub fn from_result(result: &LookupResult) -> Self {
        Self {
            heading: result.title.clone(),
            body: html_to_text(&result.extract),
        }
    }
}

/// Render extract HTML as plain paragraphs separated by blank lines
pub fn html_to_text(html: &str) -> String {
    let mut out = TextBuilder::default();
    let mut rest = html;

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix("<!--") {
            rest = after.find("-->").map_or("", |end| &after[end + 3..]);
        } else if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => {
                    out.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    out.push_text(&decode_entities(rest));
                    rest = "";
                }
            }
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            out.push_text(&decode_entities(&rest[..end]));
            rest = &rest[end..];
        }
    }

    out.finish()
}

#[derive(Default)]
struct TextBuilder {
    paragraphs: Vec<String>,
    line: String,
    pending_space: bool,
}

impl TextBuilder {
    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                self.pending_space = !self.line.is_empty() && !self.line.ends_with(char::is_whitespace);
                continue;
            }
            if self.pending_space {
                self.line.push(' ');
                self.pending_space = false;
            }
            self.line.push(c);
        }
    }

    fn tag(&mut self, raw: &str) {
        let closing = raw.starts_with('/');
        let name = raw
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match name.as_str() {
            "br" => {
                self.line.push('\n');
                self.pending_space = false;
            }
            "li" => {
                self.break_paragraph();
                if !closing {
                    self.line.push_str("• ");
                }
            }
            "p" | "div" | "ul" | "ol" | "dl" | "dd" | "dt" | "blockquote" | "table" | "tr"
            | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.break_paragraph(),
            _ => {}
        }
    }

    fn break_paragraph(&mut self) {
        let trimmed = self.line.trim();
        if !trimmed.is_empty() && trimmed != "•" {
            self.paragraphs.push(trimmed.to_string());
        }
        self.line.clear();
        self.pending_space = false;
    }

    fn finish(mut self) -> String {
        self.break_paragraph();
        self.paragraphs.join("\n\n")
    }
}

fn decode_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start + 1..];

        let decoded = candidate
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&candidate[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = candidate;
            }
        }
    }

    out.push_str(rest);
    Cow::Owned(out)
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
