use crate::error::EmitError;

/// One indentation level
pub const INDENT_UNIT: &str = "    ";

const ESCAPED_CHARS: [char; 5] = ['\\', '*', '_', '`', '|'];

#[derive(Debug, Clone)]
struct OpenBlock {
    kind: String,
    name: String,
    indented: bool,
}

/// Line buffer for reStructuredText with indentation and PHP domain block tracking.
///
/// Every `begin_block` must be matched by an `end_block`, and every `indent` by an
/// `unindent`, before `extract` hands back the text.
#[derive(Debug, Default)]
pub struct Emitter {
    lines: Vec<String>,
    depth: usize,
    blocks: Vec<OpenBlock>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backslash-escape inline markup delimiters so names render literally
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if ESCAPED_CHARS.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn open_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn add_line(&mut self, text: &str) -> &mut Self {
        self.lines
            .push(format!("{}{}", INDENT_UNIT.repeat(self.depth), text));
        self
    }

    pub fn add_blank(&mut self) -> &mut Self {
        self.add_line("")
    }

    /// Emit `text` line by line. With `wrap_indent`, continuation lines go one
    /// level deeper so they sit under a field marker on the first line.
    pub fn add_multiline(&mut self, text: &str, wrap_indent: bool) -> &mut Self {
        let base = INDENT_UNIT.repeat(self.depth);
        let continuation = if wrap_indent {
            INDENT_UNIT.repeat(self.depth + 1)
        } else {
            base.clone()
        };

        for (i, line) in text.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let prefix = if i == 0 { &base } else { &continuation };
            self.lines.push(format!("{}{}", prefix, line));
        }
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn unindent(&mut self) -> Result<&mut Self, EmitError> {
        if self.depth == 0 {
            return Err(EmitError::NegativeIndent);
        }
        self.depth -= 1;
        Ok(self)
    }

    pub fn add_h1(&mut self, text: &str) -> &mut Self {
        self.add_heading(text, '=')
    }

    pub fn add_h2(&mut self, text: &str) -> &mut Self {
        self.add_heading(text, '-')
    }

    fn add_heading(&mut self, text: &str, rule: char) -> &mut Self {
        let underline: String = std::iter::repeat(rule).take(text.chars().count()).collect();
        self.add_line(text).add_line(&underline).add_blank()
    }

    /// `:<name>: <value>`, with multi-line values wrapped under the marker
    pub fn add_field_list(&mut self, name: &str, value: &str) -> &mut Self {
        self.add_multiline(&format!(":{}: {}", Self::escape(name), value), true)
    }

    /// Open a `.. php:<kind>:: <name>` directive. With `indent` the block body is
    /// indented and `end_block` takes the level back out again.
    pub fn begin_block(&mut self, kind: &str, name: &str, indent: bool) -> &mut Self {
        let name = name.strip_prefix('\\').unwrap_or(name);
        self.add_line(&format!(".. php:{}:: {}", kind, name)).add_blank();
        self.blocks.push(OpenBlock {
            kind: kind.to_string(),
            name: name.to_string(),
            indented: indent,
        });
        if indent {
            self.indent();
        }
        self
    }

    /// Close the innermost block, checking its kind when one is given
    pub fn end_block(&mut self, kind: Option<&str>) -> Result<&mut Self, EmitError> {
        let Some(block) = self.blocks.pop() else {
            return Err(EmitError::NoOpenBlock {
                expected: kind.unwrap_or("any").to_string(),
            });
        };

        if let Some(expected) = kind {
            if block.kind != expected {
                let mismatch = EmitError::BlockMismatch {
                    expected: expected.to_string(),
                    found: block.kind.clone(),
                    name: block.name.clone(),
                };
                self.blocks.push(block);
                return Err(mismatch);
            }
        }

        if block.indented {
            self.unindent()?;
        }
        Ok(self.add_blank())
    }

    /// Finish the document. Each line is terminated by `\n`.
    pub fn extract(self) -> Result<String, EmitError> {
        if !self.blocks.is_empty() {
            return Err(EmitError::UnclosedBlocks {
                open: self
                    .blocks
                    .iter()
                    .map(|b| format!("{} {}", b.kind, b.name))
                    .collect(),
            });
        }
        if self.depth != 0 {
            return Err(EmitError::UnbalancedIndent { depth: self.depth });
        }

        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }
}
