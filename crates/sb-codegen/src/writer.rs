const INDENT: &str = "    ";

/// Line-oriented Swift source builder that tracks block indentation.
#[derive(Debug, Default)]
pub(crate) struct SwiftWriter {
    output: String,
    depth: usize,
}

impl SwiftWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.output.push('\n');
    }

    pub(crate) fn mark(&mut self, title: impl AsRef<str>) {
        self.line(format!("// MARK: - {}", title.as_ref()));
    }

    /// Writes `header {`, the indented body, then the closing brace.
    pub(crate) fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) {
        self.line(format!("{} {{", header.as_ref()));
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line("}");
    }

    /// Like `block`, but `case` labels stay at the `switch` depth.
    pub(crate) fn switch(&mut self, subject: impl AsRef<str>, arms: impl FnOnce(&mut Self)) {
        self.line(format!("switch {} {{", subject.as_ref()));
        arms(self);
        self.line("}");
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }
}
