use std::cell::{Cell, RefCell};
use tsconvert_typemap::{ScalarTable, TypeMapOptions};

/// Options for TypeScript declaration output
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Spaces per indentation level for property lines
    pub indent_width: usize,
    /// Prefix each interface with `export`
    pub export: bool,
    /// Reject property types that resolve to neither a scalar nor a declaration
    pub strict: bool,
    /// Source scalar and collection names
    pub scalars: ScalarTable,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            export: true,
            strict: false,
            scalars: ScalarTable::default(),
        }
    }
}

impl CompileOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    pub fn type_map_options(&self) -> TypeMapOptions {
        TypeMapOptions {
            strict: self.strict,
            table: self.scalars.clone(),
        }
    }
}

/// Output buffer with indentation tracking
pub struct CompilerContext {
    buffer: RefCell<String>,
    indent_level: Cell<usize>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: RefCell::new(String::new()),
            indent_level: Cell::new(0),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = " ".repeat(self.indent_level.get() * self.options.indent_width);
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
    }

    pub fn indent(&self) {
        self.indent_level.set(self.indent_level.get() + 1);
    }

    pub fn dedent(&self) {
        self.indent_level
            .set(self.indent_level.get().saturating_sub(1));
    }

    /// Everything written so far, without trailing whitespace
    pub fn get_output(&self) -> String {
        self.buffer.borrow().trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_follows_width() {
        let ctx = CompilerContext::new(CompileOptions {
            indent_width: 2,
            ..Default::default()
        });

        ctx.add_line("a {");
        ctx.indent();
        ctx.add_line("b;");
        ctx.dedent();
        ctx.dedent();
        ctx.add_line("}");

        assert_eq!(ctx.get_output(), "a {\n  b;\n}");
    }
}
