//! Code writer with automatic indentation tracking.
//!
//! Emitters build their text through a [`CodeWriter`] so the `usetabs`
//! option is honored in one place.
//!
//! ```
//! use cmdgen_core::Indent;
//! use cmdgen_emit::code_writer::CodeWriter;
//!
//! let mut w = CodeWriter::new(Indent::FourSpaces);
//! w.block("module proto.cmd", |w| w.writeln("export var A: number = 0x1001;"))
//!     .unwrap();
//!
//! assert_eq!(
//!     w.into_string(),
//!     "module proto.cmd {\n    export var A: number = 0x1001;\n}\n"
//! );
//! ```

use cmdgen_core::Indent;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A text buffer that tracks indentation for C-like syntax.
pub struct CodeWriter {
    out: String,
    indent: Indent,
    indent_level: Rc<Cell<usize>>,
    at_line_start: bool,
}

impl CodeWriter {
    pub fn new(indent: Indent) -> Self {
        Self {
            out: String::new(),
            indent,
            indent_level: Rc::new(Cell::new(0)),
            at_line_start: true,
        }
    }

    /// Write text without a newline. Adds indentation if at line start.
    pub fn write(&mut self, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        if self.at_line_start && !text.trim().is_empty() {
            for _ in 0..self.indent_level.get() {
                self.out.push_str(self.indent.as_str());
            }
            self.at_line_start = false;
        }

        self.out.push_str(text);
        Ok(())
    }

    /// Write text followed by a newline.
    pub fn writeln(&mut self, text: &str) -> fmt::Result {
        self.write(text)?;
        self.out.push('\n');
        self.at_line_start = true;
        Ok(())
    }

    /// Write an empty line, never indented.
    pub fn blank_line(&mut self) -> fmt::Result {
        self.out.push('\n');
        self.at_line_start = true;
        Ok(())
    }

    /// Create an indentation guard. Indentation increases while the guard is alive.
    pub fn indent(&mut self) -> IndentGuard {
        self.indent_level.set(self.indent_level.get() + 1);
        IndentGuard {
            indent_level: Rc::clone(&self.indent_level),
        }
    }

    /// Write `header {`, the indented body, then `}`.
    pub fn block<F>(&mut self, header: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.writeln(&format!("{header} {{"))?;
        {
            let _indent = self.indent();
            body(self)?;
        }
        self.writeln("}")
    }

    /// Write items separated by a delimiter on the current line.
    pub fn write_separated<I, F>(
        &mut self,
        items: I,
        separator: &str,
        mut write_item: F,
    ) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut first = true;
        for item in items {
            if !first {
                self.write(separator)?;
            }
            write_item(self, item)?;
            first = false;
        }
        Ok(())
    }

    /// Write formatted text. Use [`cw_write!`](crate::cw_write) instead.
    #[doc(hidden)]
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let formatted = format!("{args}");
        self.write(&formatted)
    }

    /// Write formatted text and a newline. Use [`cw_writeln!`](crate::cw_writeln) instead.
    #[doc(hidden)]
    pub fn writeln_fmt(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        let formatted = format!("{args}");
        self.writeln(&formatted)
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level.get()
    }

    /// Consume the writer and return the text.
    pub fn into_string(self) -> String {
        self.out
    }
}

/// RAII guard that maintains indentation level.
pub struct IndentGuard {
    indent_level: Rc<Cell<usize>>,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        let current = self.indent_level.get();
        self.indent_level.set(current.saturating_sub(1));
    }
}

/// Write formatted text to a [`CodeWriter`].
#[macro_export]
macro_rules! cw_write {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write_fmt(format_args!($($arg)*))
    };
}

/// Write formatted text and a newline to a [`CodeWriter`].
#[macro_export]
macro_rules! cw_writeln {
    ($writer:expr, $($arg:tt)*) => {
        $writer.writeln_fmt(format_args!($($arg)*))
    };
}
