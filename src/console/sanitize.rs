//! Reduce raw child output to plain printable text.
//!
//! The console is not a terminal emulator: escape sequences are parsed only so
//! they can be discarded instead of showing up as garbage.

use vte::{Parser, Perform};

const TAB_STOP: usize = 8;

/// Collects printable characters and expands tabs.
struct PlainText {
    out: String,
    column: usize,
}

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.out.push(c);
        self.column += 1;
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\t' => {
                let pad = TAB_STOP - (self.column % TAB_STOP);
                self.out.extend(std::iter::repeat(' ').take(pad));
                self.column += pad;
            }
            // Backspace erases the previous character, as progress meters expect.
            0x08 => {
                if self.out.pop().is_some() {
                    self.column = self.column.saturating_sub(1);
                }
            }
            _ => {}
        }
    }
}

/// Strip escape sequences and control characters from one line of output.
pub fn plain_text(line: &str) -> String {
    let mut parser = Parser::new();
    let mut performer = PlainText {
        out: String::with_capacity(line.len()),
        column: 0,
    };
    parser.advance(&mut performer, line.as_bytes());
    performer.out
}
