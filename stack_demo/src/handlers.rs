use std::io::{self, Write};

use stack_adt::{Comparator, Destructor, Printer};

///
/// Writes one item per line.
///
/// `Printer` can't fail, so the first write error is kept and every later
/// item is skipped; `finish` reports it.
///
pub struct LinePrinter<'a, W: Write> {
    out: &'a mut W,
    result: io::Result<()>,
}

impl<'a, W: Write> LinePrinter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, result: Ok(()) }
    }

    pub fn finish(self) -> io::Result<()> {
        self.result
    }
}

impl<W: Write> Printer<String> for LinePrinter<'_, W> {
    fn print(&mut self, item: &String) {
        if self.result.is_ok() {
            self.result = writeln!(self.out, "{item}");
        }
    }
}

/// Releases strings still on the stack when it is torn down.
#[derive(Debug, Default)]
pub struct LoggingDestructor {
    pub destroyed: usize,
}

impl Destructor<String> for LoggingDestructor {
    fn destroy(&mut self, item: String) {
        log::debug!("releasing {item:?}");
        self.destroyed += 1;
    }
}

/// Exact text equality between a search target and a stored string.
#[derive(Clone, Copy, Debug, Default)]
pub struct SameText;

impl Comparator<String, str> for SameText {
    fn matches(&self, target: &str, candidate: &String) -> bool {
        target == candidate.as_str()
    }
}
