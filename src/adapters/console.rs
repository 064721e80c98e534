use crate::domain::ports::Console;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every emitted line in memory. Clones share the same buffer, so one
/// handle can be given to a component and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }
}

impl Console for RecordingConsole {
    fn emit(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
