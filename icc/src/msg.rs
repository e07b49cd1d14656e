use color_print::cprintln;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

/// Where a message points: file, 0-based line, statement text, column in the statement
pub struct Loc<'a> {
    pub file: &'a str,
    pub line: usize,
    pub raw: &'a str,
    pub col: Option<usize>,
}

impl Msg {
    pub fn diag(&self, loc: &Loc) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        let line = loc.line + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", loc.file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, loc.raw);
        match loc.col {
            Some(col) => cprintln!("      <blue>|</> {}<red,bold>^</>", " ".repeat(col)),
            None => cprintln!("      <blue>|</>"),
        }
    }
}
