/// One statement of a source file
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub line: usize, // 0-based
    pub text: String,
}

/// Split program text into statements.
/// `#` starts a comment; statements end at `;` or at the end of a line.
/// `//` is left to the expression, where it is a misplaced `/`.
pub fn statements(code: &str) -> Vec<Stmt> {
    let mut stmts = Vec::new();
    for (line, raw) in code.lines().enumerate() {
        let body = strip_comment(raw);
        for part in body.split(';') {
            let text = part.trim();
            if !text.is_empty() {
                stmts.push(Stmt {
                    line,
                    text: text.to_string(),
                });
            }
        }
    }
    stmts
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((code, _)) => code,
        None => line,
    }
}
