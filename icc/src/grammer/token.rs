use ir::Operator;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: usize, // column (in chars) of the first character
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize) -> Self {
        Token { kind, pos }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Number(String), // "123" "123." ".123" "123.45"
    Ident(String),  // "$x" or "x"
    Op(Operator),   // '+' '-' '*' '/' '^' '**' '√'
    Open(Bracket),  // '(' '[' '{'
    Close(Bracket), // ')' ']' '}'
}

impl TokenKind {
    pub fn text(&self) -> String {
        match self {
            TokenKind::Number(s) | TokenKind::Ident(s) => s.clone(),
            TokenKind::Op(op) => op.symbol().to_string(),
            TokenKind::Open(b) => b.open().to_string(),
            TokenKind::Close(b) => b.close().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Paren,  // ( )
    Square, // [ ]
    Curly,  // { }
}

impl Bracket {
    const CYCLE: [Bracket; 3] = [Bracket::Paren, Bracket::Square, Bracket::Curly];

    /// Bracket family used at nesting `depth` when rendering
    pub fn nth(depth: usize) -> Bracket {
        Self::CYCLE[depth % Self::CYCLE.len()]
    }

    pub fn open(&self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}
