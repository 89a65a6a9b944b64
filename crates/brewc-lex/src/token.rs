//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text it covers,
//! its channel, its start/end coordinates, and a sequence index. Tokens are
//! immutable once emitted; concatenating the text of every emitted token in
//! order reproduces the source byte-for-byte.

use std::fmt;
use std::sync::OnceLock;

use brewc_util::{FxHashMap, Span};

/// The channel a token is emitted on.
///
/// The parser only consumes default-channel tokens; hidden tokens
/// (whitespace, suppressed newlines, most comments) are retained for
/// source fidelity and tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Visible to the parser.
    Default,
    /// Retained but skipped by the parser.
    Hidden,
}

/// The fixed set of token types produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ---- String tokens ----
    /// A complete string literal with no interpolation.
    StringLiteral,
    /// Opening segment of an interpolated string, up to and including the
    /// first `$`.
    GStringBegin,
    /// Closing segment of an interpolated string, including the terminator.
    GStringEnd,
    /// An interior segment ending at a `$` interpolation.
    GStringPart,
    /// One `.name` segment of a `$a.b.c` property path.
    GStringPathPart,

    // ---- Keywords ----
    /// `as`
    As,
    /// `def`
    Def,
    /// `in`
    In,
    /// `trait`
    Trait,
    /// `threadsafe`
    Threadsafe,
    /// `var`
    Var,
    /// `boolean`, `byte`, `char`, `double`, `float`, `int`, `long`, `short`
    BuiltInPrimitiveType,
    /// `abstract`
    Abstract,
    /// `assert`
    Assert,
    /// `break`
    Break,
    /// `yield`
    Yield,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `class`
    Class,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `default`
    Default,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `enum`
    Enum,
    /// `extends`
    Extends,
    /// `final`
    Final,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `if`
    If,
    /// `goto`
    Goto,
    /// `implements`
    Implements,
    /// `import`
    Import,
    /// `instanceof`
    Instanceof,
    /// `interface`
    Interface,
    /// `native`
    Native,
    /// `new`
    New,
    /// `non-sealed`
    NonSealed,
    /// `package`
    Package,
    /// `permits`
    Permits,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `public`
    Public,
    /// `record`
    Record,
    /// `return`
    Return,
    /// `sealed`
    Sealed,
    /// `static`
    Static,
    /// `strictfp`
    Strictfp,
    /// `super`
    Super,
    /// `switch`
    Switch,
    /// `synchronized`
    Synchronized,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `throws`
    Throws,
    /// `transient`
    Transient,
    /// `try`
    Try,
    /// `void`
    Void,
    /// `volatile`
    Volatile,
    /// `while`
    While,

    // ---- Literals ----
    /// Integer literal in any base, with optional suffix.
    IntegerLiteral,
    /// Floating-point literal, with optional suffix.
    FloatingPointLiteral,
    /// `true` or `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,

    // ---- Range and navigation operators ----
    /// `..`
    RangeInclusive,
    /// `<..`
    RangeExclusiveLeft,
    /// `..<`
    RangeExclusiveRight,
    /// `<..<`
    RangeExclusiveFull,
    /// `*.`
    SpreadDot,
    /// `?.`
    SafeDot,
    /// `?[`
    SafeIndex,
    /// `??.`
    SafeChainDot,
    /// `?:`
    Elvis,
    /// `.&`
    MethodPointer,
    /// `::`
    MethodReference,
    /// `=~`
    RegexFind,
    /// `==~`
    RegexMatch,
    /// `**`
    Power,
    /// `**=`
    PowerAssign,
    /// `<=>`
    Spaceship,
    /// `===`
    Identical,
    /// `==>`
    Implies,
    /// `!==`
    NotIdentical,
    /// `->`
    Arrow,
    /// `!instanceof`
    NotInstanceof,
    /// `!in`
    NotIn,

    // ---- Delimiters ----
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // ---- Simple operators ----
    /// `=`
    Assign,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `==`
    Equal,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    Xor,
    /// `%`
    Mod,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `%=`
    ModAssign,
    /// `<<=`
    LshiftAssign,
    /// `>>=`
    RshiftAssign,
    /// `>>>=`
    UrshiftAssign,
    /// `?=`
    ElvisAssign,

    // ---- Identifiers and structure ----
    /// Identifier whose first character is uppercase.
    CapitalizedIdentifier,
    /// Any other identifier.
    Identifier,
    /// `@`
    At,
    /// `...`
    Ellipsis,
    /// A run of inline whitespace (always hidden).
    Ws,
    /// A line break, or a comment standing in for one.
    Nl,
    /// A `#!` shebang line (always hidden).
    ShComment,
    /// A single character no rule recognizes.
    UnexpectedChar,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical token.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The token type.
    pub kind: TokenKind,
    /// The exact source text covered by the token.
    pub text: String,
    /// Which channel the token was emitted on.
    pub channel: Channel,
    /// Byte range and start line/column (1-based).
    pub span: Span,
    /// Line of the character just past the token (1-based).
    pub end_line: u32,
    /// Column of the character just past the token (1-based).
    pub end_column: u32,
    /// Position of this token in the emission sequence, starting at 0.
    pub index: u64,
}

impl Token {
    /// Whether the token is visible to the parser.
    pub fn is_default_channel(&self) -> bool {
        self.channel == Channel::Default
    }
}

fn keyword_table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = FxHashMap::default();
        let entries: &[(&str, TokenKind)] = &[
            ("as", TokenKind::As),
            ("def", TokenKind::Def),
            ("in", TokenKind::In),
            ("trait", TokenKind::Trait),
            ("threadsafe", TokenKind::Threadsafe),
            ("var", TokenKind::Var),
            ("abstract", TokenKind::Abstract),
            ("assert", TokenKind::Assert),
            ("break", TokenKind::Break),
            ("yield", TokenKind::Yield),
            ("case", TokenKind::Case),
            ("catch", TokenKind::Catch),
            ("class", TokenKind::Class),
            ("const", TokenKind::Const),
            ("continue", TokenKind::Continue),
            ("default", TokenKind::Default),
            ("do", TokenKind::Do),
            ("else", TokenKind::Else),
            ("enum", TokenKind::Enum),
            ("extends", TokenKind::Extends),
            ("final", TokenKind::Final),
            ("finally", TokenKind::Finally),
            ("for", TokenKind::For),
            ("if", TokenKind::If),
            ("goto", TokenKind::Goto),
            ("implements", TokenKind::Implements),
            ("import", TokenKind::Import),
            ("instanceof", TokenKind::Instanceof),
            ("interface", TokenKind::Interface),
            ("native", TokenKind::Native),
            ("new", TokenKind::New),
            ("package", TokenKind::Package),
            ("permits", TokenKind::Permits),
            ("private", TokenKind::Private),
            ("protected", TokenKind::Protected),
            ("public", TokenKind::Public),
            ("record", TokenKind::Record),
            ("return", TokenKind::Return),
            ("sealed", TokenKind::Sealed),
            ("static", TokenKind::Static),
            ("strictfp", TokenKind::Strictfp),
            ("super", TokenKind::Super),
            ("switch", TokenKind::Switch),
            ("synchronized", TokenKind::Synchronized),
            ("this", TokenKind::This),
            ("throw", TokenKind::Throw),
            ("throws", TokenKind::Throws),
            ("transient", TokenKind::Transient),
            ("try", TokenKind::Try),
            ("void", TokenKind::Void),
            ("volatile", TokenKind::Volatile),
            ("while", TokenKind::While),
            ("true", TokenKind::BooleanLiteral),
            ("false", TokenKind::BooleanLiteral),
            ("null", TokenKind::NullLiteral),
            ("boolean", TokenKind::BuiltInPrimitiveType),
            ("byte", TokenKind::BuiltInPrimitiveType),
            ("char", TokenKind::BuiltInPrimitiveType),
            ("double", TokenKind::BuiltInPrimitiveType),
            ("float", TokenKind::BuiltInPrimitiveType),
            ("int", TokenKind::BuiltInPrimitiveType),
            ("long", TokenKind::BuiltInPrimitiveType),
            ("short", TokenKind::BuiltInPrimitiveType),
        ];
        for (text, kind) in entries {
            map.insert(*text, *kind);
        }
        map
    })
}

/// Looks up the token kind for a reserved word, if `ident` is one.
///
/// `non-sealed` is not in this table because it is not a single identifier;
/// the identifier lexer handles it with explicit lookahead.
///
/// # Example
///
/// ```
/// use brewc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("def"), Some(TokenKind::Def));
/// assert_eq!(keyword_from_ident("null"), Some(TokenKind::NullLiteral));
/// assert_eq!(keyword_from_ident("defined"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    keyword_table().get(ident).copied()
}

/// Decides what an upcoming `/` means, given only the last default-channel
/// token.
///
/// Returns `true` when the `/` may open a slashy/regex literal. After a
/// value-ending token (identifier, closing delimiter, literal, `this`,
/// `++`/`--`) the `/` is division instead. With no previous token at all, a
/// literal is allowed.
///
/// This is a pure function so the disambiguation table can be tested in
/// isolation.
pub fn slashy_allowed(last_token: Option<TokenKind>) -> bool {
    !matches!(
        last_token,
        Some(
            TokenKind::Inc
                | TokenKind::Dec
                | TokenKind::This
                | TokenKind::RBrace
                | TokenKind::RBrack
                | TokenKind::RParen
                | TokenKind::GStringEnd
                | TokenKind::NullLiteral
                | TokenKind::StringLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::FloatingPointLiteral
                | TokenKind::Identifier
                | TokenKind::CapitalizedIdentifier
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_from_ident("while"), Some(TokenKind::While));
        assert_eq!(keyword_from_ident("trait"), Some(TokenKind::Trait));
        assert_eq!(
            keyword_from_ident("int"),
            Some(TokenKind::BuiltInPrimitiveType)
        );
        assert_eq!(keyword_from_ident("True"), None);
        assert_eq!(keyword_from_ident("classy"), None);
    }

    #[test]
    fn test_slashy_allowed_at_start() {
        assert!(slashy_allowed(None));
    }

    #[test]
    fn test_slashy_blocked_after_values() {
        for kind in [
            TokenKind::Identifier,
            TokenKind::CapitalizedIdentifier,
            TokenKind::IntegerLiteral,
            TokenKind::FloatingPointLiteral,
            TokenKind::StringLiteral,
            TokenKind::GStringEnd,
            TokenKind::BooleanLiteral,
            TokenKind::NullLiteral,
            TokenKind::This,
            TokenKind::RParen,
            TokenKind::RBrack,
            TokenKind::RBrace,
            TokenKind::Inc,
            TokenKind::Dec,
        ] {
            assert!(!slashy_allowed(Some(kind)), "{:?}", kind);
        }
    }

    #[test]
    fn test_slashy_allowed_after_operators_and_keywords() {
        for kind in [
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::Comma,
            TokenKind::Return,
            TokenKind::Def,
            TokenKind::Nl,
            TokenKind::RegexFind,
        ] {
            assert!(slashy_allowed(Some(kind)), "{:?}", kind);
        }
    }
}
