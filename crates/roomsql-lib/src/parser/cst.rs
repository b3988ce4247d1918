//! Syntax kinds for the SQL dialect.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `SqlLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token(".")]
    Dot,

    #[token("=")]
    Eq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    NotEq,

    #[token("<>")]
    LtGt,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    #[token("<<")]
    Shl,

    #[token(">>")]
    Shr,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("||")]
    Concat,

    #[token("~")]
    Tilde,

    // --- Keywords (reserved, case-insensitive) ---
    #[token("abort", ignore(case))]
    KwAbort,

    #[token("action", ignore(case))]
    KwAction,

    #[token("add", ignore(case))]
    KwAdd,

    #[token("after", ignore(case))]
    KwAfter,

    #[token("all", ignore(case))]
    KwAll,

    #[token("alter", ignore(case))]
    KwAlter,

    #[token("analyze", ignore(case))]
    KwAnalyze,

    #[token("and", ignore(case))]
    KwAnd,

    #[token("as", ignore(case))]
    KwAs,

    #[token("asc", ignore(case))]
    KwAsc,

    #[token("attach", ignore(case))]
    KwAttach,

    #[token("autoincrement", ignore(case))]
    KwAutoincrement,

    #[token("before", ignore(case))]
    KwBefore,

    #[token("begin", ignore(case))]
    KwBegin,

    #[token("between", ignore(case))]
    KwBetween,

    #[token("by", ignore(case))]
    KwBy,

    #[token("cascade", ignore(case))]
    KwCascade,

    #[token("case", ignore(case))]
    KwCase,

    #[token("cast", ignore(case))]
    KwCast,

    #[token("check", ignore(case))]
    KwCheck,

    #[token("collate", ignore(case))]
    KwCollate,

    #[token("column", ignore(case))]
    KwColumn,

    #[token("commit", ignore(case))]
    KwCommit,

    #[token("conflict", ignore(case))]
    KwConflict,

    #[token("constraint", ignore(case))]
    KwConstraint,

    #[token("create", ignore(case))]
    KwCreate,

    #[token("cross", ignore(case))]
    KwCross,

    #[token("current_date", ignore(case))]
    KwCurrentDate,

    #[token("current_time", ignore(case))]
    KwCurrentTime,

    #[token("current_timestamp", ignore(case))]
    KwCurrentTimestamp,

    #[token("database", ignore(case))]
    KwDatabase,

    #[token("default", ignore(case))]
    KwDefault,

    #[token("deferrable", ignore(case))]
    KwDeferrable,

    #[token("deferred", ignore(case))]
    KwDeferred,

    #[token("delete", ignore(case))]
    KwDelete,

    #[token("desc", ignore(case))]
    KwDesc,

    #[token("detach", ignore(case))]
    KwDetach,

    #[token("distinct", ignore(case))]
    KwDistinct,

    #[token("drop", ignore(case))]
    KwDrop,

    #[token("each", ignore(case))]
    KwEach,

    #[token("else", ignore(case))]
    KwElse,

    #[token("end", ignore(case))]
    KwEnd,

    #[token("escape", ignore(case))]
    KwEscape,

    #[token("except", ignore(case))]
    KwExcept,

    #[token("exclusive", ignore(case))]
    KwExclusive,

    #[token("exists", ignore(case))]
    KwExists,

    #[token("explain", ignore(case))]
    KwExplain,

    #[token("fail", ignore(case))]
    KwFail,

    #[token("for", ignore(case))]
    KwFor,

    #[token("foreign", ignore(case))]
    KwForeign,

    #[token("from", ignore(case))]
    KwFrom,

    #[token("full", ignore(case))]
    KwFull,

    #[token("glob", ignore(case))]
    KwGlob,

    #[token("group", ignore(case))]
    KwGroup,

    #[token("having", ignore(case))]
    KwHaving,

    #[token("if", ignore(case))]
    KwIf,

    #[token("ignore", ignore(case))]
    KwIgnore,

    #[token("immediate", ignore(case))]
    KwImmediate,

    #[token("in", ignore(case))]
    KwIn,

    #[token("index", ignore(case))]
    KwIndex,

    #[token("indexed", ignore(case))]
    KwIndexed,

    #[token("initially", ignore(case))]
    KwInitially,

    #[token("inner", ignore(case))]
    KwInner,

    #[token("insert", ignore(case))]
    KwInsert,

    #[token("instead", ignore(case))]
    KwInstead,

    #[token("intersect", ignore(case))]
    KwIntersect,

    #[token("into", ignore(case))]
    KwInto,

    #[token("is", ignore(case))]
    KwIs,

    #[token("isnull", ignore(case))]
    KwIsnull,

    #[token("join", ignore(case))]
    KwJoin,

    #[token("key", ignore(case))]
    KwKey,

    #[token("left", ignore(case))]
    KwLeft,

    #[token("like", ignore(case))]
    KwLike,

    #[token("limit", ignore(case))]
    KwLimit,

    #[token("match", ignore(case))]
    KwMatch,

    #[token("natural", ignore(case))]
    KwNatural,

    #[token("no", ignore(case))]
    KwNo,

    #[token("not", ignore(case))]
    KwNot,

    #[token("notnull", ignore(case))]
    KwNotnull,

    #[token("null", ignore(case))]
    KwNull,

    #[token("of", ignore(case))]
    KwOf,

    #[token("offset", ignore(case))]
    KwOffset,

    #[token("on", ignore(case))]
    KwOn,

    #[token("or", ignore(case))]
    KwOr,

    #[token("order", ignore(case))]
    KwOrder,

    #[token("outer", ignore(case))]
    KwOuter,

    #[token("plan", ignore(case))]
    KwPlan,

    #[token("pragma", ignore(case))]
    KwPragma,

    #[token("primary", ignore(case))]
    KwPrimary,

    #[token("query", ignore(case))]
    KwQuery,

    #[token("raise", ignore(case))]
    KwRaise,

    #[token("recursive", ignore(case))]
    KwRecursive,

    #[token("references", ignore(case))]
    KwReferences,

    #[token("regexp", ignore(case))]
    KwRegexp,

    #[token("reindex", ignore(case))]
    KwReindex,

    #[token("release", ignore(case))]
    KwRelease,

    #[token("rename", ignore(case))]
    KwRename,

    #[token("replace", ignore(case))]
    KwReplace,

    #[token("restrict", ignore(case))]
    KwRestrict,

    #[token("rollback", ignore(case))]
    KwRollback,

    #[token("row", ignore(case))]
    KwRow,

    #[token("rowid", ignore(case))]
    KwRowid,

    #[token("savepoint", ignore(case))]
    KwSavepoint,

    #[token("select", ignore(case))]
    KwSelect,

    #[token("set", ignore(case))]
    KwSet,

    #[token("table", ignore(case))]
    KwTable,

    #[token("temp", ignore(case))]
    KwTemp,

    #[token("temporary", ignore(case))]
    KwTemporary,

    #[token("then", ignore(case))]
    KwThen,

    #[token("to", ignore(case))]
    KwTo,

    #[token("transaction", ignore(case))]
    KwTransaction,

    #[token("trigger", ignore(case))]
    KwTrigger,

    #[token("union", ignore(case))]
    KwUnion,

    #[token("unique", ignore(case))]
    KwUnique,

    #[token("update", ignore(case))]
    KwUpdate,

    #[token("using", ignore(case))]
    KwUsing,

    #[token("vacuum", ignore(case))]
    KwVacuum,

    #[token("values", ignore(case))]
    KwValues,

    #[token("view", ignore(case))]
    KwView,

    #[token("virtual", ignore(case))]
    KwVirtual,

    #[token("when", ignore(case))]
    KwWhen,

    #[token("where", ignore(case))]
    KwWhere,

    #[token("with", ignore(case))]
    KwWith,

    #[token("without", ignore(case))]
    KwWithout,

    // --- Names and literals ---
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_$]*")]
    Identifier,

    /// `[name]`
    #[regex(r"\[[^\]]*\]")]
    BracketLiteral,

    /// `` `name` ``, doubled backtick escapes
    #[regex(r"`(?:[^`]|``)*`")]
    BacktickLiteral,

    #[regex(r"'(?:[^']|'')*'")]
    SingleQuoteString,

    #[regex(r#""(?:[^"]|"")*""#)]
    DoubleQuoteString,

    #[regex(r"[xX]'[0-9a-fA-F]*'")]
    BlobLiteral,

    #[regex(r"[0-9]+(?:\.[0-9]*)?(?:[eE][+\-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+(?:[eE][+\-]?[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    NumericLiteral,

    /// `?`, `?NNN`, `:name`, `@name`, `$name`
    #[regex(r"\?[0-9]*")]
    #[regex(r"[:@$][a-zA-Z_][a-zA-Z0-9_]*")]
    ParameterName,

    // --- Trivia ---
    #[regex(r"[ \t\f]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,
    /// Lookahead past the last token
    Eof,

    // --- Node kinds (non-terminals) ---
    Root,
    Stmt,

    AlterTableStmt,
    AnalyzeStmt,
    AttachStmt,
    BeginStmt,
    CommitStmt,
    CreateIndexStmt,
    CreateTableStmt,
    CreateTriggerStmt,
    CreateViewStmt,
    CreateVirtualTableStmt,
    DeleteStmt,
    DetachStmt,
    DropIndexStmt,
    DropTableStmt,
    DropTriggerStmt,
    DropViewStmt,
    InsertStmt,
    PragmaStmt,
    ReindexStmt,
    ReleaseStmt,
    RollbackStmt,
    SavepointStmt,
    SelectStmt,
    UpdateStmt,
    VacuumStmt,

    BindParameter,
    ColumnConstraint,
    ColumnDef,
    CompoundOperator,
    ConflictClause,
    ErrorMessage,
    ForeignKeyClause,
    FromClause,
    FromTable,
    GroupByClause,
    IndexedColumn,
    InsertColumns,
    JoinClause,
    JoinConstraint,
    JoinOperator,
    LimitClause,
    LiteralValue,
    OrderClause,
    OrderingTerm,
    PragmaValue,
    ResultColumn,
    ResultColumns,
    SelectCore,
    SelectCoreSelect,
    SelectCoreValues,
    SignedNumber,
    SingleTableStmtTable,
    Subquery,
    TableConstraint,
    TableOrSubquery,
    TypeName,
    WhereClause,
    WithClause,
    WithClauseTable,
    WithClauseTableDef,

    CollationName,
    ColumnAliasName,
    ColumnDefName,
    ColumnName,
    DatabaseName,
    ForeignTable,
    FunctionName,
    ModuleArgument,
    ModuleName,
    PragmaName,
    SavepointName,
    TableAliasName,
    TableDefName,
    TableName,
    TableOrIndexName,
    TriggerName,
    ViewName,

    AddExpr,
    AndExpr,
    BetweenExpr,
    BitExpr,
    CaseExpr,
    CastExpr,
    CollateExpr,
    ColumnRefExpr,
    ComparisonExpr,
    ConcatExpr,
    EquivalenceExpr,
    ExistsExpr,
    FunctionCallExpr,
    InExpr,
    IsnullExpr,
    LikeExpr,
    LiteralExpr,
    MulExpr,
    OrExpr,
    ParenExpr,
    RaiseFunctionExpr,
    UnaryExpr,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAbort as u16..=KwWithout as u16).contains(&(self as u16))
    }

    /// Node kinds never come out of the lexer.
    #[inline]
    pub fn is_node(self) -> bool {
        self as u16 >= Root as u16 && self != __LAST
    }

    /// Name used in diagnostics: the source spelling for fixed tokens, a
    /// description for everything else.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            Comma => "`,`",
            Semicolon => "`;`",
            Dot => "`.`",
            Eq => "`=`",
            EqEq => "`==`",
            NotEq => "`!=`",
            LtGt => "`<>`",
            Lt => "`<`",
            LtEq => "`<=`",
            Gt => "`>`",
            GtEq => "`>=`",
            Shl => "`<<`",
            Shr => "`>>`",
            Amp => "`&`",
            Pipe => "`|`",
            Plus => "`+`",
            Minus => "`-`",
            Star => "`*`",
            Slash => "`/`",
            Percent => "`%`",
            Concat => "`||`",
            Tilde => "`~`",
            Identifier => "identifier",
            BracketLiteral | BacktickLiteral => "quoted identifier",
            SingleQuoteString | DoubleQuoteString => "string literal",
            BlobLiteral => "blob literal",
            NumericLiteral => "number",
            ParameterName => "bind parameter",
            Eof => "end of input",
            kind if kind.is_keyword() => keyword_text(kind),
            _ => "token",
        }
    }
}

/// Upper-case spelling of a keyword kind, backquoted.
fn keyword_text(kind: SyntaxKind) -> &'static str {
    match kind {
        KwAbort => "`ABORT`",
        KwAction => "`ACTION`",
        KwAdd => "`ADD`",
        KwAfter => "`AFTER`",
        KwAll => "`ALL`",
        KwAlter => "`ALTER`",
        KwAnalyze => "`ANALYZE`",
        KwAnd => "`AND`",
        KwAs => "`AS`",
        KwAsc => "`ASC`",
        KwAttach => "`ATTACH`",
        KwAutoincrement => "`AUTOINCREMENT`",
        KwBefore => "`BEFORE`",
        KwBegin => "`BEGIN`",
        KwBetween => "`BETWEEN`",
        KwBy => "`BY`",
        KwCascade => "`CASCADE`",
        KwCase => "`CASE`",
        KwCast => "`CAST`",
        KwCheck => "`CHECK`",
        KwCollate => "`COLLATE`",
        KwColumn => "`COLUMN`",
        KwCommit => "`COMMIT`",
        KwConflict => "`CONFLICT`",
        KwConstraint => "`CONSTRAINT`",
        KwCreate => "`CREATE`",
        KwCross => "`CROSS`",
        KwCurrentDate => "`CURRENT_DATE`",
        KwCurrentTime => "`CURRENT_TIME`",
        KwCurrentTimestamp => "`CURRENT_TIMESTAMP`",
        KwDatabase => "`DATABASE`",
        KwDefault => "`DEFAULT`",
        KwDeferrable => "`DEFERRABLE`",
        KwDeferred => "`DEFERRED`",
        KwDelete => "`DELETE`",
        KwDesc => "`DESC`",
        KwDetach => "`DETACH`",
        KwDistinct => "`DISTINCT`",
        KwDrop => "`DROP`",
        KwEach => "`EACH`",
        KwElse => "`ELSE`",
        KwEnd => "`END`",
        KwEscape => "`ESCAPE`",
        KwExcept => "`EXCEPT`",
        KwExclusive => "`EXCLUSIVE`",
        KwExists => "`EXISTS`",
        KwExplain => "`EXPLAIN`",
        KwFail => "`FAIL`",
        KwFor => "`FOR`",
        KwForeign => "`FOREIGN`",
        KwFrom => "`FROM`",
        KwFull => "`FULL`",
        KwGlob => "`GLOB`",
        KwGroup => "`GROUP`",
        KwHaving => "`HAVING`",
        KwIf => "`IF`",
        KwIgnore => "`IGNORE`",
        KwImmediate => "`IMMEDIATE`",
        KwIn => "`IN`",
        KwIndex => "`INDEX`",
        KwIndexed => "`INDEXED`",
        KwInitially => "`INITIALLY`",
        KwInner => "`INNER`",
        KwInsert => "`INSERT`",
        KwInstead => "`INSTEAD`",
        KwIntersect => "`INTERSECT`",
        KwInto => "`INTO`",
        KwIs => "`IS`",
        KwIsnull => "`ISNULL`",
        KwJoin => "`JOIN`",
        KwKey => "`KEY`",
        KwLeft => "`LEFT`",
        KwLike => "`LIKE`",
        KwLimit => "`LIMIT`",
        KwMatch => "`MATCH`",
        KwNatural => "`NATURAL`",
        KwNo => "`NO`",
        KwNot => "`NOT`",
        KwNotnull => "`NOTNULL`",
        KwNull => "`NULL`",
        KwOf => "`OF`",
        KwOffset => "`OFFSET`",
        KwOn => "`ON`",
        KwOr => "`OR`",
        KwOrder => "`ORDER`",
        KwOuter => "`OUTER`",
        KwPlan => "`PLAN`",
        KwPragma => "`PRAGMA`",
        KwPrimary => "`PRIMARY`",
        KwQuery => "`QUERY`",
        KwRaise => "`RAISE`",
        KwRecursive => "`RECURSIVE`",
        KwReferences => "`REFERENCES`",
        KwRegexp => "`REGEXP`",
        KwReindex => "`REINDEX`",
        KwRelease => "`RELEASE`",
        KwRename => "`RENAME`",
        KwReplace => "`REPLACE`",
        KwRestrict => "`RESTRICT`",
        KwRollback => "`ROLLBACK`",
        KwRow => "`ROW`",
        KwRowid => "`ROWID`",
        KwSavepoint => "`SAVEPOINT`",
        KwSelect => "`SELECT`",
        KwSet => "`SET`",
        KwTable => "`TABLE`",
        KwTemp => "`TEMP`",
        KwTemporary => "`TEMPORARY`",
        KwThen => "`THEN`",
        KwTo => "`TO`",
        KwTransaction => "`TRANSACTION`",
        KwTrigger => "`TRIGGER`",
        KwUnion => "`UNION`",
        KwUnique => "`UNIQUE`",
        KwUpdate => "`UPDATE`",
        KwUsing => "`USING`",
        KwVacuum => "`VACUUM`",
        KwValues => "`VALUES`",
        KwView => "`VIEW`",
        KwVirtual => "`VIRTUAL`",
        KwWhen => "`WHEN`",
        KwWhere => "`WHERE`",
        KwWith => "`WITH`",
        KwWithout => "`WITHOUT`",
        _ => "keyword",
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlLang {}

impl Language for SqlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<SqlLang>;
pub type SyntaxToken = rowan::SyntaxToken<SqlLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const WORDS: usize = 3;

/// 192-bit bitset of token `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; WORDS]);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet([0; WORDS]);

    /// Panics at compile time if any kind's discriminant exceeds the capacity.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = [0u64; WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as usize;
            assert!(kind < WORDS * 64, "SyntaxKind value exceeds TokenSet capacity");
            bits[kind / 64] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        TokenSet::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as usize;
        if kind >= WORDS * 64 {
            return false;
        }
        self.0[kind / 64] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut bits = self.0;
        let mut i = 0;
        while i < WORDS {
            bits[i] |= other.0[i];
            i += 1;
        }
        TokenSet(bits)
    }

    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        (0..(WORDS * 64) as u16)
            .filter(move |&i| i < __LAST as u16 && self.0[i as usize / 64] & (1 << (i % 64)) != 0)
            .map(|i| {
                // SAFETY: bounded by `__LAST`, and SyntaxKind is repr(u16)
                unsafe { std::mem::transmute::<u16, SyntaxKind>(i) }
            })
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);

    /// Tokens a `name` can be spelled with.
    pub const NAME: TokenSet = TokenSet::new(&[
        Identifier,
        BracketLiteral,
        BacktickLiteral,
        SingleQuoteString,
        DoubleQuoteString,
    ]);

    pub const STRING: TokenSet = TokenSet::new(&[SingleQuoteString, DoubleQuoteString]);

    pub const LITERAL_VALUE: TokenSet = TokenSet::new(&[
        NumericLiteral,
        SingleQuoteString,
        DoubleQuoteString,
        BlobLiteral,
        KwNull,
        KwCurrentTime,
        KwCurrentDate,
        KwCurrentTimestamp,
    ]);

    pub const UNARY_OPERATORS: TokenSet = TokenSet::new(&[Minus, Plus, Tilde, KwNot]);

    pub const COMPARISON_OPERATORS: TokenSet = TokenSet::new(&[Lt, LtEq, Gt, GtEq]);

    pub const BIT_OPERATORS: TokenSet = TokenSet::new(&[Shl, Shr, Amp, Pipe]);

    pub const ADD_OPERATORS: TokenSet = TokenSet::new(&[Plus, Minus]);

    pub const MUL_OPERATORS: TokenSet = TokenSet::new(&[Star, Slash, Percent]);

    /// Single-token equivalence operators; `IS NOT` is matched separately.
    pub const EQUIVALENCE_OPERATORS: TokenSet = TokenSet::new(&[
        EqEq, Eq, NotEq, LtGt, KwIs, KwIn, KwLike, KwGlob, KwMatch, KwRegexp,
    ]);

    pub const LIKE_OPERATORS: TokenSet = TokenSet::new(&[KwLike, KwGlob, KwRegexp, KwMatch]);

    pub const CONFLICT_RESOLUTIONS: TokenSet =
        TokenSet::new(&[KwRollback, KwAbort, KwFail, KwIgnore, KwReplace]);

    /// Statement-level synchronization point.
    pub const STMT_RECOVERY: TokenSet = TokenSet::new(&[Semicolon]);
}
