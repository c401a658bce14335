//! almac-i18n - Localized Keyword Spellings and Diagnostic Messages
//!
//! Alma keyword text varies by locale: the lexer never hard-codes keyword
//! strings, it asks the active [`Messages`] catalog for the spellings of
//! each abstract [`Keyword`] at construction time and builds its lookup
//! table from the answers. The same catalog renders diagnostic templates
//! for the lexer's errors and warnings.
//!
//! # Examples
//!
//! ```
//! use almac_i18n::{DiagnosticId, Keyword, Locale, Messages};
//!
//! let messages = Messages::new(Locale::En);
//! assert_eq!(messages.keyword_spellings(Keyword::Program), &["program"]);
//! assert_eq!(
//!     messages.render(DiagnosticId::UnknownToken, &["?"]),
//!     "unknown token '?'"
//! );
//!
//! let german = Messages::new(Locale::De);
//! assert_eq!(german.keyword_spellings(Keyword::Timeout), &["zeitlimit"]);
//! ```

#![warn(missing_docs)]

use std::fmt;
use std::str::FromStr;

/// A supported message locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (the default).
    #[default]
    En,
    /// German.
    De,
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en_US" | "en_GB" => Ok(Locale::En),
            "de" | "de_DE" | "de_AT" | "de_CH" => Ok(Locale::De),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::De => write!(f, "de"),
        }
    }
}

/// Error returned when parsing an unsupported locale tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale '{}'", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

/// The abstract reserved words of Alma, independent of spelling.
///
/// The concrete text of each keyword comes from the locale catalog; a
/// keyword may have more than one accepted spelling (see
/// [`Messages::keyword_spellings`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Keyword {
    Program,
    Interactive,
    Procedure,
    Function,
    Return,
    If,
    Then,
    Else,
    Repeat,
    Foreach,
    In,
    While,
    Switch,
    To,
    Let,
    Not,
    Div,
    Mod,
    Type,
    Is,
    Record,
    Variant,
    Case,
    Field,
    Timeout,
}

impl Keyword {
    /// All keywords, for building lookup tables.
    pub const ALL: [Keyword; 25] = [
        Keyword::Program,
        Keyword::Interactive,
        Keyword::Procedure,
        Keyword::Function,
        Keyword::Return,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::Repeat,
        Keyword::Foreach,
        Keyword::In,
        Keyword::While,
        Keyword::Switch,
        Keyword::To,
        Keyword::Let,
        Keyword::Not,
        Keyword::Div,
        Keyword::Mod,
        Keyword::Type,
        Keyword::Is,
        Keyword::Record,
        Keyword::Variant,
        Keyword::Case,
        Keyword::Field,
        Keyword::Timeout,
    ];
}

/// Identifiers for the lexer's diagnostic message templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticId {
    /// A character that starts no token. Argument 0: the character.
    UnknownToken,
    /// An identifier beginning with a quote.
    IdentifierMustStartWithAlphabetic,
    /// A multi-digit numeric literal beginning with `0`.
    NumericConstantLeadingZero,
    /// A string constant not closed before newline or end of input.
    UnclosedStringConstant,
    /// A block comment or pragma not closed before end of input.
    UnclosedMultilineComment,
    /// A comment or pragma still open when the whole stream is exhausted.
    PrematureEndOfFile,
    /// An unrecognized pragma directive. Argument 0: the directive name.
    UnknownPragma,
}

/// A message catalog bound to one locale.
///
/// `Messages` is a pure lookup: it holds no mutable state and every query
/// is a table access. The lexer constructs one at startup and keeps it for
/// its whole lifetime.
#[derive(Clone, Copy, Debug)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Creates a catalog for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the locale this catalog is bound to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns every accepted spelling of a keyword in this locale.
    ///
    /// Most keywords have exactly one spelling; `switch` has a second
    /// accepted spelling in every locale.
    pub fn keyword_spellings(&self, keyword: Keyword) -> &'static [&'static str] {
        match self.locale {
            Locale::En => en::keyword(keyword),
            Locale::De => de::keyword(keyword),
        }
    }

    /// Returns the raw template for a diagnostic, with `{n}` placeholders.
    pub fn template(&self, id: DiagnosticId) -> &'static str {
        match self.locale {
            Locale::En => en::template(id),
            Locale::De => de::template(id),
        }
    }

    /// Renders a diagnostic template, substituting `{0}`, `{1}`, ... with
    /// the given arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use almac_i18n::{DiagnosticId, Locale, Messages};
    ///
    /// let messages = Messages::new(Locale::En);
    /// let text = messages.render(DiagnosticId::UnknownPragma, &["FROB"]);
    /// assert_eq!(text, "unknown pragma directive 'FROB'");
    /// ```
    pub fn render(&self, id: DiagnosticId, args: &[&str]) -> String {
        let mut text = self.template(id).to_string();
        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{}}}", i), arg);
        }
        text
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

mod en {
    use super::{DiagnosticId, Keyword};

    pub(super) fn keyword(keyword: Keyword) -> &'static [&'static str] {
        match keyword {
            Keyword::Program => &["program"],
            Keyword::Interactive => &["interactive"],
            Keyword::Procedure => &["procedure"],
            Keyword::Function => &["function"],
            Keyword::Return => &["return"],
            Keyword::If => &["if"],
            Keyword::Then => &["then"],
            Keyword::Else => &["else"],
            Keyword::Repeat => &["repeat"],
            Keyword::Foreach => &["foreach"],
            Keyword::In => &["in"],
            Keyword::While => &["while"],
            Keyword::Switch => &["switch", "select"],
            Keyword::To => &["to"],
            Keyword::Let => &["let"],
            Keyword::Not => &["not"],
            Keyword::Div => &["div"],
            Keyword::Mod => &["mod"],
            Keyword::Type => &["type"],
            Keyword::Is => &["is"],
            Keyword::Record => &["record"],
            Keyword::Variant => &["variant"],
            Keyword::Case => &["case"],
            Keyword::Field => &["field"],
            Keyword::Timeout => &["timeout"],
        }
    }

    pub(super) fn template(id: DiagnosticId) -> &'static str {
        match id {
            DiagnosticId::UnknownToken => "unknown token '{0}'",
            DiagnosticId::IdentifierMustStartWithAlphabetic => {
                "identifiers must start with an alphabetic character, not a quote"
            },
            DiagnosticId::NumericConstantLeadingZero => {
                "numeric constant '{0}' has a leading zero"
            },
            DiagnosticId::UnclosedStringConstant => "unclosed string constant",
            DiagnosticId::UnclosedMultilineComment => "unclosed multiline comment",
            DiagnosticId::PrematureEndOfFile => {
                "premature end of file: comment opened here is never closed"
            },
            DiagnosticId::UnknownPragma => "unknown pragma directive '{0}'",
        }
    }
}

mod de {
    use super::{DiagnosticId, Keyword};

    pub(super) fn keyword(keyword: Keyword) -> &'static [&'static str] {
        match keyword {
            Keyword::Program => &["programm"],
            Keyword::Interactive => &["interaktiv"],
            Keyword::Procedure => &["prozedur"],
            Keyword::Function => &["funktion"],
            Keyword::Return => &["ergebnis"],
            Keyword::If => &["falls"],
            Keyword::Then => &["dann"],
            Keyword::Else => &["sonst"],
            Keyword::Repeat => &["wiederhole"],
            Keyword::Foreach => &["fuerjedes"],
            Keyword::In => &["in"],
            Keyword::While => &["solange"],
            Keyword::Switch => &["fallweise", "unterscheide"],
            Keyword::To => &["bis"],
            Keyword::Let => &["sei"],
            Keyword::Not => &["nicht"],
            Keyword::Div => &["div"],
            Keyword::Mod => &["mod"],
            Keyword::Type => &["typ"],
            Keyword::Is => &["ist"],
            Keyword::Record => &["rekord"],
            Keyword::Variant => &["variante"],
            Keyword::Case => &["fall"],
            Keyword::Field => &["feld"],
            Keyword::Timeout => &["zeitlimit"],
        }
    }

    pub(super) fn template(id: DiagnosticId) -> &'static str {
        match id {
            DiagnosticId::UnknownToken => "unbekanntes Token '{0}'",
            DiagnosticId::IdentifierMustStartWithAlphabetic => {
                "Bezeichner muessen mit einem Buchstaben beginnen, nicht mit einem Apostroph"
            },
            DiagnosticId::NumericConstantLeadingZero => {
                "Zahlkonstante '{0}' beginnt mit einer fuehrenden Null"
            },
            DiagnosticId::UnclosedStringConstant => "nicht geschlossene Zeichenkette",
            DiagnosticId::UnclosedMultilineComment => "nicht geschlossener mehrzeiliger Kommentar",
            DiagnosticId::PrematureEndOfFile => {
                "vorzeitiges Dateiende: hier geoeffneter Kommentar wird nie geschlossen"
            },
            DiagnosticId::UnknownPragma => "unbekannte Pragma-Direktive '{0}'",
        }
    }
}
