//! Character set building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A toggleable group of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Declaration order; also the order alphabets are concatenated in.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Display name, as shown in the rendered view.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase",
            CharClass::Lowercase => "Lowercase",
            CharClass::Digit => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }

    /// Single-letter code used by `--classes` and the settings file.
    pub fn code(self) -> char {
        match self {
            CharClass::Uppercase => 'u',
            CharClass::Lowercase => 'l',
            CharClass::Digit => 'd',
            CharClass::Symbol => 's',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'u' => Some(CharClass::Uppercase),
            'l' => Some(CharClass::Lowercase),
            'd' => Some(CharClass::Digit),
            's' => Some(CharClass::Symbol),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 0b0001,
            CharClass::Lowercase => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Symbol => 0b1000,
        }
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub const fn all_but(class: CharClass) -> Self {
        ClassSet(Self::all().0 & !class.bit())
    }

    pub fn with(mut self, class: CharClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in declaration order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    /// Parse a string of class codes, e.g. `"uld"`.
    pub fn from_codes(codes: &str) -> Option<Self> {
        codes
            .chars()
            .try_fold(ClassSet::empty(), |set, c| Some(set.with(CharClass::from_code(c)?)))
    }

    pub fn codes(self) -> String {
        self.iter().map(CharClass::code).collect()
    }
}

/// Build the alphabet for the enabled classes, in declaration order.
pub fn build(classes: ClassSet) -> Vec<char> {
    classes.iter().flat_map(|c| c.alphabet().chars()).collect()
}

/// Alphabet size for the enabled classes (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}
