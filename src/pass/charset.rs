//! Character classes and selection building for password generation.

/// Number of distinct character classes.
pub const NSET: usize = 4;

/// A fixed contiguous ASCII range to draw password characters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Punctuation,
}

impl CharClass {
    /// First codepoint of the class's ASCII span.
    pub const fn start(self) -> u8 {
        match self {
            CharClass::Upper => b'A',
            CharClass::Lower => b'a',
            CharClass::Digit => b'0',
            CharClass::Punctuation => b'!',
        }
    }

    /// Number of codepoints in the class's ASCII span.
    pub const fn size(self) -> u32 {
        match self {
            CharClass::Upper | CharClass::Lower => 26,
            CharClass::Digit => 10,
            CharClass::Punctuation => 15,
        }
    }

    pub fn contains(self, byte: u8) -> bool {
        byte >= self.start() && u32::from(byte - self.start()) < self.size()
    }
}

/// Ordered set of the classes one invocation draws from.
///
/// Holds at most `NSET` distinct classes; repeats are dropped, keeping the
/// first occurrence. Built once per run and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Selection {
    classes: [CharClass; NSET],
    len: usize,
}

impl Selection {
    pub fn new() -> Self {
        Selection {
            classes: [CharClass::Upper; NSET],
            len: 0,
        }
    }

    /// Add a class; a class already present is ignored.
    pub fn push(&mut self, class: CharClass) {
        if self.contains(class) {
            return;
        }
        // Unreachable with deduplication: NSET distinct classes exist.
        assert!(self.len < NSET, "selection: more than {NSET} classes");
        self.classes[self.len] = class;
        self.len += 1;
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.classes().contains(&class)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> CharClass {
        self.classes()[index]
    }

    pub fn classes(&self) -> &[CharClass] {
        &self.classes[..self.len]
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a `Selection` from classes in the order the flags were given.
pub fn compose(classes: &[CharClass]) -> Selection {
    let mut selection = Selection::new();
    for &class in classes {
        selection.push(class);
    }
    selection
}
