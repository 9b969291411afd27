//! Porter stemmer (M.F. Porter, 1980)
//!
//! Works on ASCII lowercase bytes. The precomputed tokens in the corpus file
//! were produced with the same rules, so query stems line up with them.

/// Stem a single word.
///
/// The word is trimmed and lowercased first. Words of two characters or less
/// and words containing non-ASCII characters are returned without stemming.
pub fn stem(word: &str) -> String {
    let word = word.trim().to_lowercase();
    if word.len() <= 2 || !word.is_ascii() {
        return word;
    }

    let mut stemmer = Stemmer::new(&word);
    stemmer.step1ab();
    if stemmer.b.len() > 1 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }
    // Only ASCII bytes are ever written
    String::from_utf8(stemmer.b).unwrap_or(word)
}

struct Stemmer {
    /// Current word; its length plays the role of Porter's `k + 1`
    b: Vec<u8>,
    /// Length of the stem in front of the suffix matched by the last `ends`
    j: usize,
}

impl Stemmer {
    fn new(word: &str) -> Self {
        Self {
            b: word.as_bytes().to_vec(),
            j: 0,
        }
    }

    /// True if `b[i]` is a consonant
    fn cons(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in `b[..j]`
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i >= self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i >= self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i >= self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.cons(i))
    }

    /// `b[i-1..=i]` is a double consonant
    fn double_c(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.cons(i)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and the last one is not w, x or y
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        let suffix = suffix.as_bytes();
        if suffix.len() > self.b.len() || !self.b.ends_with(suffix) {
            return false;
        }
        self.j = self.b.len() - suffix.len();
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.m() > 0 {
            self.set_to(replacement);
        }
    }

    fn last(&self) -> u8 {
        self.b[self.b.len() - 1]
    }

    /// Plurals and -ed / -ing
    fn step1ab(&mut self) {
        if self.last() == b's' {
            if self.ends("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.m() > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.b.truncate(self.j);
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_c(self.b.len() - 1) {
                if !matches!(self.last(), b'l' | b's' | b'z') {
                    self.b.pop();
                }
            } else {
                self.j = self.b.len();
                if self.m() == 1 && self.cvc(self.b.len() - 1) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let last = self.b.len() - 1;
            self.b[last] = b'i';
        }
    }

    /// Double suffixes to single ones
    fn step2(&mut self) {
        const RULES: &[(&str, &str)] = &[
            ("ational", "ate"),
            ("tional", "tion"),
            ("enci", "ence"),
            ("anci", "ance"),
            ("izer", "ize"),
            ("abli", "able"),
            ("alli", "al"),
            ("entli", "ent"),
            ("eli", "e"),
            ("ousli", "ous"),
            ("ization", "ize"),
            ("ation", "ate"),
            ("ator", "ate"),
            ("alism", "al"),
            ("iveness", "ive"),
            ("fulness", "ful"),
            ("ousness", "ous"),
            ("aliti", "al"),
            ("iviti", "ive"),
            ("biliti", "ble"),
        ];
        self.apply_first(RULES);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        const RULES: &[(&str, &str)] = &[
            ("icate", "ic"),
            ("ative", ""),
            ("alize", "al"),
            ("iciti", "ic"),
            ("ical", "ic"),
            ("ful", ""),
            ("ness", ""),
        ];
        self.apply_first(RULES);
    }

    /// Applies the first matching rule. A matching suffix stops the search even
    /// when the stem is too short to be rewritten.
    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Drop -ant, -ence etc. in context <c>vcvc<v>
    fn step4(&mut self) {
        const SUFFIXES: &[&str] = &[
            "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent",
            "ion", "ou", "ism", "ate", "iti", "ous", "ive", "ize",
        ];
        let mut matched = false;
        for suffix in SUFFIXES {
            if self.ends(suffix) {
                matched = *suffix != "ion"
                    || (self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't'));
                break;
            }
        }
        if matched && self.m() > 1 {
            self.b.truncate(self.j);
        }
    }

    /// Remove a final -e and reduce -ll
    fn step5(&mut self) {
        self.j = self.b.len();
        let k = self.b.len() - 1;
        if self.b[k] == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(k - 1)) {
                self.b.pop();
                // Trailing vowel does not change m()
                self.j = self.b.len();
            }
        }
        let k = self.b.len() - 1;
        if self.b[k] == b'l' && self.double_c(k) && self.m() > 1 {
            self.b.pop();
        }
    }
}
