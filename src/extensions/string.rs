pub trait ToDashSeparators {
    /// Returns a copy with all `/` replaced by `-` and leading/trailing
    /// whitespace trimmed.
    fn to_dash_separators(&self) -> String;
}

impl ToDashSeparators for str {
    fn to_dash_separators(&self) -> String {
        self.trim().replace('/', "-")
    }
}

impl ToDashSeparators for String {
    fn to_dash_separators(&self) -> String {
        self.as_str().to_dash_separators()
    }
}

pub trait ContainsIgnoreCase {
    /// Case-insensitive substring test; an empty needle always matches.
    fn contains_ignore_case(&self, needle: &str) -> bool;
}

impl ContainsIgnoreCase for str {
    fn contains_ignore_case(&self, needle: &str) -> bool {
        self.to_lowercase().contains(&needle.to_lowercase())
    }
}

pub trait StableHash {
    /// 31-multiplier hash over UTF-16 code units, wrapping on overflow.
    /// Identical across runs and platforms.
    fn stable_hash(&self) -> i32;
}

impl StableHash for str {
    fn stable_hash(&self) -> i32 {
        self.encode_utf16().fold(0i32, |h, unit| {
            (unit as i32).wrapping_add(h.wrapping_shl(5).wrapping_sub(h))
        })
    }
}
