use std::{
    borrow::{Borrow, Cow},
    fmt,
};

/// An NBT string, kept as the raw bytes found in the input.
///
/// Minecraft writes strings in Java's "modified UTF-8" (CESU-8 with a two byte
/// encoding of NUL). The format itself does not validate this, so the decoder
/// never rejects a string because of its contents. Converting to text is
/// done on demand with [`to_str`][NbtString::to_str] or
/// [`to_string_lossy`][NbtString::to_string_lossy].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NbtString(Vec<u8>);

impl NbtString {
    /// Wrap raw bytes as read from NBT.
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw bytes as they appeared on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the string as modified UTF-8. Returns `None` if the bytes are
    /// not valid. Plain ASCII and most UTF-8 is borrowed without copying.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        cesu8::from_java_cesu8(&self.0).ok()
    }

    /// Decode the string as modified UTF-8, replacing anything invalid with
    /// U+FFFD.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self.to_str() {
            Some(s) => s,
            None => String::from_utf8_lossy(&self.0),
        }
    }

    /// Whether these bytes are what `s` encodes to in modified UTF-8.
    pub(crate) fn matches(&self, s: &str) -> bool {
        self.0.as_slice() == &*cesu8::to_java_cesu8(s)
    }
}

// Hash and Eq of the wrapper are those of the bytes.
impl Borrow<[u8]> for NbtString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for NbtString {
    fn from(s: &str) -> Self {
        Self(cesu8::to_java_cesu8(s).into_owned())
    }
}

impl From<String> for NbtString {
    fn from(s: String) -> Self {
        NbtString::from(s.as_str())
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Some(s) => fmt::Debug::fmt(&s, f),
            None => write!(f, "NbtString({:?})", self.0),
        }
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl<'a> PartialEq<&'a str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<NbtString> for str {
    fn eq(&self, other: &NbtString) -> bool {
        other.matches(self)
    }
}

impl<'a> PartialEq<NbtString> for &'a str {
    fn eq(&self, other: &NbtString) -> bool {
        other.matches(self)
    }
}
