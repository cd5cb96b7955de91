//! Location of a value inside the document being deserialized.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::slice::Iter;

/// One step into a document: an object property or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl Display for Segment {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Key(key) => formatter.write_str(key),
            Segment::Index(index) => formatter.write_str(itoa::Buffer::new().format(*index)),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.into())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// Ordered segments from the document root down to the current value.
///
/// An empty path is the root itself. Rendering joins the segments with `.`
/// and does not escape them, so the key `"a.b"` prints the same as the two
/// keys `"a"`, `"b"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Path::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.segments.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    pub fn iter(&self) -> Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                formatter.write_str(".")?;
            }
            Display::fmt(segment, formatter)?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path { segments }
    }
}

impl<S: Into<Segment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_dotted() {
        let mut path = Path::root();
        assert_eq!(path.to_string(), "");
        path.push("items");
        path.push(3usize);
        path.push("name");
        assert_eq!(path.to_string(), "items.3.name");
        assert_eq!(path.pop(), Some(Segment::Key("name".into())));
        assert_eq!(path.to_string(), "items.3");
    }

    #[test]
    fn dots_in_keys_are_not_escaped() {
        let one: Path = ["a.b"].into_iter().collect();
        let two: Path = ["a", "b"].into_iter().collect();
        assert_ne!(one, two);
        assert_eq!(one.to_string(), two.to_string());
    }
}
