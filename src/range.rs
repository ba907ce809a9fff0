//! Byte spans into the sanitized document.

/// Longest sanitized document, in bytes, that [`Range`] offsets can address.
pub const MAX_TEXT_LEN: usize = u32::MAX as usize;

/// Whether every offset into a `len`-byte document fits a [`Range`].
#[inline]
pub const fn addressable(len: usize) -> bool {
    len <= MAX_TEXT_LEN
}

/// Start and end byte offsets of a document segment.
///
/// Offsets are `u32`, so a document may hold at most [`MAX_TEXT_LEN`] bytes.
/// The engine refuses longer documents before any range is built.
///
/// # Example
/// ```
/// use glossmark::Range;
///
/// let doc = "```rs\nlet x;\n```";
/// assert_eq!(Range::new(3, 5).slice(doc), "rs");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Build a span from scanner offsets.
    ///
    /// Offsets must be [`addressable`]; debug builds assert it.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The text under this span. Both ends must be char boundaries.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start as usize..self.end as usize]
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
