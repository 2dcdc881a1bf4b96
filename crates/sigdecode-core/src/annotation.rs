//! Annotation records emitted by decoders.
//!
//! Decoders emit [`Annotation`]s typed by their own closed class enum. Hosts
//! mixing decoders work with [`RawAnnotation`], which carries the class as an
//! index into the decoder's documented class table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sample clock tick; the time axis of every event and annotation.
pub type SampleIndex = u64;

/// Closed set of annotation classes produced by one decoder.
pub trait AnnotationClass: Copy + Eq + fmt::Debug + Send + 'static {
    /// Every class, ordered by [`AnnotationClass::index`].
    const ALL: &'static [Self];

    /// Position of the class in the decoder's class table.
    fn index(self) -> usize;

    /// Short identifier (e.g., `"no-press"`).
    fn id(self) -> &'static str;

    /// Human-readable description.
    fn description(self) -> &'static str;
}

/// Decoded result bounded by the samples of the events that produced it.
///
/// `texts` is ordered from most to least detailed; renderers pick the longest
/// one that fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<C> {
    pub start: SampleIndex,
    pub end: SampleIndex,
    pub class: C,
    pub texts: Vec<String>,
}

impl<C: AnnotationClass> Annotation<C> {
    pub fn new(start: SampleIndex, end: SampleIndex, class: C, texts: Vec<String>) -> Self {
        debug_assert!(start <= end, "annotation ends before it starts");
        Self {
            start,
            end,
            class,
            texts,
        }
    }

    /// Most detailed rendering, or `""` when none was provided.
    pub fn text(&self) -> &str {
        self.texts.first().map(String::as_str).unwrap_or("")
    }

    /// Drop the class type, keeping its table index.
    pub fn into_raw(self) -> RawAnnotation {
        RawAnnotation {
            start: self.start,
            end: self.end,
            class: self.class.index(),
            texts: self.texts,
        }
    }
}

/// Decoder-independent annotation: `(start, end, class index, texts)`.
///
/// # Examples
/// ```
/// use sigdecode_core::RawAnnotation;
///
/// let ann = RawAnnotation {
///     start: 10,
///     end: 20,
///     class: 0,
///     texts: vec!["#123456".to_string()],
/// };
/// assert_eq!(serde_json::to_value(&ann).unwrap()["class"], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnotation {
    pub start: SampleIndex,
    pub end: SampleIndex,
    pub class: usize,
    pub texts: Vec<String>,
}
