//! The jagged array entity: starts/stops bounds over a content payload

use crate::convert;
use crate::dispatch;
use crate::error::{JaggedError, Result};
use crate::types::{Array, ArrayViewMut, Content, ContentType, IndexType};
use tracing::debug;

/// Row bounds widened to `i64`, remembering the source dimensionality
#[derive(Debug, Clone, PartialEq)]
struct Bounds {
    values: Vec<i64>,
    ndim: usize,
}

impl Bounds {
    /// Normalize, then check dimensionality and sign before anything is kept
    fn from_view(name: &'static str, view: &mut ArrayViewMut<'_>) -> Result<Self> {
        let values = dispatch::index_values(name, view)?;
        if view.ndim() < 1 {
            return Err(JaggedError::MissingDimension { name });
        }
        convert::check_non_negative(name, &values)?;
        Ok(Self {
            values,
            ndim: view.ndim(),
        })
    }

    fn from_values(name: &'static str, values: Vec<i64>) -> Result<Self> {
        convert::check_non_negative(name, &values)?;
        Ok(Self { values, ndim: 1 })
    }
}

/// A sequence of variable-length rows packed into one content buffer
///
/// Row `i` covers `content[starts[i]..stops[i]]`. Bounds are validated for
/// sign when assigned; whether they fit the content is only checked when a
/// row is read.
#[derive(Debug, Clone, PartialEq)]
pub struct JaggedArray {
    starts: Bounds,
    stops: Bounds,
    content: Content,
}

impl JaggedArray {
    /// Build from caller-supplied starts and stops of any integer type
    ///
    /// Both buffers are normalized to host order in place.
    pub fn new(
        starts: &mut ArrayViewMut<'_>,
        stops: &mut ArrayViewMut<'_>,
        content: impl Into<Content>,
    ) -> Result<Self> {
        let starts = Bounds::from_view("starts", starts)?;
        let stops = Bounds::from_view("stops", stops)?;
        Self::from_parts(starts, stops, content.into())
    }

    /// Contiguous rows `[offsets[i], offsets[i + 1])`
    pub fn from_offsets<T: IndexType>(offsets: &[T], content: impl Into<Content>) -> Result<Self> {
        let offsets = convert::to_i64("offsets", offsets)?;
        if offsets.is_empty() {
            return Err(JaggedError::EmptyOffsets);
        }
        let starts = Bounds::from_values("starts", offsets[..offsets.len() - 1].to_vec())?;
        let stops = Bounds::from_values("stops", offsets[1..].to_vec())?;
        Self::from_parts(starts, stops, content.into())
    }

    /// Contiguous rows with the given lengths, starting at 0
    pub fn from_counts<T: IndexType>(counts: &[T], content: impl Into<Content>) -> Result<Self> {
        let offsets = convert::counts_to_offsets(counts)?;
        Self::from_offsets(&offsets, content)
    }

    fn from_parts(starts: Bounds, stops: Bounds, content: Content) -> Result<Self> {
        if let Content::Table(_) = content {
            return Err(JaggedError::UnsupportedContent(ContentType::Table));
        }
        debug!(
            rows = starts.values.len(),
            content_type = %content.content_type().as_char(),
            "created jagged array"
        );
        Ok(Self {
            starts,
            stops,
            content,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.starts.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn starts(&self) -> &[i64] {
        &self.starts.values
    }

    pub fn stops(&self) -> &[i64] {
        &self.stops.values
    }

    /// Replace the starts; nothing changes if validation fails
    pub fn set_starts(&mut self, starts: &mut ArrayViewMut<'_>) -> Result<()> {
        self.starts = Bounds::from_view("starts", starts)?;
        debug!(rows = self.starts.values.len(), "replaced starts");
        Ok(())
    }

    /// Replace the stops; nothing changes if validation fails
    pub fn set_stops(&mut self, stops: &mut ArrayViewMut<'_>) -> Result<()> {
        self.stops = Bounds::from_view("stops", stops)?;
        debug!(len = self.stops.values.len(), "replaced stops");
        Ok(())
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn content_array(&self) -> Result<&Array> {
        match &self.content {
            Content::Array(a) => Ok(a),
            other => Err(wrong_content(ContentType::Array, other)),
        }
    }

    pub fn content_array_mut(&mut self) -> Result<&mut Array> {
        match &mut self.content {
            Content::Array(a) => Ok(a),
            other => Err(wrong_content(ContentType::Array, other)),
        }
    }

    /// Replace flat content; the content type never changes
    pub fn set_content_array(&mut self, array: Array) -> Result<()> {
        *self.content_array_mut()? = array;
        debug!("replaced array content");
        Ok(())
    }

    pub fn content_jagged(&self) -> Result<&JaggedArray> {
        match &self.content {
            Content::Jagged(j) => Ok(j.as_ref()),
            other => Err(wrong_content(ContentType::Jagged, other)),
        }
    }

    pub fn content_jagged_mut(&mut self) -> Result<&mut JaggedArray> {
        match &mut self.content {
            Content::Jagged(j) => Ok(j.as_mut()),
            other => Err(wrong_content(ContentType::Jagged, other)),
        }
    }

    /// Replace nested content; the content type never changes
    pub fn set_content_jagged(&mut self, jagged: JaggedArray) -> Result<()> {
        *self.content_jagged_mut()? = jagged;
        debug!("replaced jagged content");
        Ok(())
    }

    /// Row lengths, `stops[i] - starts[i]`
    pub fn counts(&self) -> Result<Vec<i64>> {
        self.check_row_lengths()?;
        self.starts()
            .iter()
            .zip(self.stops())
            .enumerate()
            .map(|(row, (&start, &stop))| {
                if stop < start {
                    Err(JaggedError::StopBeforeStart { row, start, stop })
                } else {
                    Ok(stop - start)
                }
            })
            .collect()
    }

    /// Row index of every content position up to the largest stop
    pub fn parents(&self) -> Result<Vec<i64>> {
        self.check_row_lengths()?;
        convert::starts_stops_to_parents(self.starts(), self.stops())
    }

    pub(crate) fn check_row_lengths(&self) -> Result<()> {
        if self.starts.values.len() > self.stops.values.len() {
            return Err(JaggedError::StartsLongerThanStops {
                starts: self.starts.values.len(),
                stops: self.stops.values.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_dimensions(&self) -> Result<()> {
        if self.starts.ndim != self.stops.ndim {
            return Err(JaggedError::DimensionMismatch {
                starts: self.starts.ndim,
                stops: self.stops.ndim,
            });
        }
        Ok(())
    }
}

fn wrong_content(expected: ContentType, actual: &Content) -> JaggedError {
    JaggedError::WrongContentType {
        expected,
        actual: actual.content_type(),
    }
}
