//! Parsing of field-path strings into segments.

use std::fmt;

use super::FieldPathError;

/// One step of a parsed field path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// A named field of an object.
    Field(String),
    /// A position in a list.
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => write!(f, "field '{name}'"),
            Self::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// Parse `path` into its segments.
///
/// Bracketed segments holding only ASCII digits are list indices; any other
/// bracketed text is a field name, which lets names contain dots.
///
/// # Errors
///
/// Returns [`FieldPathError::InvalidPath`] for empty paths, empty segments,
/// unbalanced brackets, or text directly following a closing bracket.
///
/// # Examples
///
/// ```
/// use compose_patch::fieldpath::{Segment, parse};
///
/// let segments = parse("metadata.annotations[example.org/owner]")?;
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Field("metadata".into()),
///         Segment::Field("annotations".into()),
///         Segment::Field("example.org/owner".into()),
///     ]
/// );
/// # Ok::<_, compose_patch::FieldPathError>(())
/// ```
pub fn parse(path: &str) -> Result<Vec<Segment>, FieldPathError> {
    let mut segments = Vec::new();
    let mut field = String::new();
    let mut after_bracket = false;
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if field.is_empty() && !after_bracket {
                    return Err(FieldPathError::invalid(path, "empty field name"));
                }
                if !field.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut field)));
                }
                after_bracket = false;
                if chars.as_str().is_empty() {
                    return Err(FieldPathError::invalid(path, "trailing '.'"));
                }
            }
            '[' => {
                if !field.is_empty() {
                    segments.push(Segment::Field(std::mem::take(&mut field)));
                }
                segments.push(parse_bracket(path, &mut chars)?);
                after_bracket = true;
            }
            ']' => return Err(FieldPathError::invalid(path, "unexpected ']'")),
            other => {
                if after_bracket {
                    return Err(FieldPathError::invalid(path, "expected '.' or '[' after ']'"));
                }
                field.push(other);
            }
        }
    }

    if !field.is_empty() {
        segments.push(Segment::Field(field));
    }
    if segments.is_empty() {
        return Err(FieldPathError::invalid(path, "empty path"));
    }
    Ok(segments)
}

fn parse_bracket(path: &str, chars: &mut std::str::Chars<'_>) -> Result<Segment, FieldPathError> {
    let mut inner = String::new();
    loop {
        match chars.next() {
            Some(']') => break,
            Some(ch) => inner.push(ch),
            None => return Err(FieldPathError::invalid(path, "unterminated '['")),
        }
    }
    if inner.is_empty() {
        return Err(FieldPathError::invalid(path, "empty brackets"));
    }
    if inner.bytes().all(|b| b.is_ascii_digit()) {
        let index = inner
            .parse()
            .map_err(|_| FieldPathError::invalid(path, format!("index {inner} is too large")))?;
        return Ok(Segment::Index(index));
    }
    Ok(Segment::Field(inner))
}
