use crate::geometry::Rect;

/// One laid-out item: its rectangle plus caller-supplied annotations.
///
/// `label` and `value` are carried through layout untouched; the algorithms
/// never inspect them.  Records are returned in input order, so the record
/// at position `i` always describes the `i`-th input size.
#[derive(Clone, Debug, PartialEq)]
pub struct Record<L, V> {
    pub rect: Rect,
    pub label: Option<L>,
    pub value: Option<V>,
}

pub(crate) fn check_parallel<T>(expected: usize, parallel: Option<&[T]>) -> Result<(), crate::Error> {
    if let Some(parallel) = parallel {
        if parallel.len() != expected {
            return Err(crate::Error::InputLenMismatch {
                expected,
                actual: parallel.len(),
            });
        }
    }
    Ok(())
}

pub(crate) fn from_rects<L, V>(
    rects: Vec<Rect>,
    labels: Option<&[L]>,
    values: Option<&[V]>,
) -> Vec<Record<L, V>>
where
    L: Clone,
    V: Clone,
{
    rects
        .into_iter()
        .enumerate()
        .map(|(i, rect)| Record {
            rect,
            label: labels.map(|labels| labels[i].clone()),
            value: values.map(|values| values[i].clone()),
        })
        .collect()
}
