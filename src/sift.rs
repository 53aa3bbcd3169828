//! Sift routines that restore the interval-heap invariant after a single
//! element has been perturbed.
//!
//! The layout places interval `k` at slots `(2k, 2k + 1)`: even slots are
//! left (minimum) bounds, odd slots are right (maximum) bounds, and
//! interval `k > 0` nests inside interval `(k - 1) / 2`. When the slice has
//! odd length the final slot is a singleton interval whose lone element
//! counts as both of its bounds.
//!
//! Every routine takes a `limit_child` slot index. A repair may modify the
//! parent interval of `limit_child` and anything below it, but nothing
//! nearer the root. Passing `2` leaves the repair unrestricted; the bulk
//! build passes the first-child slot of the interval it is processing so
//! that the layers it has not reached yet stay untouched.
//!
//! The comparator is fallible. On `Err` each routine walks its movement
//! path backwards until every element is back in the slot it occupied on
//! entry, then propagates the error. All movement is by `swap`, so the
//! element in flight always lives in a real slot and nothing can be lost
//! mid-repair.

/// Same-side parent of a bound: the min parent of a min bound, the max
/// parent of a max bound.
///
/// `(index / 2 - 1) | 1` is always the parent interval's max slot; the
/// final XOR steps over to the min slot when `MIN` is set.
#[inline]
fn parent_of<const MIN: bool>(index: usize) -> usize {
    debug_assert!(index >= 2);
    ((index / 2 - 1) | 1) ^ (MIN as usize)
}

/// Bubbles the element at `origin` toward the root along same-side
/// parents.
///
/// The invariant must hold everywhere except that the element at `origin`
/// may compare past its same-side parent. Equivalent elements are never
/// exchanged, so the element settles at the deepest slot where the nesting
/// holds.
pub(crate) fn sift_up<T, E, F, const MIN: bool>(
    v: &mut [T],
    origin: usize,
    limit_child: usize,
    less: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    debug_assert!(limit_child >= 2);
    let mut index = origin;
    while index >= limit_child {
        let parent = parent_of::<MIN>(index);
        let misplaced = if MIN {
            less(&v[index], &v[parent])
        } else {
            less(&v[parent], &v[index])
        };
        match misplaced {
            Ok(true) => {
                v.swap(index, parent);
                index = parent;
            }
            Ok(false) => break,
            Err(error) => {
                // Retrace the parent chain from the origin, shuttling each
                // displaced element back through the slot at `index`.
                let mut walk = origin;
                while walk != index {
                    v.swap(walk, index);
                    walk = parent_of::<MIN>(walk);
                }
                return Err(error);
            }
        }
    }
    Ok(())
}

/// Leaf repair for a min bound holding an arbitrary element.
///
/// The companion is the max bound of the same interval. The singleton slot
/// has no companion of its own and borrows the parent interval's max
/// bound; a one-element slice needs no work at all. If the element sits on
/// the wrong side of the interval it crosses over and rises through the
/// max heap instead.
pub(crate) fn sift_leaf_min<T, E, F>(
    v: &mut [T],
    index: usize,
    limit_child: usize,
    less: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    let mut companion = index | 1;
    if companion >= len {
        if companion == 1 {
            return Ok(());
        }
        companion = (companion / 2 - 1) | 1;
    }
    if less(&v[companion], &v[index])? {
        v.swap(index, companion);
        if let Err(error) = sift_up::<T, E, F, false>(v, companion, limit_child, less) {
            v.swap(index, companion);
            return Err(error);
        }
        Ok(())
    } else {
        sift_up::<T, E, F, true>(v, index, limit_child, less)
    }
}

/// Leaf repair for a max bound holding an arbitrary element.
///
/// Bounds past the last parent pair with the min slot of their own
/// interval; earlier max bounds look down at their left child's min slot,
/// which may be the trailing singleton.
pub(crate) fn sift_leaf_max<T, E, F>(
    v: &mut [T],
    index: usize,
    limit_child: usize,
    less: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    debug_assert!(index < len && len >= 2);
    let companion = if (len - 1) / 2 < index {
        index ^ 1
    } else {
        index * 2
    };
    if less(&v[index], &v[companion])? {
        v.swap(index, companion);
        if let Err(error) = sift_up::<T, E, F, true>(v, companion, limit_child, less) {
            v.swap(index, companion);
            return Err(error);
        }
        Ok(())
    } else {
        sift_up::<T, E, F, false>(v, index, limit_child, less)
    }
}

/// Repairs the invariant after the slot at `index` gained a new element
/// while every other slot already satisfied it. Dispatch follows the
/// slot's side; used after appending to the backing storage.
pub(crate) fn sift_leaf<T, E, F>(v: &mut [T], index: usize, less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    if index & 1 == 1 {
        sift_leaf_max(v, index, 2, less)
    } else {
        sift_leaf_min(v, index, 2, less)
    }
}

/// Walks the element at `origin` down the tree: at each step the more
/// extreme same-side child bound moves up into the vacated slot, until at
/// most one child interval remains. The displaced element then settles
/// through the leaf repair, which also resolves an element that belongs on
/// the other side of its interval.
pub(crate) fn sift_down<T, E, F, const MIN: bool>(
    v: &mut [T],
    origin: usize,
    limit_child: usize,
    less: &mut F,
) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    match run_down::<T, E, F, MIN>(v, origin, limit_child, less) {
        Ok(()) => Ok(()),
        Err((mut index, error)) => {
            // A failed comparison cannot be retried; put every element on
            // the descent path back where it came from.
            while index > origin {
                let parent = parent_of::<MIN>(index);
                v.swap(parent, index);
                index = parent;
            }
            Err(error)
        }
    }
}

/// Descent body of [`sift_down`]. An `Err` carries the slot the walk had
/// reached, so the caller can unwind the path.
fn run_down<T, E, F, const MIN: bool>(
    v: &mut [T],
    origin: usize,
    limit_child: usize,
    less: &mut F,
) -> Result<(), (usize, E)>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }
    let mut index = origin;
    // One past the deepest slot whose interval still has two child
    // intervals on this side. Left-bound parents run out one interval
    // earlier when the length is a multiple of four.
    let end_parent = len / 2 - if MIN && len % 4 == 0 { 2 } else { 1 };
    while index < end_parent {
        let mut child = index * 2 + if MIN { 2 } else { 1 };
        let second_is_extreme = if MIN {
            less(&v[child + 2], &v[child])
        } else {
            less(&v[child], &v[child + 2])
        };
        if second_is_extreme.map_err(|e| (index, e))? {
            child += 2;
        }
        v.swap(index, child);
        index = child;
    }
    // At most one child interval is left. A max bound may additionally
    // face a trailing singleton, whose lone element counts as a max bound
    // of its own interval.
    if index <= end_parent + usize::from(!MIN) {
        let child = index * 2 + if MIN { 2 } else { 1 };
        if child < len {
            if !MIN && child + 1 < len {
                let singleton_wins = less(&v[child], &v[child + 1]).map_err(|e| (index, e))?;
                if singleton_wins {
                    let child = child + 1;
                    v.swap(index, child);
                    // The element crossed into a left-bound slot; finish
                    // the repair on the min side.
                    return sift_leaf_min(v, child, limit_child, less).map_err(|e| (child, e));
                }
            }
            v.swap(index, child);
            index = child;
        }
    }
    if MIN {
        sift_leaf_min(v, index, limit_child, less).map_err(|e| (index, e))
    } else {
        sift_leaf_max(v, index, limit_child, less).map_err(|e| (index, e))
    }
}
