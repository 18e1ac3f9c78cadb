//! Decoration store in model coordinates.
//!
//! Decorations are only created and removed inside
//! [`DecorationMap::change_decorations`]. Changes made through the
//! [`DecorationsAccessor`] are journaled and applied as one batch when the
//! callback returns, so a query never observes half of a transaction.
//!
//! Ids are assigned from a monotonically increasing counter, which doubles as
//! the insertion sequence: decorations that start at the same position are
//! returned in the order they were added.

use crate::{
    buffer::TextSource,
    coords::{ModelPoint, ModelRange},
};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::{collections::BTreeMap, fmt, ops::Bound, sync::Arc};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecorationId(u64);

impl DecorationId {
    const MAX: Self = Self(u64::MAX);
}

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Styling attached to a decoration.
///
/// The engine treats class names as opaque tokens. `class_name` styles the
/// whole span as a block, `inline_class_name` styles every character in it,
/// and the before/after classes describe zero-width insertion markers at the
/// range's start and end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecorationOptions {
    pub class_name: Option<SmolStr>,
    pub inline_class_name: Option<SmolStr>,
    pub before_content_class_name: Option<SmolStr>,
    pub after_content_class_name: Option<SmolStr>,
}

impl DecorationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class: impl Into<SmolStr>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn inline_class_name(mut self, class: impl Into<SmolStr>) -> Self {
        self.inline_class_name = Some(class.into());
        self
    }

    pub fn before_content_class_name(mut self, class: impl Into<SmolStr>) -> Self {
        self.before_content_class_name = Some(class.into());
        self
    }

    pub fn after_content_class_name(mut self, class: impl Into<SmolStr>) -> Self {
        self.after_content_class_name = Some(class.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub id: DecorationId,
    pub range: ModelRange,
    pub options: Arc<DecorationOptions>,
}

#[derive(Debug)]
enum PendingChange {
    Add(Decoration),
    Remove(DecorationId),
}

/// Handle passed to [`DecorationMap::change_decorations`] callbacks.
///
/// Reads through the accessor see the committed decorations with this
/// transaction's pending changes applied on top.
pub struct DecorationsAccessor<'a> {
    committed: &'a DecorationMap,
    pending: &'a mut Vec<PendingChange>,
    next_id: &'a mut u64,
}

impl DecorationsAccessor<'_> {
    /// Queue a new decoration. The range is normalized; the id is usable
    /// immediately within this transaction.
    pub fn add(&mut self, range: ModelRange, options: DecorationOptions) -> DecorationId {
        let id = DecorationId(*self.next_id);
        *self.next_id += 1;

        self.pending.push(PendingChange::Add(Decoration {
            id,
            range: ModelRange::new(range.start, range.end),
            options: Arc::new(options),
        }));
        id
    }

    /// Queue removal of `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: DecorationId) {
        self.pending.push(PendingChange::Remove(id));
    }

    /// Current range of `id` as seen from inside this transaction.
    pub fn range(&self, id: DecorationId) -> Option<ModelRange> {
        for change in self.pending.iter().rev() {
            match change {
                PendingChange::Remove(removed) if *removed == id => return None,
                PendingChange::Add(decoration) if decoration.id == id => {
                    return Some(decoration.range)
                }
                _ => {}
            }
        }
        self.committed.range(id)
    }

    /// Re-enter the transaction. The nested callback sees, and adds to, the
    /// enclosing transaction's pending changes; everything still commits when
    /// the outermost callback returns.
    pub fn change_decorations<R>(&mut self, f: impl FnOnce(&mut DecorationsAccessor<'_>) -> R) -> R {
        let mut nested = DecorationsAccessor {
            committed: self.committed,
            pending: &mut *self.pending,
            next_id: &mut *self.next_id,
        };
        f(&mut nested)
    }
}

/// Decorations keyed by id and ordered by `(start, id)`.
#[derive(Debug, Default)]
pub struct DecorationMap {
    by_start: BTreeMap<(ModelPoint, DecorationId), Decoration>,
    starts: FxHashMap<DecorationId, ModelPoint>,
    next_id: u64,
    version: usize,
}

impl DecorationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with an accessor and commit everything it queued in one step.
    pub fn change_decorations<R>(
        &mut self,
        f: impl FnOnce(&mut DecorationsAccessor<'_>) -> R,
    ) -> R {
        let mut pending = Vec::new();
        let mut next_id = self.next_id;

        let result = {
            let mut accessor = DecorationsAccessor {
                committed: &*self,
                pending: &mut pending,
                next_id: &mut next_id,
            };
            f(&mut accessor)
        };

        self.next_id = next_id;
        self.commit(pending);
        result
    }

    /// Remove `old` and add `new` in a single transaction, returning the new ids
    /// in input order.
    pub fn delta_decorations(
        &mut self,
        old: &[DecorationId],
        new: impl IntoIterator<Item = (ModelRange, DecorationOptions)>,
    ) -> Vec<DecorationId> {
        self.change_decorations(|accessor| {
            for id in old {
                accessor.remove(*id);
            }
            new.into_iter()
                .map(|(range, options)| accessor.add(range, options))
                .collect()
        })
    }

    /// Decorations intersecting `range`, touching endpoints included.
    ///
    /// Ordered by start position, then by insertion order.
    pub fn decorations_overlapping(&self, range: ModelRange) -> Vec<Decoration> {
        let range = ModelRange::new(range.start, range.end);
        self.by_start
            .range(..=(range.end, DecorationId::MAX))
            .map(|(_, decoration)| decoration)
            .filter(|decoration| decoration.range.end >= range.start)
            .cloned()
            .collect()
    }

    /// Like [`DecorationMap::decorations_overlapping`], but each stored range is
    /// clamped into `buffer` before the test, so a decoration left past the
    /// end of a line or of the document by an edit matches where it renders.
    ///
    /// Ordered by clamped start position, then by insertion order. The
    /// returned decorations keep their stored ranges.
    pub fn decorations_overlapping_clipped<B: TextSource + ?Sized>(
        &self,
        range: ModelRange,
        buffer: &B,
    ) -> Vec<Decoration> {
        let range = ModelRange::new(buffer.clip_point(range.start), buffer.clip_point(range.end));

        // Stored starts past the end of the query's last line clamp onto it.
        let upper = if range.end == buffer.max_point() {
            Bound::Unbounded
        } else if range.end.column > buffer.line_length(range.end.line) {
            Bound::Included((ModelPoint::new(range.end.line, u32::MAX), DecorationId::MAX))
        } else {
            Bound::Included((range.end, DecorationId::MAX))
        };

        let mut found: Vec<(ModelPoint, &Decoration)> = self
            .by_start
            .range((Bound::Unbounded, upper))
            .filter_map(|(_, decoration)| {
                let start = buffer.clip_point(decoration.range.start);
                let end = buffer.clip_point(decoration.range.end);
                (start <= range.end && end >= range.start).then_some((start, decoration))
            })
            .collect();
        found.sort_by_key(|(start, decoration)| (*start, decoration.id));

        found
            .into_iter()
            .map(|(_, decoration)| decoration.clone())
            .collect()
    }

    pub fn decoration(&self, id: DecorationId) -> Option<&Decoration> {
        let start = self.starts.get(&id)?;
        self.by_start.get(&(*start, id))
    }

    pub fn range(&self, id: DecorationId) -> Option<ModelRange> {
        self.decoration(id).map(|decoration| decoration.range)
    }

    /// All decorations in query order.
    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.by_start.values()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Incremented once per transaction that changed something.
    pub fn version(&self) -> usize {
        self.version
    }

    fn commit(&mut self, pending: Vec<PendingChange>) {
        if pending.is_empty() {
            return;
        }

        let mut added = 0;
        let mut removed = 0;
        for change in pending {
            match change {
                PendingChange::Add(decoration) => {
                    self.starts.insert(decoration.id, decoration.range.start);
                    self.by_start
                        .insert((decoration.range.start, decoration.id), decoration);
                    added += 1;
                }
                PendingChange::Remove(id) => match self.starts.remove(&id) {
                    Some(start) => {
                        self.by_start.remove(&(start, id));
                        removed += 1;
                    }
                    None => trace!(%id, "Ignoring removal of unknown decoration"),
                },
            }
        }

        if added + removed > 0 {
            self.version += 1;
        }
        debug!(added, removed, total = self.len(), "Committed decoration changes");
    }
}
