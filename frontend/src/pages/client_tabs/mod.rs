//! Tabs of the client detail page. Each tab owns its own fetch, keyed by
//! client id, so switching clients drops answers for the previous one.

mod messages;
mod notes;
mod orders;
mod summary;
mod transactions;

pub use messages::MessagesTab;
pub use notes::NotesTab;
pub use orders::OrdersTab;
pub use summary::SummaryTab;
pub use transactions::TransactionsTab;

use clientdesk_shared::RecordId;

/// Copy of `items` with the entry sharing `updated`'s id swapped out.
/// Unknown ids leave the list untouched.
pub(crate) fn replace_by_id<T, F>(items: &[T], updated: T, id_of: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &RecordId,
{
    items
        .iter()
        .map(|item| {
            if id_of(item) == id_of(&updated) {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// `item` followed by a copy of `items`, for freshly created entries.
pub(crate) fn prepend<T: Clone>(items: &[T], item: T) -> Vec<T> {
    std::iter::once(item).chain(items.iter().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: RecordId,
        read: bool,
    }

    fn row(id: i64, read: bool) -> Row {
        Row { id: RecordId::from(id), read }
    }

    #[test]
    fn test_replace_by_id() {
        let rows = vec![row(1, false), row(2, false), row(3, false)];

        let updated = replace_by_id(&rows, row(2, true), |r| &r.id);

        assert_eq!(updated, vec![row(1, false), row(2, true), row(3, false)]);
    }

    #[test]
    fn test_prepend_puts_new_entry_first() {
        let rows = vec![row(1, true)];

        assert_eq!(prepend(&rows, row(2, false)), vec![row(2, false), row(1, true)]);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let rows = vec![row(1, false)];

        assert_eq!(replace_by_id(&rows, row(9, true), |r| &r.id), rows);
    }
}
