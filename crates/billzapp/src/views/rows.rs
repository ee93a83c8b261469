use crate::model::MonetaryEntity;

/// The rows a table shows: everything when `filter` is `None`, otherwise the
/// entities whose status equals `filter`, in their original order.
pub fn visible_rows<E: MonetaryEntity>(entities: &[E], filter: Option<E::Status>) -> Vec<&E> {
    match filter {
        None => entities.iter().collect(),
        Some(status) => entities
            .iter()
            .filter(|e| e.status() == Some(status))
            .collect(),
    }
}
