use sea_orm::{EntityTrait, IdenStatic, Iterable};

/// Scalar column names of a mapped entity, in declaration order.
///
/// Relations (`Related`, `Linked`) are not columns and never appear here, so
/// the list is safe to use for serialization or admin listings.
pub trait ColumnNames: EntityTrait {
    fn columns() -> Vec<String> {
        Self::Column::iter().map(|c| IdenStatic::as_str(&c).to_owned()).collect()
    }
}

impl<E: EntityTrait> ColumnNames for E {}
