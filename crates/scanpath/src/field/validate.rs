use super::{Field, FieldError};
use crate::geom2::{find_convex_ordering, obstacles_intersect, Obstacle};

/// Validate a user-supplied field and return its obstacles in convex vertex order.
///
/// Obstacles are checked in index order and the first failure stops validation:
/// outside the bounds, no convex ordering, or intersecting another obstacle. The
/// intersection check compares the reordered obstacle against the other obstacles
/// as given (raw, not yet reordered).
pub fn validate_field(field: &Field) -> Result<Vec<Obstacle>, FieldError> {
    field.check_bounds()?;
    field
        .obstacles
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            if !raw.within(field.x_max, field.y_max) {
                return Err(FieldError::OutsideBounds { index });
            }
            let convex =
                find_convex_ordering(&raw.vertices).ok_or(FieldError::NotConvex { index })?;
            let hit = field
                .obstacles
                .iter()
                .enumerate()
                .find(|&(other, o)| other != index && obstacles_intersect(&convex, o));
            if let Some((other, _)) = hit {
                return Err(FieldError::Intersects { index, other });
            }
            Ok(convex)
        })
        .collect()
}
