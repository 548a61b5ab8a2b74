//! Spatial queries over the [`Grid`](crate::Grid).
//!
//! Every query is a `&self` method on the grid and never mutates it. Queries
//! are split by family:
//! - [`reach`]: breadth-first reachability within a step budget
//! - [`area`]: directional rays and discs used for weapons and waves
//! - [`path`]: budgeted A* routing
pub mod area;
pub mod path;
pub mod reach;

/// Shape of a target area or of a wave's reach.
///
/// Directions are grid relative: `Up` walks towards larger `y`, `Right`
/// towards larger `x`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AreaShape {
    /// The four axis rays, in `Up`, `Down`, `Left`, `Right` order.
    Cross,
    Up,
    Down,
    Left,
    Right,
    /// The four diagonal rays.
    Diagonal,
    /// Every cell within a Euclidean radius.
    Area,
}

impl AreaShape {
    /// Unit steps of the rays making up this shape. Empty for [`AreaShape::Area`].
    pub fn rays(self) -> &'static [(i32, i32)] {
        match self {
            Self::Cross => &[(0, 1), (0, -1), (-1, 0), (1, 0)],
            Self::Up => &[(0, 1)],
            Self::Down => &[(0, -1)],
            Self::Left => &[(-1, 0)],
            Self::Right => &[(1, 0)],
            Self::Diagonal => &[(1, 1), (-1, 1), (-1, -1), (1, -1)],
            Self::Area => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_shape_but_area_has_rays() {
        for shape in AreaShape::iter() {
            assert_eq!(shape.rays().is_empty(), shape == AreaShape::Area, "{shape}");
        }
    }

    #[test]
    fn parses_from_data_files() {
        assert_eq!("diagonal".parse::<AreaShape>().unwrap(), AreaShape::Diagonal);
        assert_eq!("Up".parse::<AreaShape>().unwrap(), AreaShape::Up);
        assert!("sideways".parse::<AreaShape>().is_err());
    }
}
