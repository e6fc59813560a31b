use bytemuck::{Pod, Zeroable};

/// One vertex position in clip space.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Position {
    pub xyz: [f32; 3],
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { xyz: [x, y, z] }
    }
}

/// Apex at the top, base along `y = -0.5`.
pub const TRIANGLE_VERTICES: [Position; 3] = [
    Position::new(0.0, 0.5, 0.0),
    Position::new(-0.5, -0.5, 0.0),
    Position::new(0.5, -0.5, 0.0),
];

pub const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

/// Returns the first index that does not reference one of `vertex_count` vertices.
pub fn check_indices(indices: &[u16], vertex_count: usize) -> Result<(), u16> {
    match indices.iter().find(|&&i| usize::from(i) >= vertex_count) {
        Some(&bad) => Err(bad),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_nine_floats() {
        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(
            floats,
            &[0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0]
        );
    }

    #[test]
    fn indices_reference_all_three_vertices() {
        assert_eq!(TRIANGLE_INDICES, [0, 1, 2]);
        assert_eq!(check_indices(&TRIANGLE_INDICES, TRIANGLE_VERTICES.len()), Ok(()));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        assert_eq!(check_indices(&[0, 1, 3], 3), Err(3));
        assert_eq!(check_indices(&[0], 0), Err(0));
    }

    #[test]
    fn position_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Position>(), 12);
    }
}
