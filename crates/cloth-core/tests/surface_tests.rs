use glam::Vec3;
use cloth_core::surface::{gen_indices, Surface, SurfaceVertex};

#[test]
fn test_single_cell_indices() {
    assert_eq!(gen_indices(2, 2), vec![0, 1, 2, 2, 1, 3]);
}

#[test]
fn test_index_count_and_range() {
    let indices = gen_indices(3, 4);
    assert_eq!(indices.len(), 2 * 3 * 6);
    assert!(indices.iter().all(|&k| k < 12));

    // Second cell of the second row.
    assert_eq!(&indices[24..30], &[5, 6, 9, 9, 6, 10]);
}

#[test]
fn test_triangles_face_the_same_way() {
    // Sheet in the XY plane: every triangle's normal must point along +Z.
    let rows = 3;
    let cols = 3;
    let pos = |k: u32| Vec3::new((k as usize % cols) as f32, (k as usize / cols) as f32, 0.0);
    for tri in gen_indices(rows, cols).chunks(3) {
        let n = (pos(tri[1]) - pos(tri[0])).cross(pos(tri[2]) - pos(tri[0]));
        assert!(n.z > 0.0, "triangle {tri:?} winds the wrong way");
    }
}

#[test]
fn test_upload_mirrors_positions() {
    let mut surface = Surface::new(2, 3);
    assert_eq!(surface.upload_count(), 0);
    assert_eq!(surface.vertex_bytes().len(), 12 * 6);
    assert_eq!(surface.index_bytes().len(), 4 * 12);
    assert_eq!(std::mem::size_of::<SurfaceVertex>(), 12);

    let positions: Vec<Vec3> = (0..6).map(|k| Vec3::new(k as f32, -(k as f32), 0.5)).collect();
    surface.upload(&positions);

    assert_eq!(surface.upload_count(), 1);
    for (v, p) in surface.vertices().iter().zip(&positions) {
        assert_eq!(v.position, p.to_array());
    }
    let floats: &[f32] = bytemuck::cast_slice(surface.vertex_bytes());
    assert_eq!(&floats[3..6], &[1.0, -1.0, 0.5]);
}
