use cgmath::{InnerSpace, Vector3};
use orrery::data_structures::mesh::{icosahedron, uv_sphere};

const EPS: f32 = 1e-4;

#[test]
fn uv_sphere_emits_the_expected_counts() {
    let (vertices, indices) = uv_sphere(1.0, 8, 8);
    assert_eq!(vertices.len(), 9 * 9);
    assert_eq!(indices.len(), 8 * 8 * 6);
}

#[test]
fn uv_sphere_indices_stay_in_bounds() {
    let (vertices, indices) = uv_sphere(0.6, 16, 16);
    assert_eq!(indices.len() % 3, 0);
    for index in indices {
        assert!((index as usize) < vertices.len());
    }
}

#[test]
fn sphere_normals_are_unit_length_and_radial() {
    let (vertices, _) = uv_sphere(30.0, 32, 16);
    for vertex in vertices {
        let normal = Vector3::from(vertex.normal);
        let position = Vector3::from(vertex.position);
        assert!((normal.magnitude() - 1.0).abs() < EPS);
        assert!((position - normal * 30.0).magnitude() < 1e-3);
    }
}

#[test]
fn sphere_texture_coordinates_cover_the_unit_square() {
    let (vertices, _) = uv_sphere(4.0, 32, 16);
    for vertex in &vertices {
        assert!((0.0..=1.0).contains(&vertex.tex_coords[0]));
        assert!((0.0..=1.0).contains(&vertex.tex_coords[1]));
    }
    // Seam vertices exist at both u = 0 and u = 1.
    assert!(vertices.iter().any(|v| v.tex_coords[0] == 0.0));
    assert!(vertices.iter().any(|v| v.tex_coords[0] == 1.0));
}

#[test]
fn degenerate_sphere_requests_are_rounded_up() {
    // The generator refuses to build less than a tetrahedron-ish shell.
    let (vertices, indices) = uv_sphere(1.0, 0, 0);
    assert!(!vertices.is_empty());
    assert!(!indices.is_empty());
}

#[test]
fn icosahedron_has_twelve_vertices_and_twenty_faces() {
    let (vertices, indices) = icosahedron(0.9);
    assert_eq!(vertices.len(), 12);
    assert_eq!(indices.len(), 20 * 3);
    for index in indices {
        assert!((index as usize) < vertices.len());
    }
}

#[test]
fn icosahedron_vertices_sit_on_the_circumsphere() {
    let (vertices, _) = icosahedron(0.9);
    for vertex in vertices {
        let position = Vector3::from(vertex.position);
        assert!((position.magnitude() - 0.9).abs() < EPS);
    }
}
