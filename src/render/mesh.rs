use std::f32::consts::PI;

#[derive(Copy, Clone)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoords: [f32; 2],
}

implement_vertex!(Vertex, position, normal, texcoords);

/// Segment count of the body spheres, in both directions.
pub const SPHERE_SEGMENTS: usize = 30;

/// Generates a unit-radius UV sphere. Per-body radius is applied by the
/// model matrix, so one mesh serves every body. Texture u runs around the
/// equator, v from the north pole (0) to the south pole (1).
pub fn unit_sphere(segments: usize) -> (Vec<Vertex>, Vec<u16>) {
    let stride = segments + 1;

    let mut vertices = Vec::with_capacity(stride * stride);
    for i in 0..=segments {
        let v = i as f32 / segments as f32;
        let theta = v * PI;
        for j in 0..=segments {
            let u = j as f32 / segments as f32;
            let phi = u * 2.0 * PI;
            let dir = [
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ];
            vertices.push(Vertex {
                position: dir,
                normal: dir,
                texcoords: [u, v],
            });
        }
    }

    // Two triangles per quad, counter-clockwise as seen from outside.
    let mut indices: Vec<u16> = Vec::with_capacity(segments * segments * 6);
    for i in 0..segments {
        for j in 0..segments {
            let a = (i * stride + j) as u16;
            let b = (i * stride + j + 1) as u16;
            let c = ((i + 1) * stride + j + 1) as u16;
            let d = ((i + 1) * stride + j) as u16;

            indices.push(a);
            indices.push(b);
            indices.push(c);

            indices.push(a);
            indices.push(c);
            indices.push(d);
        }
    }

    (vertices, indices)
}
