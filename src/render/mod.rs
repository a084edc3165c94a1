use crate::frustum::Frustum;
use crate::settings::Settings;
use crate::solar_system::SolarSystem;
use crate::transform::Transform;
use glium::backend::Facade;
use glium::index::PrimitiveType;
use glium::uniforms::{MagnifySamplerFilter, MinifySamplerFilter};
use glium::{Frame, IndexBuffer, Program, Surface, VertexBuffer};
use nalgebra::{Matrix4, Vector3};
use std::error::Error;
use std::path::Path;

mod mesh;
mod textures;

pub use self::mesh::Vertex;
pub use self::textures::TextureSet;

lazy_static! {
    /// Direction towards the single directional light of the scene.
    static ref LIGHT_DIRECTION: Vector3<f32> = Vector3::new(10.0, 10.0, 10.0).normalize();
}

const VERTEX_SHADER: &str = r#"
    #version 330 core

    in vec3 position;
    in vec3 normal;
    in vec2 texcoords;

    out vec3 Normal;
    out vec2 Texcoords;

    uniform mat4 viewProjection;
    uniform mat4 model;

    void main() {
        gl_Position = viewProjection*(model*vec4(position, 1.0));

        Normal = mat3(model)*normal;
        Texcoords = texcoords;
    }
"#;

const FRAGMENT_SHADER: &str = r#"
    #version 330 core

    in vec3 Normal;
    in vec2 Texcoords;

    out vec4 color;

    uniform sampler2D surface;
    uniform vec3 lightDirection;
    uniform bool lit;

    const vec3 ambient = vec3(0.25, 0.25, 0.25);

    void main() {
        vec4 albedo = texture(surface, Texcoords);
        if (lit) {
            float nDotL = max(0.0, dot(normalize(Normal), lightDirection));
            vec3 shade = min(ambient + vec3(nDotL), vec3(1.0));
            color = vec4(albedo.rgb*shade, 1.0);
        } else {
            color = vec4(albedo.rgb, 1.0);
        }
    }
"#;

/// Draws the scene graph: one textured unit sphere per body, scaled and
/// placed by the model matrix. Bodies marked unlit (the sun) skip the
/// directional shading.
pub struct Renderer {
    program: Program,
    vertex_buffer: VertexBuffer<Vertex>,
    index_buffer: IndexBuffer<u16>,
    textures: TextureSet,
}

impl Renderer {
    pub fn new<F: ?Sized + Facade>(
        facade: &F,
        settings: &Settings,
    ) -> Result<Renderer, Box<dyn Error>> {
        let program = Program::from_source(facade, VERTEX_SHADER, FRAGMENT_SHADER, None)?;

        let (vertices, indices) = mesh::unit_sphere(mesh::SPHERE_SEGMENTS);
        let vertex_buffer = VertexBuffer::new(facade, &vertices)?;
        let index_buffer = IndexBuffer::new(facade, PrimitiveType::TrianglesList, &indices)?;

        let textures = TextureSet::load(facade, Path::new(&settings.assets_dir))?;

        Ok(Renderer {
            program,
            vertex_buffer,
            index_buffer,
            textures,
        })
    }

    /// Issues one draw of the scene through the given frustum.
    /// * `frame` - The frame to render to
    /// * `frustum` - The view to render from, in world space.
    pub fn draw(&self, frame: &mut Frame, frustum: &Frustum, system: &SolarSystem) {
        let view_projection: [[f32; 4]; 4] = frustum.view_projection().into();
        let light_direction = [LIGHT_DIRECTION.x, LIGHT_DIRECTION.y, LIGHT_DIRECTION.z];

        let params = glium::DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                ..Default::default()
            },
            backface_culling: glium::BackfaceCullingMode::CullClockwise,
            ..Default::default()
        };

        system.graph.visit_bodies(|world, body| {
            let surface = self
                .textures
                .get(body.texture)
                .sampled()
                .magnify_filter(MagnifySamplerFilter::Linear)
                .minify_filter(MinifySamplerFilter::Linear);

            let uniforms = uniform! {
                viewProjection: view_projection,
                model: Into::<[[f32; 4]; 4]>::into(model_matrix(world, body.radius)),
                surface: surface,
                lightDirection: light_direction,
                lit: body.lit,
            };

            frame
                .draw(
                    &self.vertex_buffer,
                    &self.index_buffer,
                    &self.program,
                    &uniforms,
                    &params,
                )
                .unwrap();
        });
    }
}

fn model_matrix(world: &Transform, radius: f64) -> Matrix4<f32> {
    nalgebra::convert::<Matrix4<f64>, Matrix4<f32>>(world.to_homogeneous())
        * Matrix4::new_scaling(radius as f32)
}
