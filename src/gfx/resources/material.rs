//! Phong materials and the scene light
//!
//! The shader receives light and material combined: each of the ambient,
//! diffuse and specular products is the component-wise product of the light's
//! and the material's coefficients.

use cgmath::ElementWise;

use crate::error::ShaderError;
use crate::gfx::geometry::Vector;
use crate::gfx::rendering::shader_program::{uniforms, ShaderProgram};

/// Reflection coefficients of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub shininess: f32,
    pub ambient: Vector,
    pub diffuse: Vector,
    pub specular: Vector,
}

impl Material {
    /// Material of every body that is not selected
    pub const DEFAULT: Material = Material {
        shininess: 1000.0,
        ambient: Vector::new(1.0, 1.0, 1.0),
        diffuse: Vector::new(1.0, 1.0, 1.0),
        specular: Vector::new(1.0, 1.0, 1.0),
    };

    /// Reddish highlight of the selected body
    pub const SELECTED: Material = Material {
        shininess: 1000.0,
        ambient: Vector::new(5.0, 0.0, 0.0),
        diffuse: Vector::new(0.8, 0.5, 0.5),
        specular: Vector::new(0.8, 0.5, 0.5),
    };

    /// Preset for a body with the given selection state
    pub fn for_selection(selected: bool) -> &'static Material {
        if selected {
            &Self::SELECTED
        } else {
            &Self::DEFAULT
        }
    }

    /// Sets `shininess` and the three light products on `program`
    ///
    /// Must run before the mesh of the body wearing this material is drawn.
    pub fn apply<P>(&self, light: &Light, program: &mut P) -> Result<(), ShaderError>
    where
        P: ShaderProgram + ?Sized,
    {
        let products = light.products(self);
        program.set_uniform_float(uniforms::SHININESS, self.shininess)?;
        program.set_uniform_vec3(uniforms::AMBIENT_PRODUCT, products.ambient)?;
        program.set_uniform_vec3(uniforms::DIFFUSE_PRODUCT, products.diffuse)?;
        program.set_uniform_vec3(uniforms::SPECULAR_PRODUCT, products.specular)
    }
}

/// Point light intensities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub ambient: Vector,
    pub diffuse: Vector,
    pub specular: Vector,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            ambient: Vector::new(0.1, 0.1, 0.1),
            diffuse: Vector::new(1.0, 1.0, 1.0),
            specular: Vector::new(0.2, 0.2, 0.2),
        }
    }
}

/// Light × material coefficients, as consumed by the shader
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingProducts {
    pub ambient: Vector,
    pub diffuse: Vector,
    pub specular: Vector,
}

impl Light {
    pub fn products(&self, material: &Material) -> LightingProducts {
        LightingProducts {
            ambient: self.ambient.mul_element_wise(material.ambient),
            diffuse: self.diffuse.mul_element_wise(material.diffuse),
            specular: self.specular.mul_element_wise(material.specular),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::shader_program::DrawRecorder;

    #[test]
    fn test_products_are_component_wise() {
        let products = Light::default().products(&Material::SELECTED);
        assert!((products.ambient.x - 0.5).abs() < 1e-6);
        assert_eq!(products.ambient.y, 0.0);
        assert_eq!(products.diffuse, Vector::new(0.8, 0.5, 0.5));
        assert!((products.specular.x - 0.16).abs() < 1e-6);
    }

    #[test]
    fn test_selection_picks_preset() {
        assert_eq!(Material::for_selection(true), &Material::SELECTED);
        assert_eq!(Material::for_selection(false), &Material::DEFAULT);
    }

    #[test]
    fn test_apply_sets_material_uniforms() {
        let mut recorder = DrawRecorder::new();
        Material::DEFAULT
            .apply(&Light::default(), &mut recorder)
            .unwrap();

        let state = recorder.current();
        assert_eq!(state.shininess, 1000.0);
        assert_eq!(&state.diffuse_product[..3], &[1.0, 1.0, 1.0]);
    }
}
