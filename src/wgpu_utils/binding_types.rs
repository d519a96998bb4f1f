// src/wgpu_utils/binding_types.rs
//! WGPU binding type utilities

pub fn uniform() -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: None,
    }
}

/// Uniform buffer bound once and addressed per draw with a dynamic offset
///
/// `min_binding_size` is the size of one element of the buffer.
pub fn uniform_dynamic(min_binding_size: u64) -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: true,
        min_binding_size: wgpu::BufferSize::new(min_binding_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_uniform_keeps_element_size() {
        match uniform_dynamic(288) {
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset,
                min_binding_size,
            } => {
                assert!(has_dynamic_offset);
                assert_eq!(min_binding_size.map(|size| size.get()), Some(288));
            }
            other => panic!("unexpected binding type {:?}", other),
        }
    }

    #[test]
    fn test_plain_uniform_has_no_offset() {
        assert!(matches!(
            uniform(),
            wgpu::BindingType::Buffer {
                has_dynamic_offset: false,
                ..
            }
        ));
    }
}
