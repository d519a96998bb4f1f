// src/wgpu_utils/uniform_buffer.rs
use std::marker::PhantomData;

use log::debug;

/// Rounds `size` up to the next multiple of `alignment`
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}

/// Uniform buffer holding one `Content` block per draw
///
/// Blocks are laid out at the device's dynamic-offset alignment so a single
/// bind group serves every draw of a frame. The buffer grows when a frame
/// needs more blocks than it holds; callers must rebuild their bind group
/// when [`write_all`](Self::write_all) reports a reallocation.
pub struct DynamicUniformBuffer<Content> {
    buffer: wgpu::Buffer,
    content_type: PhantomData<Content>,
    stride: u64,
    capacity: usize,
}

impl<Content: bytemuck::Pod> DynamicUniformBuffer<Content> {
    fn name() -> &'static str {
        let type_name = std::any::type_name::<Content>();
        match type_name.rfind(':') {
            Some(pos) => &type_name[(pos + 1)..],
            None => type_name,
        }
    }

    fn element_size() -> u64 {
        std::mem::size_of::<Content>() as u64
    }

    /// Create a buffer with room for `capacity` blocks
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = aligned_stride(Self::element_size(), alignment);
        let capacity = capacity.max(1);

        Self {
            buffer: Self::allocate(device, stride, capacity),
            content_type: PhantomData,
            stride,
            capacity,
        }
    }

    fn allocate(device: &wgpu::Device, stride: u64, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("DynamicUniformBuffer: {}", Self::name())),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Uploads one block per element of `contents`
    ///
    /// # Returns
    /// `true` if the buffer had to be reallocated
    pub fn write_all(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        contents: &[Content],
    ) -> bool {
        let grown = contents.len() > self.capacity;
        if grown {
            self.capacity = contents.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.stride, self.capacity);
            debug!(
                "grew {} buffer to {} blocks",
                Self::name(),
                self.capacity
            );
        }

        if contents.is_empty() {
            return grown;
        }

        let stride = self.stride as usize;
        let mut staging = vec![0u8; stride * contents.len()];
        for (block, content) in staging.chunks_exact_mut(stride).zip(contents) {
            let bytes = bytemuck::bytes_of(content);
            block[..bytes.len()].copy_from_slice(bytes);
        }
        queue.write_buffer(&self.buffer, 0, &staging);
        grown
    }

    /// Dynamic offset of block `index`
    pub fn offset(&self, index: usize) -> wgpu::DynamicOffset {
        (self.stride * index as u64) as wgpu::DynamicOffset
    }

    /// Binding of a single block, to be combined with [`offset`](Self::offset)
    pub fn binding_resource(&self) -> wgpu::BindingResource {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: wgpu::BufferSize::new(Self::element_size()),
        })
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
