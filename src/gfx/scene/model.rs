//! # Model Transform Stack
//!
//! A stack of object-to-world matrices for hierarchical drawing. Elementary
//! transforms post-multiply the top of the stack, so each call applies in the
//! current local frame. The stack is never empty: popping the last frame
//! re-seeds it with the identity.
//!
//! Scoped frames are taken with [`ModelStack::push`], which returns a guard
//! that pops on drop, so early returns never leave a frame behind.

use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix};
use std::ops::{Deref, DerefMut};

use crate::gfx::geometry::Vector;

#[derive(Debug, Clone)]
pub struct ModelStack {
    frames: Vec<Matrix4<f32>>,
}

impl Default for ModelStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Matrix4::identity()],
        }
    }

    /// Currently active composed transform
    pub fn matrix(&self) -> Matrix4<f32> {
        self.frames
            .last()
            .copied()
            .unwrap_or_else(Matrix4::identity)
    }

    /// Number of frames on the stack, always at least one
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn translate(&mut self, offset: Vector) {
        self.apply(Matrix4::from_translation(offset));
    }

    pub fn scale(&mut self, factors: Vector) {
        self.apply(Matrix4::from_nonuniform_scale(
            factors.x, factors.y, factors.z,
        ));
    }

    /// Rotates by `angle` around `axis`; a zero axis leaves the top untouched
    pub fn rotate(&mut self, angle: Deg<f32>, axis: Vector) {
        if axis.magnitude2() == 0.0 {
            return;
        }
        self.apply(Matrix4::from_axis_angle(axis.normalize(), angle));
    }

    /// Duplicates the top onto a new frame
    pub fn push_matrix(&mut self) {
        let top = self.matrix();
        self.frames.push(top);
    }

    /// Discards the top frame, falling back to the identity when none remain
    pub fn pull_matrix(&mut self) {
        self.frames.pop();
        if self.frames.is_empty() {
            self.frames.push(Matrix4::identity());
        }
    }

    /// Pushes a frame that is pulled again when the guard goes out of scope
    pub fn push(&mut self) -> ModelFrame<'_> {
        self.push_matrix();
        ModelFrame { stack: self }
    }

    fn apply(&mut self, transform: Matrix4<f32>) {
        match self.frames.last_mut() {
            Some(top) => *top = *top * transform,
            None => self.frames.push(transform),
        }
    }
}

/// Scoped frame on a [`ModelStack`]
pub struct ModelFrame<'a> {
    stack: &'a mut ModelStack,
}

impl Deref for ModelFrame<'_> {
    type Target = ModelStack;

    fn deref(&self) -> &ModelStack {
        self.stack
    }
}

impl DerefMut for ModelFrame<'_> {
    fn deref_mut(&mut self) -> &mut ModelStack {
        self.stack
    }
}

impl Drop for ModelFrame<'_> {
    fn drop(&mut self) {
        self.stack.pull_matrix();
    }
}
