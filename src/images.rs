/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::conv_error::check_frame_destination;
use crate::conv_support::PixelLayout;
use crate::ConvError;
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStoreMut<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStoreMut<'_, T> {
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub fn as_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

#[derive(Debug, Clone)]
/// Non-mutable representation of an interleaved frame
pub struct FrameImage<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    /// Stride here always means elements per row, may exceed `width * channels`.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> FrameImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self, layout: PixelLayout) -> Result<(), ConvError> {
        check_frame_destination(
            self.data,
            self.stride,
            self.width,
            self.height,
            layout.get_channels_count(),
        )
    }
}

#[derive(Debug)]
/// Mutable representation of an interleaved frame
pub struct FrameImageMut<'a, T>
where
    T: Copy + Debug,
{
    pub data: BufferStoreMut<'a, T>,
    /// Stride here always means elements per row, may exceed `width * channels`.
    pub stride: u32,
    pub width: u32,
    pub height: u32,
}

impl<T> FrameImageMut<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self, layout: PixelLayout) -> Result<(), ConvError> {
        check_frame_destination(
            self.data.borrow(),
            self.stride,
            self.width,
            self.height,
            layout.get_channels_count(),
        )
    }

    pub fn to_fixed(&self) -> FrameImage<'_, T> {
        FrameImage {
            data: self.data.borrow(),
            stride: self.stride,
            width: self.width,
            height: self.height,
        }
    }
}

impl<T> FrameImageMut<'_, T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates a mutable frame with the minimum required stride
    pub fn alloc(width: u32, height: u32, layout: PixelLayout) -> Self {
        Self::alloc_with_padding(width, height, layout, 0)
    }

    /// Allocates a mutable frame whose rows carry `padding` trailing elements
    pub fn alloc_with_padding(width: u32, height: u32, layout: PixelLayout, padding: u32) -> Self {
        let stride = width * layout.get_channels_count() as u32 + padding;
        let target = vec![T::default(); stride as usize * height as usize];
        FrameImageMut {
            data: BufferStoreMut::Owned(target),
            stride,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_respects_padding() {
        let frame = FrameImageMut::<u8>::alloc_with_padding(5, 3, PixelLayout::Rgb, 7);
        assert_eq!(frame.stride, 5 * 3 + 7);
        assert_eq!(frame.data.borrow().len(), frame.stride as usize * 3);
        assert!(frame.check_constraints(PixelLayout::Rgb).is_ok());
    }

    #[test]
    fn constraints_reject_short_buffer() {
        let frame = FrameImage::<u8> {
            data: &[0u8; 10],
            stride: 12,
            width: 4,
            height: 1,
        };
        assert!(matches!(
            frame.check_constraints(PixelLayout::Rgb),
            Err(ConvError::DestinationSizeMismatch(_))
        ));
    }

    #[test]
    fn constraints_reject_zero_sizes() {
        let frame = FrameImage::<u8> {
            data: &[],
            stride: 0,
            width: 0,
            height: 0,
        };
        assert!(matches!(
            frame.check_constraints(PixelLayout::Rgbx),
            Err(ConvError::ZeroBaseSize)
        ));
    }
}
