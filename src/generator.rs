/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
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
use crate::conv_support::PixelLayout;
use crate::images::FrameImageMut;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Value written into every padding byte so that out-of-bounds writes by a
/// kernel are observable afterwards.
pub const PADDING_SENTINEL: u8 = 0xA5;

/// Upper bound for randomized trailing row padding, in elements.
pub const MAX_ROW_PADDING: u32 = 64;

/// Produces randomized test frames from an explicit, reproducible
/// pseudo-random state.
pub struct FrameGenerator {
    rng: StdRng,
}

impl FrameGenerator {
    pub fn from_seed(seed: u64) -> Self {
        FrameGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        FrameGenerator {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draws a frame size uniformly from the given inclusive ranges.
    pub fn random_size(
        &mut self,
        width: RangeInclusive<u32>,
        height: RangeInclusive<u32>,
    ) -> (u32, u32) {
        (
            self.rng.random_range(width),
            self.rng.random_range(height),
        )
    }

    /// Allocates a frame with randomized trailing row padding, random pixel
    /// content and sentinel-filled padding bytes.
    pub fn random_frame(
        &mut self,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> FrameImageMut<'static, u8> {
        let padding = self.rng.random_range(0..=MAX_ROW_PADDING);
        let mut frame = FrameImageMut::alloc_with_padding(width, height, layout, padding);
        let row_elements = width as usize * layout.get_channels_count();
        let stride = frame.stride as usize;
        let data = frame.data.as_mut();
        self.rng.fill(data);
        for row in data.chunks_exact_mut(stride) {
            row[row_elements..].fill(PADDING_SENTINEL);
        }
        frame
    }

    /// Allocates a destination frame with randomized trailing row padding,
    /// fully sentinel-filled so untouched bytes stay recognizable.
    pub fn target_frame(
        &mut self,
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> FrameImageMut<'static, u8> {
        let padding = self.rng.random_range(0..=MAX_ROW_PADDING);
        let mut frame = FrameImageMut::alloc_with_padding(width, height, layout, padding);
        frame.data.as_mut().fill(PADDING_SENTINEL);
        frame
    }

    /// Directed boundary sizes for edge-case coverage: single pixel, single
    /// row, single column and small odd extents.
    pub const fn boundary_sizes() -> [(u32, u32); 5] {
        [(1, 1), (1, 7), (7, 1), (3, 5), (17, 3)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_frames() {
        let mut a = FrameGenerator::from_seed(42);
        let mut b = FrameGenerator::from_seed(42);
        let fa = a.random_frame(19, 11, PixelLayout::Rgbx);
        let fb = b.random_frame(19, 11, PixelLayout::Rgbx);
        assert_eq!(fa.stride, fb.stride);
        assert_eq!(fa.data.borrow(), fb.data.borrow());
    }

    #[test]
    fn padding_carries_sentinel() {
        let mut generator = FrameGenerator::from_seed(5);
        for _ in 0..16 {
            let frame = generator.random_frame(9, 4, PixelLayout::Rgb);
            let row_elements = 9 * 3;
            assert!(frame.stride as usize >= row_elements);
            for row in frame.data.borrow().chunks_exact(frame.stride as usize) {
                assert!(row[row_elements..].iter().all(|&b| b == PADDING_SENTINEL));
            }
        }
    }

    #[test]
    fn random_size_respects_ranges() {
        let mut generator = FrameGenerator::from_seed(11);
        for _ in 0..64 {
            let (w, h) = generator.random_size(1..=32, 2..=17);
            assert!((1..=32).contains(&w));
            assert!((2..=17).contains(&h));
        }
    }

    #[test]
    fn target_frame_is_fully_sentinel() {
        let mut generator = FrameGenerator::from_seed(8);
        let frame = generator.target_frame(6, 6, PixelLayout::Rgba);
        assert!(frame
            .data
            .borrow()
            .iter()
            .all(|&b| b == PADDING_SENTINEL));
    }
}
